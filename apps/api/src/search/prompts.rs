// LLM prompt constants for search query extraction.

/// System prompt for search extraction. Enforces JSON-only output.
pub const SEARCH_PARSE_SYSTEM: &str =
    "You are parsing interview preparation search queries into structured fields. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Search extraction prompt template. Replace `{query}` before sending.
pub const SEARCH_PARSE_PROMPT_TEMPLATE: &str = r#"Extract EXACTLY what the user is asking for from this interview preparation search query.

Query: "{query}"

Rules:
1. COMPANY: The first word or phrase is almost always the company name.
2. POSITION: Look for job titles (e.g. "Software Engineer", "PM", "Product Manager", "Designer").
   - If missing or generic, use "Software Engineer".
3. ROUND: Interview round type. Normalize to one of: "Recruiter Screen", "Technical", "System Design", "Behavioral", "Hiring Manager", "Onsite".
   - "coding", "algo", "leetcode" -> "Technical"
   - "culture", "fit" -> "Behavioral"
   - If unspecified, use "Technical".

Examples:
- "google swe" -> {"company": "Google", "position": "Software Engineer", "round": "Technical"}
- "amazon pm behavioral" -> {"company": "Amazon", "position": "Product Manager", "round": "Behavioral"}
- "netflix frontend system design" -> {"company": "Netflix", "position": "Frontend Engineer", "round": "System Design"}

Return ONLY valid JSON with this EXACT schema:
{"company": "...", "position": "...", "round": "..."}"#;

pub fn build_search_parse_prompt(query: &str) -> String {
    SEARCH_PARSE_PROMPT_TEMPLATE.replace("{query}", query)
}
