use serde::{Deserialize, Serialize};

use crate::search::round::Round;

/// Default position when a query names no role.
pub const DEFAULT_POSITION: &str = "Software Engineer";

/// Soft warning attached to the last-resort default.
pub const FALLBACK_WARNING: &str = "Could not fully parse. Using defaults.";

/// Structured result of parsing a free-text search query.
///
/// `round` is a plain string: every value produced by this crate is a canonical
/// `Round` label, but callers may construct other values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSearch {
    pub company: String,
    pub position: String,
    pub round: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ParsedSearch {
    pub fn new(company: impl Into<String>, position: impl Into<String>, round: Round) -> Self {
        Self {
            company: company.into(),
            position: position.into(),
            round: round.label().to_string(),
            error: None,
        }
    }

    /// The last-resort default: first word of the query (or the raw query),
    /// default position and round, plus a soft warning.
    pub fn last_resort(query: &str) -> Self {
        let company = query.split_whitespace().next().unwrap_or(query);
        Self {
            error: Some(FALLBACK_WARNING.to_string()),
            ..Self::new(company, DEFAULT_POSITION, Round::Technical)
        }
    }
}

/// Provenance of a suggestion. Display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionType {
    Company,
    Role,
    History,
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSuggestion {
    pub text: String,
    #[serde(rename = "type")]
    pub suggestion_type: SuggestionType,
}

impl SearchSuggestion {
    pub fn new(text: impl Into<String>, suggestion_type: SuggestionType) -> Self {
        Self {
            text: text.into(),
            suggestion_type,
        }
    }
}

/// Raw fields returned by a text-generation backend. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExtractedSearch {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub round: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_resort_uses_first_word() {
        let parsed = ParsedSearch::last_resort("Stripe backend something");
        assert_eq!(parsed.company, "Stripe");
        assert_eq!(parsed.position, "Software Engineer");
        assert_eq!(parsed.round, "Technical");
        assert_eq!(parsed.error.as_deref(), Some(FALLBACK_WARNING));
    }

    #[test]
    fn test_last_resort_with_no_words_keeps_raw_query() {
        let parsed = ParsedSearch::last_resort("   ");
        assert_eq!(parsed.company, "   ");
        assert!(parsed.error.is_some());
    }

    #[test]
    fn test_parsed_search_omits_absent_error() {
        let parsed = ParsedSearch::new("Google", "PM", Round::Behavioral);
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"company": "Google", "position": "PM", "round": "Behavioral"})
        );
    }

    #[test]
    fn test_suggestion_serializes_type_field() {
        let suggestion = SearchSuggestion::new("Google", SuggestionType::Company);
        let json = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(json, serde_json::json!({"text": "Google", "type": "company"}));
    }

    #[test]
    fn test_extracted_search_tolerates_missing_fields() {
        let extracted: ExtractedSearch = serde_json::from_str(r#"{"company": "Meta"}"#).unwrap();
        assert_eq!(extracted.company.as_deref(), Some("Meta"));
        assert!(extracted.position.is_none());
        assert!(extracted.round.is_none());
    }
}
