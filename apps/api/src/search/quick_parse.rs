//! Quick parse — zero-network heuristics that resolve well-formed queries immediately.
//!
//! Branches, first applicable wins:
//! 1. Comma-delimited: "Company, Position, Round" or "Company, Position"
//! 2. Word-based: first word is the company, a round-like last word is the round,
//!    everything in between is the position

use crate::search::models::{ParsedSearch, DEFAULT_POSITION};
use crate::search::round::{normalize_round, Round};

/// Substrings that mark the last word of a query as a round token.
const ROUND_TOKENS: &[&str] = &[
    "technical",
    "behavioral",
    "manager",
    "hr",
    "phone",
    "coding",
    "design",
    "onsite",
    "final",
];

/// Parses a query without any external call.
/// Returns `None` only for empty or whitespace-only input.
pub fn quick_parse(query: &str) -> Option<ParsedSearch> {
    if query.trim().is_empty() {
        return None;
    }

    if let Some(parsed) = parse_delimited(query) {
        return Some(parsed);
    }

    let words: Vec<&str> = query.split_whitespace().collect();
    parse_words(&words)
}

/// Comma branch. Three or more parts give a full triple; exactly two non-empty parts
/// give company and position with the default round. Anything else is inconclusive.
pub(crate) fn parse_delimited(query: &str) -> Option<ParsedSearch> {
    if let Some(parsed) = parse_delimited_triple(query) {
        return Some(parsed);
    }
    if !query.contains(',') {
        return None;
    }

    let parts: Vec<&str> = query.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [company, position] if !company.is_empty() && !position.is_empty() => {
            Some(ParsedSearch::new(*company, *position, Round::Technical))
        }
        _ => None,
    }
}

/// Comma branch restricted to "Company, Position, Round". Extra parts are ignored.
pub(crate) fn parse_delimited_triple(query: &str) -> Option<ParsedSearch> {
    if !query.contains(',') {
        return None;
    }

    let parts: Vec<&str> = query.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [company, position, round, ..] => Some(ParsedSearch::new(
            *company,
            *position,
            normalize_round(round),
        )),
        _ => None,
    }
}

/// Word branch over whitespace-separated, non-empty tokens.
pub(crate) fn parse_words(words: &[&str]) -> Option<ParsedSearch> {
    match words {
        [] => None,
        [company] => Some(ParsedSearch::new(*company, DEFAULT_POSITION, Round::Technical)),
        [company, rest @ ..] => {
            let last = rest[rest.len() - 1].to_lowercase();

            let (position, round) = if ROUND_TOKENS.iter().any(|t| last.contains(t)) {
                (rest[..rest.len() - 1].join(" "), normalize_round(&last))
            } else {
                (rest.join(" "), Round::Technical)
            };

            let position = if position.is_empty() {
                DEFAULT_POSITION.to_string()
            } else {
                position
            };

            Some(ParsedSearch::new(*company, position, round))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(company: &str, position: &str, round: &str) -> Option<ParsedSearch> {
        Some(ParsedSearch {
            company: company.to_string(),
            position: position.to_string(),
            round: round.to_string(),
            error: None,
        })
    }

    #[test]
    fn test_comma_triple_normalizes_round() {
        assert_eq!(
            quick_parse("Google, Software Engineer, Behavioral Round"),
            triple("Google", "Software Engineer", "Behavioral")
        );
    }

    #[test]
    fn test_comma_triple_ignores_extra_parts() {
        assert_eq!(
            quick_parse("Amazon, PM, Onsite, extra"),
            triple("Amazon", "PM", "Onsite")
        );
    }

    #[test]
    fn test_comma_pair_defaults_round() {
        assert_eq!(quick_parse("Amazon, PM"), triple("Amazon", "PM", "Technical"));
    }

    #[test]
    fn test_comma_pair_does_not_normalize_position() {
        // A pair never carries a round, even when the second part looks like one
        assert_eq!(
            quick_parse("Stripe, Design Engineer"),
            triple("Stripe", "Design Engineer", "Technical")
        );
    }

    #[test]
    fn test_inconclusive_comma_falls_through_to_words() {
        // Trailing comma leaves one empty part, so the word heuristic runs on the raw string
        assert_eq!(
            quick_parse("Uber backend,"),
            triple("Uber", "backend,", "Technical")
        );
    }

    #[test]
    fn test_single_word_defaults() {
        assert_eq!(
            quick_parse("Netflix"),
            triple("Netflix", "Software Engineer", "Technical")
        );
    }

    #[test]
    fn test_word_round_detection() {
        assert_eq!(
            quick_parse("Meta Engineer onsite"),
            triple("Meta", "Engineer", "Onsite")
        );
        assert_eq!(
            quick_parse("Google SWE behavioral"),
            triple("Google", "SWE", "Behavioral")
        );
    }

    #[test]
    fn test_word_round_token_without_position_defaults_position() {
        assert_eq!(
            quick_parse("Apple phone"),
            triple("Apple", "Software Engineer", "Recruiter Screen")
        );
    }

    #[test]
    fn test_words_without_round_keep_full_position() {
        assert_eq!(
            quick_parse("Datadog Site Reliability Engineer"),
            triple("Datadog", "Site Reliability Engineer", "Technical")
        );
    }

    #[test]
    fn test_coding_token_maps_to_technical() {
        assert_eq!(
            quick_parse("Nvidia CUDA Engineer coding"),
            triple("Nvidia", "CUDA Engineer", "Technical")
        );
    }

    #[test]
    fn test_trailing_design_title_is_read_as_round() {
        // Known heuristic limitation: a title ending in "Design" is read as a round
        assert_eq!(
            quick_parse("Figma Product Design"),
            triple("Figma", "Product", "System Design")
        );
    }

    #[test]
    fn test_extra_whitespace_is_ignored() {
        assert_eq!(
            quick_parse("  Tesla   Firmware   Engineer  "),
            triple("Tesla", "Firmware Engineer", "Technical")
        );
    }

    #[test]
    fn test_empty_input_is_none() {
        assert_eq!(quick_parse(""), None);
        assert_eq!(quick_parse("   "), None);
        assert_eq!(quick_parse("\t\n"), None);
    }

    #[test]
    fn test_quick_parse_is_deterministic() {
        let query = "Airbnb, Data Scientist, HM";
        assert_eq!(quick_parse(query), quick_parse(query));
    }

    #[test]
    fn test_quick_parse_never_sets_error() {
        for query in ["Google", "Amazon, PM", "a, b, c", "Meta ML Engineer final"] {
            assert!(quick_parse(query).unwrap().error.is_none(), "{query}");
        }
    }

    #[test]
    fn test_delimited_triple_requires_three_parts() {
        assert!(parse_delimited_triple("Amazon, PM").is_none());
        assert!(parse_delimited_triple("Amazon PM").is_none());
    }
}
