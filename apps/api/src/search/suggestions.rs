//! Suggestion engine — synchronous autocomplete over history and the embedded lists.
//!
//! Sources, in priority order:
//! 1. history entries containing the query (up to 3)
//! 2. companies starting with the query (up to 3)
//! 3. roles containing the query (up to 2)
//! 4. three "{Company} ..." combos when the query names a company exactly
//!
//! The merged list is deduplicated by exact text (first occurrence wins) and capped.

use std::collections::HashSet;

use crate::search::models::{SearchSuggestion, SuggestionType};
use crate::search::reference::{COMBO_SUFFIXES, POPULAR_COMPANIES, POPULAR_ROLES};

pub const MAX_SUGGESTIONS: usize = 8;
/// Recent searches shown for an empty query.
pub const MAX_RECENT: usize = 5;
/// Entries kept by `record_search`.
pub const HISTORY_CAPACITY: usize = 10;

const MAX_HISTORY_MATCHES: usize = 3;
const MAX_COMPANY_MATCHES: usize = 3;
const MAX_ROLE_MATCHES: usize = 2;

pub fn get_suggestions(query: &str, history: &[String]) -> Vec<SearchSuggestion> {
    if query.trim().is_empty() {
        return history
            .iter()
            .take(MAX_RECENT)
            .map(|h| SearchSuggestion::new(h.as_str(), SuggestionType::History))
            .collect();
    }

    let needle = query.to_lowercase();
    let mut candidates = Vec::new();

    candidates.extend(
        history
            .iter()
            .filter(|h| h.to_lowercase().contains(&needle))
            .take(MAX_HISTORY_MATCHES)
            .map(|h| SearchSuggestion::new(h.as_str(), SuggestionType::History)),
    );

    candidates.extend(
        POPULAR_COMPANIES
            .iter()
            .filter(|c| c.to_lowercase().starts_with(&needle))
            .take(MAX_COMPANY_MATCHES)
            .map(|c| SearchSuggestion::new(*c, SuggestionType::Company)),
    );

    candidates.extend(
        POPULAR_ROLES
            .iter()
            .filter(|r| r.to_lowercase().contains(&needle))
            .take(MAX_ROLE_MATCHES)
            .map(|r| SearchSuggestion::new(*r, SuggestionType::Role)),
    );

    if let Some(company) = POPULAR_COMPANIES
        .iter()
        .find(|c| c.to_lowercase() == needle)
    {
        candidates.extend(COMBO_SUFFIXES.iter().map(|suffix| {
            SearchSuggestion::new(format!("{company} {suffix}"), SuggestionType::Full)
        }));
    }

    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|s| seen.insert(s.text.clone()))
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Returns the history with `entry` moved to the front, capped at `HISTORY_CAPACITY`.
pub fn record_search(history: &[String], entry: &str) -> Vec<String> {
    std::iter::once(entry.to_string())
        .chain(history.iter().filter(|h| h.as_str() != entry).cloned())
        .take(HISTORY_CAPACITY)
        .collect()
}
