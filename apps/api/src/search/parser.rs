//! Search parser — orchestrates quick parse, LLM fallback and the last-resort default.
//!
//! The LLM call is raced against a fixed timeout. Whichever side loses is dropped, which
//! also drops the in-flight HTTP request. Nothing in here returns an error: the worst
//! case is `ParsedSearch::last_resort` with its soft warning.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::search::extractor::SearchExtractor;
use crate::search::models::{ExtractedSearch, ParsedSearch};
use crate::search::prompts::build_search_parse_prompt;
use crate::search::quick_parse::{parse_delimited_triple, parse_words, quick_parse};
use crate::search::round::normalize_round;

/// Upper bound on how long a caller waits for the LLM.
pub const LLM_PARSE_TIMEOUT: Duration = Duration::from_secs(15);

/// Which strategy chain `SearchParser::parse` runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Heuristics first; the LLM only sees input they cannot handle.
    #[default]
    Quick,
    /// Only an explicit "Company, Position, Round" skips the LLM; word heuristics
    /// are used after the LLM fails.
    Assisted,
}

#[derive(Clone)]
pub struct SearchParser {
    extractor: Arc<dyn SearchExtractor>,
    timeout: Duration,
}

impl SearchParser {
    pub fn new(extractor: Arc<dyn SearchExtractor>) -> Self {
        Self {
            extractor,
            timeout: LLM_PARSE_TIMEOUT,
        }
    }

    #[cfg(test)]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Parses a query. `None` only for empty or whitespace-only input.
    pub async fn parse(&self, query: &str, mode: ParseMode) -> Option<ParsedSearch> {
        if query.trim().is_empty() {
            return None;
        }

        let parsed = match mode {
            ParseMode::Quick => match quick_parse(query) {
                Some(parsed) => parsed,
                None => self.parse_with_llm(query).await,
            },
            ParseMode::Assisted => self.parse_assisted(query).await,
        };

        Some(parsed)
    }

    /// LLM extraction with the last-resort default behind it. Never fails.
    pub async fn parse_with_llm(&self, query: &str) -> ParsedSearch {
        self.try_llm(query)
            .await
            .unwrap_or_else(|| ParsedSearch::last_resort(query))
    }

    async fn parse_assisted(&self, query: &str) -> ParsedSearch {
        if let Some(parsed) = parse_delimited_triple(query) {
            return parsed;
        }

        if let Some(parsed) = self.try_llm(query).await {
            return parsed;
        }

        let words: Vec<&str> = query.split_whitespace().collect();
        if words.len() >= 2 {
            if let Some(parsed) = parse_words(&words) {
                return parsed;
            }
        }

        ParsedSearch::last_resort(query)
    }

    async fn try_llm(&self, query: &str) -> Option<ParsedSearch> {
        let prompt = build_search_parse_prompt(query);

        let extracted = match tokio::time::timeout(self.timeout, self.extractor.extract(&prompt))
            .await
        {
            Ok(extracted) => extracted,
            Err(_) => {
                warn!(
                    "LLM search parse timed out after {}s",
                    self.timeout.as_secs_f32()
                );
                return None;
            }
        };

        let Some(extracted) = extracted else {
            warn!("LLM search parse returned no result");
            return None;
        };

        let parsed = accept_extraction(extracted);
        if parsed.is_none() {
            warn!("LLM search parse missing company or position");
        } else {
            debug!("LLM search parse succeeded");
        }
        parsed
    }
}

/// Requires a non-empty company and position; normalizes whatever round came back.
fn accept_extraction(extracted: ExtractedSearch) -> Option<ParsedSearch> {
    let company = extracted.company.filter(|c| !c.trim().is_empty())?;
    let position = extracted.position.filter(|p| !p.trim().is_empty())?;
    let round = normalize_round(extracted.round.as_deref().unwrap_or_default());
    Some(ParsedSearch::new(company, position, round))
}
