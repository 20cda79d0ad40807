//! Search extractors — pluggable text-generation backends for the LLM fallback.
//!
//! Contract: one call per fallback, returns the raw fields or `None`. An extractor never
//! errors; failures are logged and collapsed to `None`.
//!
//! `AppState` holds the chosen backend as `Arc<dyn SearchExtractor>` inside the parser.

use async_trait::async_trait;
use tracing::warn;

use crate::llm_client::LlmClient;
use crate::search::models::ExtractedSearch;
use crate::search::prompts::SEARCH_PARSE_SYSTEM;

const EXTRACTION_MAX_TOKENS: u32 = 256;

#[async_trait]
pub trait SearchExtractor: Send + Sync {
    async fn extract(&self, prompt: &str) -> Option<ExtractedSearch>;
}

/// Extractor backed by the Anthropic API.
pub struct LlmSearchExtractor(pub LlmClient);

#[async_trait]
impl SearchExtractor for LlmSearchExtractor {
    async fn extract(&self, prompt: &str) -> Option<ExtractedSearch> {
        match self
            .0
            .complete_json::<ExtractedSearch>(prompt, SEARCH_PARSE_SYSTEM, EXTRACTION_MAX_TOKENS)
            .await
        {
            Ok(extracted) => Some(extracted),
            Err(e) => {
                warn!("Search extraction failed: {e}");
                None
            }
        }
    }
}

/// Used when no API key is configured. Every fallback lands on the last-resort default.
pub struct DisabledExtractor;

#[async_trait]
impl SearchExtractor for DisabledExtractor {
    async fn extract(&self, _prompt: &str) -> Option<ExtractedSearch> {
        None
    }
}
