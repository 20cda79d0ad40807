use crate::config::Config;
use crate::search::parser::SearchParser;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Owns the pluggable extractor used for the LLM fallback.
    pub parser: SearchParser,
}
