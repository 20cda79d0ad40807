//! Axum route handlers for the Search API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::search::models::{ParsedSearch, SearchSuggestion};
use crate::search::parser::ParseMode;
use crate::search::reference::{POPULAR_COMPANIES, POPULAR_ROLES, POPULAR_ROUNDS};
use crate::search::suggestions::{get_suggestions, record_search};
use crate::state::AppState;

const MAX_QUERY_LEN: usize = 500;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub query: String,
    #[serde(default)]
    pub mode: ParseMode,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub parsed: Option<ParsedSearch>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionsRequest {
    pub query: String,
    #[serde(default)]
    pub history: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<SearchSuggestion>,
}

#[derive(Debug, Deserialize)]
pub struct RecordSearchRequest {
    #[serde(default)]
    pub history: Vec<String>,
    pub entry: String,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ReferenceResponse {
    pub companies: &'static [&'static str],
    pub roles: &'static [&'static str],
    pub rounds: &'static [&'static str],
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/search/parse
///
/// Empty queries are not an error: `parsed` is null and the client decides what to show.
pub async fn handle_parse(
    State(state): State<AppState>,
    Json(request): Json<ParseRequest>,
) -> Result<Json<ParseResponse>, AppError> {
    validate_query_len(&request.query)?;

    let parsed = state.parser.parse(&request.query, request.mode).await;

    Ok(Json(ParseResponse { parsed }))
}

/// POST /api/v1/search/suggestions
pub async fn handle_suggestions(
    Json(request): Json<SuggestionsRequest>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    validate_query_len(&request.query)?;

    Ok(Json(SuggestionsResponse {
        suggestions: get_suggestions(&request.query, &request.history),
    }))
}

/// POST /api/v1/search/history
///
/// History lives on the client; this only applies the move-to-front rule.
pub async fn handle_record_search(
    Json(request): Json<RecordSearchRequest>,
) -> Result<Json<HistoryResponse>, AppError> {
    if request.entry.trim().is_empty() {
        return Err(AppError::Validation("entry cannot be empty".to_string()));
    }
    validate_query_len(&request.entry)?;

    Ok(Json(HistoryResponse {
        history: record_search(&request.history, &request.entry),
    }))
}

/// GET /api/v1/search/reference
pub async fn handle_reference() -> Json<ReferenceResponse> {
    Json(ReferenceResponse {
        companies: POPULAR_COMPANIES,
        roles: POPULAR_ROLES,
        rounds: POPULAR_ROUNDS,
    })
}

fn validate_query_len(query: &str) -> Result<(), AppError> {
    if query.chars().count() > MAX_QUERY_LEN {
        return Err(AppError::Validation(format!(
            "query exceeds {MAX_QUERY_LEN} characters"
        )));
    }
    Ok(())
}
