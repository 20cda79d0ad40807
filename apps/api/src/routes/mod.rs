pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::search::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/search/parse", post(handlers::handle_parse))
        .route(
            "/api/v1/search/suggestions",
            post(handlers::handle_suggestions),
        )
        .route(
            "/api/v1/search/history",
            post(handlers::handle_record_search),
        )
        .route("/api/v1/search/reference", get(handlers::handle_reference))
        .with_state(state)
}
