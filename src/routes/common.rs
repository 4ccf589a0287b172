//! Common routes: index, health, readiness.

use crate::handlers::{health, index, method_not_allowed, ready};
use crate::state::AppState;
use axum::{routing::get, Router};

const GET_ONLY: &str = "GET, HEAD";

/// GET /, GET /health, GET /ready.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).fallback(method_not_allowed(GET_ONLY)))
        .route("/health", get(health).fallback(method_not_allowed(GET_ONLY)))
        .route("/ready", get(ready).fallback(method_not_allowed(GET_ONLY)))
        .with_state(state)
}
