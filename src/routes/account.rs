//! Account CRUD routes. Verbs not listed for a path answer 405.

use crate::handlers::{create, delete as delete_handler, list, method_not_allowed, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

const COLLECTION_ALLOW: &str = "GET, HEAD, POST";
const ITEM_ALLOW: &str = "GET, HEAD, PUT, DELETE";

pub fn account_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/accounts",
            get(list).post(create).fallback(method_not_allowed(COLLECTION_ALLOW)),
        )
        .route(
            "/accounts/:id",
            get(read)
                .put(update)
                .delete(delete_handler)
                .fallback(method_not_allowed(ITEM_ALLOW)),
        )
        .with_state(state)
}
