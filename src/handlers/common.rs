//! Health, readiness, service info, and JSON fallbacks for unmatched routes.

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    Json,
};
use serde::Serialize;
use std::future::Ready;

pub const SERVICE_NAME: &str = "Account REST API Service";

#[derive(Serialize)]
pub struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
pub struct ReadyBody {
    status: &'static str,
    database: &'static str,
}

#[derive(Serialize)]
pub struct IndexBody {
    name: &'static str,
    version: &'static str,
    paths: &'static str,
}

pub async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "OK" })
}

pub async fn index() -> Json<IndexBody> {
    Json(IndexBody {
        name: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        paths: "/accounts",
    })
}

pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyBody>) {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadyBody {
                status: "OK",
                database: "OK",
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyBody {
                    status: "degraded",
                    database: "unavailable",
                }),
            )
        }
    }
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("{} was not found on this server", uri.path()))
}

/// Fallback for verbs a route does not define; `allow` lists the ones it does.
pub fn method_not_allowed(
    allow: &'static str,
) -> impl Fn(Method, Uri) -> Ready<AppError> + Clone + Send + Sync + 'static {
    move |method: Method, uri: Uri| {
        std::future::ready(AppError::MethodNotAllowed {
            method: method.to_string(),
            path: uri.path().to_string(),
            allow,
        })
    }
}
