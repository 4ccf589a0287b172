//! Reject requests whose `Content-Type` is not exactly the expected media type.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::CONTENT_TYPE, request::Parts, HeaderMap},
};

pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Exact comparison; `application/json; charset=utf-8` does not match `application/json`.
pub fn check_content_type(headers: &HeaderMap, expected: &'static str) -> Result<(), AppError> {
    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());
    if content_type == Some(expected) {
        return Ok(());
    }
    tracing::error!("Invalid Content-Type: {}", content_type.unwrap_or("<none>"));
    Err(AppError::UnsupportedMediaType { expected })
}

/// Extractor that passes only when `Content-Type: application/json`. Runs before the body is read.
#[derive(Clone, Copy, Debug)]
pub struct JsonContentType;

#[async_trait]
impl<S> FromRequestParts<S> for JsonContentType
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        check_content_type(&parts.headers, JSON_MEDIA_TYPE)?;
        Ok(JsonContentType)
    }
}
