//! Account CRUD handlers: create, list, read, update, delete.

use crate::error::AppError;
use crate::extractors::JsonContentType;
use crate::model::{Account, AccountPayload};
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

/// Path ids that are not integers match no account.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str.parse().map_err(|_| not_found(id_str))
}

fn not_found(id: impl std::fmt::Display) -> AppError {
    AppError::NotFound(format!("Account with id [{}] couldn't be found.", id))
}

pub fn account_location(id: i64) -> String {
    format!("/accounts/{}", id)
}

pub async fn create(
    State(state): State<AppState>,
    _json: JsonContentType,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Request to create an Account");
    let payload = AccountPayload::from_slice(&body)?;
    let account = state.store.create(payload).await?;
    tracing::info!(id = account.id, "Account created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, account_location(account.id))],
        Json(account),
    ))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Account>>, AppError> {
    tracing::info!("Request to list all accounts");
    let accounts = state.store.all().await?;
    tracing::info!("{} accounts being returned", accounts.len());
    Ok(Json(accounts))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Account>, AppError> {
    tracing::info!("Request to retrieve the account with id: {}", id_str);
    let id = parse_id(&id_str)?;
    let account = state.store.find(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(account))
}

/// Full-document replace. Existence is checked before the body is validated.
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Bytes,
) -> Result<Json<Account>, AppError> {
    tracing::info!("Request to update the account with id: {}", id_str);
    let id = parse_id(&id_str)?;
    let mut account = state.store.find(id).await?.ok_or_else(|| not_found(id))?;
    account.apply(AccountPayload::from_slice(&body)?);
    state.store.update(&account).await?;
    Ok(Json(account))
}

/// Always 204; deleting an unknown id is a no-op.
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, AppError> {
    tracing::info!("Request to delete the account with id: {}", id_str);
    if let Ok(id) = id_str.parse::<i64>() {
        state.store.delete(id).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}
