//! Registration resource handlers

use axum::{
    extract::{Path, State},
    routing::{post, put},
    Json, Router,
};
use tracing::debug;

use super::middleware::CurrentSession;
use super::state::AppState;
use super::types::{AccountResponse, ApiError, RegistrationPayload};

/// Routes for the registration resource mounted at `/{resource_path}`
pub fn create_registration_router(resource_path: &str) -> Router<AppState> {
    let collection = format!("/{}", resource_path);
    let member = format!("/{}/{{account_id}}", resource_path);

    Router::new()
        .route(&collection, post(add_account).put(update_account_without_id))
        .route(&member, put(update_account))
}

/// POST /user-registration
pub async fn add_account(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    RegistrationPayload(request): RegistrationPayload,
) -> Result<Json<Vec<AccountResponse>>, ApiError> {
    debug!(
        name = ?request.name,
        session = %session.identifier(),
        "Registering account"
    );

    let account = state
        .registration_service
        .add_account(&session, request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(vec![AccountResponse::from(&account)]))
}

/// PUT /user-registration/:account_id
pub async fn update_account(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(account_id): Path<String>,
    RegistrationPayload(request): RegistrationPayload,
) -> Result<Json<Vec<AccountResponse>>, ApiError> {
    debug!(
        account_id = %account_id,
        session = %session.identifier(),
        "Updating account"
    );

    let account = state
        .registration_service
        .update_account(&session, Some(&account_id), request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(vec![AccountResponse::from(&account)]))
}

/// PUT /user-registration
pub async fn update_account_without_id(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    RegistrationPayload(request): RegistrationPayload,
) -> Result<Json<Vec<AccountResponse>>, ApiError> {
    let account = state
        .registration_service
        .update_account(&session, None, request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(vec![AccountResponse::from(&account)]))
}
