//! Session extractor for bearer tokens

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::Session;

/// The caller's session; anonymous when no `Authorization` header is sent
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)?;

        debug!(authenticated = token.is_some(), "Resolving session");

        let session = state
            .session_service
            .current_account(token.as_deref())
            .await
            .map_err(ApiError::from)?;

        Ok(CurrentSession(session))
    }
}

/// Extract the bearer token from the Authorization header, if any
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<Option<String>, ApiError> {
    let Some(auth_header) = headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::bad_request("Invalid Authorization header encoding"))?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(Some(token.trim().to_string())),
        _ => Err(ApiError::unauthorized(
            "Provide a JWT token via 'Authorization: Bearer <token>' header",
        )),
    }
}
