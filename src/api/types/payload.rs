//! Body extractor for registration requests
//!
//! Accepts `application/json` and `application/x-www-form-urlencoded`.
//! A body that cannot be read is treated as an empty request, so the
//! capability check still runs first and the caller then sees the usual
//! missing-parameters error.

use std::convert::Infallible;

use axum::{
    extract::{FromRequest, Request},
    http::header,
    Form, Json,
};
use tracing::debug;

use crate::domain::RegistrationRequest;

#[derive(Debug, Clone, Default)]
pub struct RegistrationPayload(pub RegistrationRequest);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Unsupported,
}

fn body_kind(request: &Request) -> BodyKind {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let mime = content_type.split(';').next().unwrap_or_default().trim();

    if mime == "application/json" || mime.ends_with("+json") {
        BodyKind::Json
    } else if mime == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Unsupported
    }
}

impl<S> FromRequest<S> for RegistrationPayload
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let request = match body_kind(&req) {
            BodyKind::Json => match Json::<RegistrationRequest>::from_request(req, state).await {
                Ok(Json(request)) => request,
                Err(rejection) => {
                    debug!(reason = %rejection.body_text(), "Unreadable JSON body");
                    RegistrationRequest::default()
                }
            },
            BodyKind::Form => match Form::<Vec<(String, String)>>::from_request(req, state).await {
                Ok(Form(pairs)) => from_form_pairs(pairs),
                Err(rejection) => {
                    debug!(reason = %rejection.body_text(), "Unreadable form body");
                    RegistrationRequest::default()
                }
            },
            BodyKind::Unsupported => {
                debug!("Unsupported content type for registration body");
                RegistrationRequest::default()
            }
        };

        Ok(RegistrationPayload(request))
    }
}

/// Build a request from form pairs; `roles` may repeat as `roles`, `roles[]` or `roles[N]`
fn from_form_pairs(pairs: Vec<(String, String)>) -> RegistrationRequest {
    let mut request = RegistrationRequest::default();

    for (key, value) in pairs {
        match key.as_str() {
            "name" => request.name = Some(value),
            "pass" => request.pass = Some(value),
            "mail" => request.mail = Some(value),
            k if k == "roles" || (k.starts_with("roles[") && k.ends_with(']')) => {
                request.roles.push(value)
            }
            _ => {}
        }
    }

    request
}
