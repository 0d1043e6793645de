use axum::body::Bytes;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::product::ports::CatalogServicePort;
use crate::domain::user::models::AuthenticatedIdentity;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

/// Verify a session token taken from `Authorization: Bearer <token>` or,
/// when the header is absent, from a `{"token": "..."}` body.
pub async fn verify<AS: AuthServicePort, CS: CatalogServicePort>(
    State(state): State<AppState<AS, CS>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<ApiSuccess<VerifyResponseData>, ApiError> {
    let token = extract_token(&headers, &body)?;

    state
        .auth_service
        .verify(&token)
        .map_err(|e| {
            tracing::debug!(error = %e, "Token rejected");
            ApiError::from(e)
        })
        .map(|ref identity| ApiSuccess::new(StatusCode::OK, identity.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerifyRequest {
    token: String,
}

fn extract_token(headers: &HeaderMap, body: &[u8]) -> Result<String, ApiError> {
    if let Some(value) = headers.get(header::AUTHORIZATION) {
        let value = value
            .to_str()
            .map_err(|_| ApiError::Unauthorized("Invalid Authorization header".to_string()))?;

        return value
            .strip_prefix("Bearer ")
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                ApiError::Unauthorized(
                    "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
                )
            });
    }

    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::Unauthorized("Missing token".to_string()));
    }

    serde_json::from_slice::<VerifyRequest>(body)
        .map(|request| request.token)
        .map_err(|e| ApiError::BadRequest(format!("Invalid request body: {}", e)))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyResponseData {
    pub email: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl From<&AuthenticatedIdentity> for VerifyResponseData {
    fn from(identity: &AuthenticatedIdentity) -> Self {
        Self {
            email: identity.email.clone(),
            issued_at: identity.issued_at,
            expires_at: identity.expires_at,
        }
    }
}
