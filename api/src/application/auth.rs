use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub const USER_ID_HEADER: &str = "x-user-id";

#[derive(Debug, Error, Deserialize, Serialize, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing x-user-id header")]
    MissingUserId,
    #[error("Invalid x-user-id header")]
    InvalidUserId,
}

#[derive(Serialize, Deserialize)]
struct ErrorResponse {
    code: String,
    message: String,
    status: i64,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = StatusCode::UNAUTHORIZED;

        let error_response = ErrorResponse {
            code: "E_UNAUTHORIZED".to_string(),
            message: self.to_string(),
            status: status.as_u16() as i64,
        };

        (status, axum::Json(error_response)).into_response()
    }
}

/// Caller identity taken from the `x-user-id` header. Every pantry, recipe
/// and profile route is scoped to this user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredIdentity(pub Uuid);

pub fn user_id_from_parts(parts: &Parts) -> Result<Uuid, AuthError> {
    let value = parts
        .headers
        .get(USER_ID_HEADER)
        .ok_or(AuthError::MissingUserId)?
        .to_str()
        .map_err(|_| AuthError::InvalidUserId)?
        .trim();

    if value.is_empty() {
        return Err(AuthError::MissingUserId);
    }

    Uuid::parse_str(value).map_err(|_| AuthError::InvalidUserId)
}

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<RequiredIdentity>() {
            return Ok(*identity);
        }

        let identity = RequiredIdentity(user_id_from_parts(parts)?);
        parts.extensions.insert(identity);

        Ok(identity)
    }
}
