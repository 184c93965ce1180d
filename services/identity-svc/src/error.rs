use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::directory::DirectoryError;
use crate::token::TokenError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request: {message}")]
    Validation { message: String },
    #[error("username already exists")]
    Conflict,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("malformed request body: {message}")]
    MalformedInput { message: String },
    #[error("internal server error")]
    Internal,
}

/// Flat error shape shared by every endpoint: `success` discriminates it
/// from the success bodies.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation { message } => (StatusCode::BAD_REQUEST, message.clone()),
            ApiError::Conflict => (StatusCode::CONFLICT, self.to_string()),
            // Deliberately generic so responses cannot distinguish an
            // unknown username from a wrong password.
            ApiError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            ApiError::MalformedInput { message } => (StatusCode::BAD_REQUEST, message.clone()),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            ),
        };

        let mut response = Json(ErrorBody {
            success: false,
            error: message,
        })
        .into_response();
        *response.status_mut() = status;
        response
    }
}

impl From<DirectoryError> for ApiError {
    fn from(error: DirectoryError) -> Self {
        match error {
            DirectoryError::EmptyField { .. } => ApiError::Validation {
                message: error.to_string(),
            },
            DirectoryError::UsernameTaken => ApiError::Conflict,
            DirectoryError::InvalidCredentials => ApiError::InvalidCredentials,
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        // Signing only fails on misconfiguration; log the detail here and
        // hand the caller a generic 500.
        tracing::error!(%error, "token signing failed");
        ApiError::Internal
    }
}
