//! Server error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Server error type covering the four user-visible error kinds.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Invalid input (empty content/response, non-numeric balance).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Unknown identity or record id.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Operation requires a signed-in identity.
    #[error("Authentication required")]
    AuthenticationRequired,

    /// Signed-in identity lacks the admin role for this operation.
    #[error("Unauthorized access")]
    UnauthorizedAccess,

    /// Store error.
    #[error("Store error: {0}")]
    Store(#[from] record_store::StoreError),

    /// Authentication error.
    #[error("Auth error: {0}")]
    Auth(#[from] auth::AuthError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Generic message for internal failures. Raw internal errors are never
/// shown to clients.
const GENERIC_FAILURE_MESSAGE: &str = "The request could not be processed.";

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            ServerError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                protocol::error_codes::VALIDATION_FAILED,
                msg.clone(),
            ),
            ServerError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                protocol::error_codes::NOT_FOUND,
                msg.clone(),
            ),
            ServerError::AuthenticationRequired => (
                StatusCode::UNAUTHORIZED,
                protocol::error_codes::UNAUTHORIZED_ACCESS,
                "Authentication required".to_string(),
            ),
            ServerError::UnauthorizedAccess => (
                StatusCode::FORBIDDEN,
                protocol::error_codes::UNAUTHORIZED_ACCESS,
                "You are not allowed to perform this action.".to_string(),
            ),
            ServerError::Store(record_store::StoreError::NotFound { .. }) => (
                StatusCode::NOT_FOUND,
                protocol::error_codes::NOT_FOUND,
                self.to_string(),
            ),
            ServerError::Store(record_store::StoreError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                protocol::error_codes::VALIDATION_FAILED,
                msg.clone(),
            ),
            ServerError::Auth(e @ auth::AuthError::InvalidCredentials) => (
                StatusCode::UNAUTHORIZED,
                protocol::error_codes::INVALID_CREDENTIALS,
                e.to_string(),
            ),
            // Anything else is reported as a generic validation failure,
            // never propagated raw.
            ServerError::Store(_) | ServerError::Auth(_) | ServerError::Internal(_) => (
                StatusCode::BAD_REQUEST,
                protocol::error_codes::VALIDATION_FAILED,
                GENERIC_FAILURE_MESSAGE.to_string(),
            ),
        };

        let body = json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        });

        (status, Json(body)).into_response()
    }
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
