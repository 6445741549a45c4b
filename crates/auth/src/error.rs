//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The id/name pair matched no stored identity.
    #[error("Invalid credentials. Please try again.")]
    InvalidCredentials,

    /// Underlying store error.
    #[error("Store error: {0}")]
    Store(#[from] record_store::StoreError),

    /// Session slot serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;
