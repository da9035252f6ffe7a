//! Error types for the club authentication backend.

use thiserror::Error;

/// Common error type for clubauth.
#[derive(Error, Debug)]
pub enum ClubAuthError {
    /// Missing or malformed input.
    #[error("validation error: {0}")]
    Validation(String),

    /// An identifying field (username, admin username) is already taken.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Credentials did not match a stored account.
    #[error("authentication error: {0}")]
    Authentication(String),

    /// Unexpected failure with a message that is safe to show to clients.
    #[error("internal error: {0}")]
    Internal(String),

    /// Database error.
    ///
    /// Errors from sqlx are converted into this variant. The message is for
    /// server logs only.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for ClubAuthError {
    fn from(e: sqlx::Error) -> Self {
        ClubAuthError::Database(e.to_string())
    }
}

/// Result type alias for clubauth operations.
pub type Result<T> = std::result::Result<T, ClubAuthError>;
