//! Error types for unsocial-core.

use thiserror::Error;

/// Common error type for unsocial-core operations.
#[derive(Error, Debug)]
pub enum UnsocialError {
    /// Input validation failed.
    ///
    /// Raised synchronously, before any database access. The message names
    /// the first invalid argument and the defect kind, e.g. `invalid user_id`
    /// or `invalid user_id length`.
    #[error("validation error: {0}")]
    Validation(String),

    /// Referenced entity is absent.
    #[error("{0} not found")]
    NotFound(String),

    /// The acting user does not own the target resource.
    #[error("ownership error: {0}")]
    Ownership(String),

    /// A unique field (email, username) is already taken.
    #[error("duplicate {0}")]
    Duplicate(String),

    /// Password verification failed.
    #[error("wrong credentials")]
    Credentials,

    /// Underlying database failure, wrapped with the original message.
    ///
    /// Errors from sqlx are converted automatically.
    #[error("system error: {0}")]
    System(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for UnsocialError {
    fn from(e: sqlx::Error) -> Self {
        UnsocialError::System(e.to_string())
    }
}

impl From<serde_json::Error> for UnsocialError {
    fn from(e: serde_json::Error) -> Self {
        UnsocialError::System(e.to_string())
    }
}

/// Result type alias for unsocial-core operations.
pub type Result<T> = std::result::Result<T, UnsocialError>;
