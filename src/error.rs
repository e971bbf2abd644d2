//! Error types for CampusPass.

use thiserror::Error;

/// Common error type for CampusPass.
#[derive(Error, Debug)]
pub enum PortalError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Authentication error.
    #[error("authentication error: {0}")]
    Auth(String),

    /// Session storage error.
    #[error("session storage error: {0}")]
    Storage(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for PortalError {
    fn from(e: serde_json::Error) -> Self {
        PortalError::Storage(e.to_string())
    }
}

/// Result type alias for CampusPass operations.
pub type Result<T> = std::result::Result<T, PortalError>;
