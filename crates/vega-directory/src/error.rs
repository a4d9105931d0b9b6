//! Error types for directory service operations.

use thiserror::Error;

/// Result type for directory service operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;

/// Errors that can occur while talking to the directory service.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DirectoryError {
    /// Transport failure: connect, DNS, timeout, or a broken body stream.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The service answered with a non-success status.
    #[error("directory service returned status {status}")]
    Service { status: u16 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
