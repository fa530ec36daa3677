//! Error types for octoscope-core

use thiserror::Error;

/// Main error type for the octoscope-core library
#[derive(Error, Debug)]
pub enum Error {
    /// Blank account name, rejected before any request is made
    #[error("account name must not be empty")]
    EmptyAccount,

    /// The account does not exist upstream
    #[error("account not found: {0}")]
    AccountNotFound(String),

    /// The GitHub API returned a non-success status
    #[error("GitHub API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure (connection, timeout, TLS)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for octoscope-core
pub type Result<T> = std::result::Result<T, Error>;
