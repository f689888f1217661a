//! Error types shared across the crate.

use thiserror::Error;

/// Errors surfaced by the API client and action handlers.
#[derive(Error, Debug)]
pub enum XbotError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// OAuth signature generation failed
    #[error("OAuth error: {0}")]
    OAuth(String),

    /// The API returned an error response
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Configuration error (missing or invalid credentials, logging setup)
    #[error("configuration error: {0}")]
    Config(String),

    /// Input rejected before any request was made
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A successful response was missing the expected payload
    #[error("API response carried no {0}")]
    EmptyResponse(&'static str),

    /// Local filesystem failure (media files, log file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for xbot operations.
pub type XbotResult<T> = Result<T, XbotError>;
