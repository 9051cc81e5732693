/*
[INPUT]:  Error sources (HTTP transport, API status, deserialization, configuration)
[OUTPUT]: Structured error types with transport/malformed classification
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the bookstore adapter
#[derive(Error, Debug)]
pub enum BookstoreError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected schema
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BookstoreError {
    /// Network or transport level failure, including error statuses
    pub fn is_transport(&self) -> bool {
        match self {
            BookstoreError::Http(err) => !err.is_decode(),
            BookstoreError::Api { .. } => true,
            _ => false,
        }
    }

    /// The service answered but the body could not be decoded
    pub fn is_malformed_response(&self) -> bool {
        match self {
            BookstoreError::Serialization(_) => true,
            BookstoreError::Http(err) => err.is_decode(),
            _ => false,
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        BookstoreError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Result type alias for bookstore operations
pub type Result<T> = std::result::Result<T, BookstoreError>;
