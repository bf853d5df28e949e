/*
[INPUT]:  Error sources (HTTP, API envelope, serialization, session state)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the Wykop client
#[derive(Error, Debug)]
pub enum WykopError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error envelope
    #[error("API error (code {code}): {message}")]
    Api { code: i32, message: String },

    /// Application or user credentials were rejected
    #[error("Invalid credentials (code {code}): {message}")]
    InvalidCredentials { code: i32, message: String },

    /// Signature verification failed
    #[error("Invalid signature")]
    InvalidSignature,

    /// Operation requires session state that is not present
    #[error("Invalid client state: {0}")]
    State(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Response does not match the expected envelope shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Server returned an empty body
    #[error("Empty response")]
    EmptyResponse,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl WykopError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            WykopError::Http(_) | WykopError::EmptyResponse | WykopError::InvalidResponse(_)
        )
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            WykopError::InvalidCredentials { .. } | WykopError::InvalidSignature
        )
    }
}

/// Result type alias for Wykop operations
pub type Result<T> = std::result::Result<T, WykopError>;
