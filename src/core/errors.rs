//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Provider answered with a non-success status
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status returned by the provider
        status: u16,
        /// Response body, as sent by the provider
        message: String,
    },

    /// Provider throttled the request (HTTP 429)
    #[error("Too many requests. The translation provider is rate limiting this server")]
    TooManyRequests,

    /// Network error
    #[error("Network error: {message}")]
    NetworkError {
        /// Transport-level description
        message: String,
    },

    /// Invalid response from API
    #[error("Invalid response: {message}")]
    InvalidResponseError {
        /// What was wrong with the body
        message: String,
    },

    /// Language is neither a known code nor a known name
    #[error("{language} is not supported. Request /api/languages for the supported list")]
    UnsupportedLanguage {
        /// The language as the caller passed it
        language: String,
    },

    /// Text is blank or too long to be sent to the provider
    #[error("Invalid payload: {message}")]
    InvalidPayload {
        /// Why the text was refused
        message: String,
    },

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Wrapper for anyhow errors
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<anyhow::Error> for TranslationError {
    fn from(err: anyhow::Error) -> Self {
        TranslationError::InternalError(err.to_string())
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
