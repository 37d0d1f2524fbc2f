//! HTTP error taxonomy and its mapping to status codes

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::core::errors::TranslationError;

/// Message returned when `text` or `target_lang` is missing
pub const MISSING_PARAMETERS: &str = "Missing required parameters";

/// Kinds of failure a handler can end with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// `text` or `target_lang` missing or empty
    Validation,
    /// Translation provider failed
    Provider,
    /// Anything else
    Internal,
}

impl ErrorKind {
    /// HTTP status for this kind
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Provider => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error returned by API handlers
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing required parameters
    #[error("Missing required parameters")]
    MissingParameters,

    /// Provider failure, message passed through
    #[error(transparent)]
    Provider(TranslationError),

    /// Unexpected failure, including a body that is not a usable JSON object
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::MissingParameters => ErrorKind::Validation,
            ApiError::Provider(_) => ErrorKind::Provider,
            ApiError::Internal(_) => ErrorKind::Internal,
        }
    }
}

impl From<TranslationError> for ApiError {
    fn from(err: TranslationError) -> Self {
        match err {
            TranslationError::InternalError(message) => ApiError::Internal(message),
            other => ApiError::Provider(other),
        }
    }
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.kind().status_code();
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
