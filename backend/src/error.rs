//! Error types for the docintel host.
//!
//! - [`ExtractionError`] - talking to the external extraction service
//! - [`ServerError`] - request handling, mapped to HTTP status codes
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use axum::{http::StatusCode, Json};
use serde_json::Value;
use thiserror::Error;

use crate::api::types::error_response;

// =============================================================================
// Extraction Service Errors
// =============================================================================

/// Errors from the extraction service client.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// No service URL configured.
    #[error("Extraction service not configured (set EXTRACTION_SERVICE_URL)")]
    NotConfigured,

    /// The request could not be sent or the response not read.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The service answered with a non-2xx status.
    #[error("Extraction service returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The service answered 2xx with an unexpected body.
    #[error("Invalid extraction response: {0}")]
    InvalidResponse(String),
}

// =============================================================================
// Server Errors
// =============================================================================

/// Errors while handling an upload.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Malformed request.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// File type not accepted.
    #[error("Unsupported file type: {0}")]
    UnsupportedMediaType(String),

    /// File over the size limit.
    #[error("File too large (limit {limit} bytes)")]
    PayloadTooLarge { limit: usize },

    /// Extraction service failure.
    #[error("{0}")]
    Extraction(#[from] ExtractionError),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local IO failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// HTTP status reported to the client.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ServerError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::Extraction(ExtractionError::NotConfigured) => StatusCode::SERVICE_UNAVAILABLE,
            ServerError::Extraction(_) => StatusCode::BAD_GATEWAY,
            ServerError::Config(_) | ServerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Status plus `{ "success": false, "detail": ... }` body.
    pub fn into_http(self) -> (StatusCode, Json<Value>) {
        (self.status_code(), Json(error_response(&self.to_string())))
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for extraction client operations.
pub type ExtractionResult<T> = Result<T, ExtractionError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
