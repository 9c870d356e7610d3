//! # Docintel - host server for the document upload widget
//!
//! Serves the widget, accepts one document per request and forwards it to
//! the external extraction service. The extraction itself (OCR, field
//! detection) happens entirely in that service.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  multipart  ┌─────────────┐  multipart  ┌──────────────┐
//! │   Widget    │────────────▶│    Host     │────────────▶│  Extraction  │
//! │ (Leptos)    │◀────────────│  (axum)     │◀────────────│   service    │
//! └─────────────┘ {success,   └─────────────┘ {raw_text,  └──────────────┘
//!                  data}                       extracted_data}
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use docintel::{server::start_server, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig::from_env();
//!     start_server(config).await.unwrap();
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Environment and CLI configuration
//! - [`upload`] - Uploaded files and their validation
//! - [`extraction`] - Extraction service client
//! - [`api`] - HTTP API server

// Core modules
pub mod error;
pub mod config;

// Documents
pub mod upload;

// Extraction service
pub mod extraction;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ExtractionError, ServerError};

pub use config::{ServerConfig, ALLOWED_MIME_TYPES, DEFAULT_PORT, MAX_UPLOAD_SIZE};

pub use upload::{guess_mime, is_allowed_mime, UploadedFile};

pub use extraction::{ExtractionClient, ExtractionOutput};

pub use api::types::{error_response, DocumentData, UploadResponse};

// Server
pub mod server {
    pub use crate::api::server::{build_router, start_server, AppState};
}
