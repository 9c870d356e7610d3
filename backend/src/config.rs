//! Server configuration.
//!
//! Values come from the environment (a `.env` file is loaded first) and can
//! be overridden by command-line flags.
//!
//! | Variable                 | Meaning                                   |
//! |--------------------------|-------------------------------------------|
//! | `PORT`                   | Listen port (default 8000)                |
//! | `EXTRACTION_SERVICE_URL` | Where uploads are forwarded               |
//! | `DOCINTEL_STATIC_DIR`    | Built widget assets, served at `/static`  |

use std::env;
use std::path::PathBuf;

use crate::error::{ServerError, ServerResult};

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8000;

/// Largest accepted upload (10 MiB), same as the widget's limit.
pub const MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

/// Request body limit; leaves room for multipart framing around the file.
pub const MAX_REQUEST_BODY: usize = MAX_UPLOAD_SIZE + 64 * 1024;

/// MIME types forwarded to the extraction service.
pub const ALLOWED_MIME_TYPES: [&str; 4] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "application/pdf",
];

/// Host configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Listen port
    pub port: u16,
    /// Extraction service endpoint
    pub extraction_url: Option<String>,
    /// Directory with the built widget
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            extraction_url: None,
            static_dir: None,
        }
    }
}

impl ServerConfig {
    /// Load from the process environment (after `.env`).
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            port: non_empty("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
            extraction_url: non_empty("EXTRACTION_SERVICE_URL"),
            static_dir: non_empty("DOCINTEL_STATIC_DIR").map(PathBuf::from),
        }
    }

    /// Apply command-line overrides.
    pub fn with_overrides(
        mut self,
        port: Option<u16>,
        extraction_url: Option<String>,
        static_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        if extraction_url.is_some() {
            self.extraction_url = extraction_url;
        }
        if static_dir.is_some() {
            self.static_dir = static_dir;
        }
        self
    }

    /// Fail early on a static directory that does not exist.
    pub fn validate(&self) -> ServerResult<()> {
        if let Some(dir) = &self.static_dir {
            if !dir.is_dir() {
                return Err(ServerError::Config(format!(
                    "static directory not found: {}",
                    dir.display()
                )));
            }
        }
        Ok(())
    }
}
