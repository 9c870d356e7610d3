//! Uploaded documents and the checks applied before forwarding them.

use std::path::Path;

use crate::config::{ALLOWED_MIME_TYPES, MAX_UPLOAD_SIZE};
use crate::error::{ServerError, ServerResult};

/// Fallback name when the client sends none.
const DEFAULT_FILE_NAME: &str = "upload";

/// A document received from the widget (or read from disk by the CLI).
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    /// Build from multipart metadata. A missing or generic content type is
    /// guessed from the file extension.
    pub fn new(file_name: Option<&str>, content_type: Option<&str>, bytes: Vec<u8>) -> Self {
        let file_name = file_name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_FILE_NAME)
            .to_string();

        let content_type = content_type
            .map(|c| c.trim().to_ascii_lowercase())
            .filter(|c| !c.is_empty() && c != "application/octet-stream")
            .or_else(|| guess_mime(&file_name).map(str::to_string))
            .unwrap_or_else(|| "application/octet-stream".to_string());

        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Read a local file.
    pub async fn from_path(path: &Path) -> ServerResult<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path.file_name().and_then(|n| n.to_str());
        Ok(Self::new(file_name, None, bytes))
    }

    /// Same rules as the widget: allowed type, at most 10 MiB.
    pub fn validate(&self) -> ServerResult<()> {
        if !is_allowed_mime(&self.content_type) {
            return Err(ServerError::UnsupportedMediaType(self.content_type.clone()));
        }
        if self.bytes.len() > MAX_UPLOAD_SIZE {
            return Err(ServerError::PayloadTooLarge {
                limit: MAX_UPLOAD_SIZE,
            });
        }
        Ok(())
    }
}

/// Whether documents of this type are forwarded.
pub fn is_allowed_mime(content_type: &str) -> bool {
    ALLOWED_MIME_TYPES
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(content_type.trim()))
}

/// MIME type from the file extension, for the accepted formats only.
pub fn guess_mime(file_name: &str) -> Option<&'static str> {
    let extension = Path::new(file_name).extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "pdf" => Some("application/pdf"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        _ => None,
    }
}
