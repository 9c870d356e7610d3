//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **File Types** - the selected document and its metadata
//! - **API Types** - upload response structures
//! - **Field Values** - display text of extracted fields, `None` when absent
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// =============================================================================
// File Types
// =============================================================================

/// A file the user can pick or drop onto the widget.
///
/// Implemented by `web_sys::File` in the browser; tests use plain structs.
pub trait DocumentFile {
    /// File name as reported by the browser.
    fn name(&self) -> String;
    /// Size in bytes.
    fn size(&self) -> u64;
    /// MIME type (may be empty when the browser cannot tell).
    fn mime_type(&self) -> String;
}

impl DocumentFile for web_sys::File {
    fn name(&self) -> String {
        web_sys::File::name(self)
    }

    fn size(&self) -> u64 {
        web_sys::Blob::size(self) as u64
    }

    fn mime_type(&self) -> String {
        web_sys::Blob::type_(self)
    }
}

/// Metadata snapshot of the currently selected file.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    /// File name
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// MIME type
    pub mime_type: String,
}

impl SelectedFile {
    /// Capture the metadata of a file handle.
    pub fn of<F: DocumentFile>(file: &F) -> Self {
        Self {
            name: file.name(),
            size: file.size(),
            mime_type: file.mime_type(),
        }
    }

    /// Size in megabytes with two decimals, e.g. `"1.50 MB"`.
    pub fn size_label(&self) -> String {
        format!("{} MB", crate::validation::format_size_mb(self.size))
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Response body of `POST /upload-document/`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UploadEnvelope {
    /// Whether the host managed to process the document
    #[serde(default)]
    pub success: bool,
    /// Extraction output (present on success)
    #[serde(default)]
    pub data: Option<ExtractionResult>,
    /// Failure description sent by the host on errors
    #[serde(default)]
    pub detail: Option<String>,
}

/// Structured output of the extraction service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Full text recognised in the document
    pub raw_text: String,
    /// Field name -> value, in the order the service returned them
    pub extracted_data: Map<String, Value>,
    /// Original file name, echoed by the host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Host-side processing status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_status: Option<String>,
}

impl ExtractionResult {
    /// Raw JSON value of a field, if the key exists.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extracted_data.get(key)
    }

    /// Display text of a field, or `None` when the field is absent.
    pub fn field_text(&self, key: &str, separator: &str) -> Option<String> {
        self.field(key).and_then(|value| field_text(value, separator))
    }
}

// =============================================================================
// Field Values
// =============================================================================

/// Display text of an extracted value, or `None` if it counts as absent.
///
/// A value is absent when it is `null`, a blank string, the string `"null"`
/// (any case), or a list with no present element. Numbers and booleans are
/// always present. List elements are filtered with the same rule and joined
/// with `separator`; nested objects are rendered as compact JSON.
pub fn field_text(value: &Value, separator: &str) -> Option<String> {
    match value {
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(scalar_text).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(separator))
            }
        }
        other => scalar_text(other),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") {
                None
            } else {
                Some(s.clone())
            }
        }
        Value::Bool(_) | Value::Number(_) => Some(value.to_string()),
        // Nested lists or objects
        other => Some(other.to_string()),
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Every variant is shown to the user as a blocking alert; none is fatal.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Wrong file type or file too large.
    InvalidFile(String),
    /// Submission attempted with nothing selected.
    NoFileSelected,
    /// Submission attempted while one is in flight.
    Busy,
    /// Non-2xx HTTP status from the host.
    RequestFailed { status: u16, detail: String },
    /// HTTP success but the body reports a failure or is malformed.
    ProcessingFailed(String),
    /// The request never got a response.
    Network(String),
    /// CSV download could not be started.
    Export(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidFile(msg) => write!(f, "{}", msg),
            AppError::NoFileSelected => write!(f, "Please select a file first"),
            AppError::Busy => write!(f, "A document is already being processed"),
            AppError::RequestFailed { status, detail } if detail.is_empty() => {
                write!(f, "Error processing document: server error ({})", status)
            }
            AppError::RequestFailed { status, detail } => {
                write!(f, "Error processing document: server error ({}): {}", status, detail)
            }
            AppError::ProcessingFailed(msg) => write!(f, "Error processing document: {}", msg),
            AppError::Network(msg) => write!(f, "Error processing document: {}", msg),
            AppError::Export(msg) => write!(f, "Could not export CSV: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn is_absent(value: &Value) -> bool {
        field_text(value, "").is_none()
    }

    #[test]
    fn test_absent_values() {
        assert!(is_absent(&Value::Null));
        assert!(is_absent(&json!("")));
        assert!(is_absent(&json!("   ")));
        assert!(is_absent(&json!("null")));
        assert!(is_absent(&json!("NULL")));
        assert!(is_absent(&json!([])));
        assert!(is_absent(&json!([null, "null", ""])));
    }

    #[test]
    fn test_present_values() {
        assert_eq!(field_text(&json!("Acme"), ", ").as_deref(), Some("Acme"));
        assert_eq!(field_text(&json!(0), ", ").as_deref(), Some("0"));
        assert_eq!(field_text(&json!(false), ", ").as_deref(), Some("false"));
        assert_eq!(field_text(&json!(92.5), ", ").as_deref(), Some("92.5"));
    }

    #[test]
    fn test_list_values_drop_absent_elements() {
        let value = json!(["111", null, "222", "null"]);
        assert_eq!(field_text(&value, "; ").as_deref(), Some("111; 222"));
    }

    #[test]
    fn test_envelope_deserialization() {
        let body = r#"{
            "success": true,
            "data": {
                "file_name": "invoice.pdf",
                "raw_text": "ACME INVOICE",
                "extracted_data": {
                    "document_type": "invoice",
                    "company_name": "Acme",
                    "items": ["Widget", "Gadget"]
                },
                "processing_status": "success"
            }
        }"#;

        let envelope: UploadEnvelope = serde_json::from_str(body).unwrap();
        assert!(envelope.success);

        let data = envelope.data.unwrap();
        assert_eq!(data.file_name.as_deref(), Some("invoice.pdf"));
        // Key order follows the response
        let keys: Vec<&str> = data.extracted_data.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["document_type", "company_name", "items"]);
        assert_eq!(data.field_text("items", ", ").as_deref(), Some("Widget, Gadget"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(AppError::NoFileSelected.to_string(), "Please select a file first");

        let err = AppError::RequestFailed { status: 500, detail: "boom".into() };
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("boom"));
    }
}
