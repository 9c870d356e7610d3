//! REST API types for the upload widget.
//!
//! The widget expects `{ "success": true, "data": { "raw_text", "extracted_data", ... } }`
//! on success and treats anything else as a failure.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::extraction::ExtractionOutput;

/// Status string reported for processed documents.
pub const STATUS_SUCCESS: &str = "success";

/// Response sent to the widget after a successful extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Always `true` here; failures use [`error_response`]
    pub success: bool,

    /// Extraction output plus upload metadata
    pub data: DocumentData,
}

/// Extraction output as seen by the widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentData {
    /// Name of the uploaded file
    pub file_name: String,

    /// Text recognised in the document
    pub raw_text: String,

    /// Field name -> value, in the order the service returned them
    pub extracted_data: Map<String, Value>,

    /// Processing status
    pub processing_status: String,
}

impl UploadResponse {
    /// Wrap the extraction service output for `file_name`.
    pub fn new(file_name: impl Into<String>, output: ExtractionOutput) -> Self {
        Self {
            success: true,
            data: DocumentData {
                file_name: file_name.into(),
                raw_text: output.raw_text,
                extracted_data: output.extracted_data,
                processing_status: STATUS_SUCCESS.to_string(),
            },
        }
    }
}

/// Create an error response
pub fn error_response(detail: &str) -> Value {
    json!({
        "success": false,
        "detail": detail,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_response_shape() {
        let output = ExtractionOutput {
            raw_text: "ABC".to_string(),
            extracted_data: json!({"company_name": "Acme", "addresses": []})
                .as_object()
                .cloned()
                .unwrap(),
        };

        let value = serde_json::to_value(UploadResponse::new("scan.png", output)).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["file_name"], "scan.png");
        assert_eq!(value["data"]["raw_text"], "ABC");
        assert_eq!(value["data"]["extracted_data"]["company_name"], "Acme");
        assert_eq!(value["data"]["processing_status"], "success");
    }

    #[test]
    fn test_error_response_shape() {
        let value = error_response("No file provided");
        assert_eq!(value, json!({"success": false, "detail": "No file provided"}));
    }
}
