//! HTTP service for sending a document to the docintel host.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::{AppError, AppResult, ExtractionResult, UploadEnvelope};

/// Longest slice of a non-JSON error body quoted back to the user.
const MAX_DETAIL_CHARS: usize = 200;

/// Upload a document as multipart form data (part `file`) and return the extraction.
pub async fn submit_document(file: &File, endpoint: &str) -> AppResult<ExtractionResult> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Network(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| AppError::Network(format!("Failed to append file: {:?}", e)))?;

    log::debug!("POST {} ({} bytes)", endpoint, file.size());

    let request = Request::post(endpoint)
        .body(form_data)
        .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AppError::Network(format!("Failed to read response: {}", e)))?;

    interpret_response(status, &body)
}

/// Turn a status code and body into an extraction or the matching error.
///
/// Non-2xx is `RequestFailed`; a 2xx body that does not parse, reports
/// `success: false`, or carries no `data` is `ProcessingFailed`.
pub fn interpret_response(status: u16, body: &str) -> AppResult<ExtractionResult> {
    if !(200..300).contains(&status) {
        return Err(AppError::RequestFailed {
            status,
            detail: error_detail(body),
        });
    }

    let envelope: UploadEnvelope = serde_json::from_str(body)
        .map_err(|e| AppError::ProcessingFailed(format!("Invalid response: {}", e)))?;

    if !envelope.success {
        return Err(AppError::ProcessingFailed(
            envelope.detail.unwrap_or_else(|| "Processing failed".to_string()),
        ));
    }

    envelope
        .data
        .ok_or_else(|| AppError::ProcessingFailed("Response contains no data".to_string()))
}

/// `detail` of a JSON error body, else the start of the raw body.
fn error_detail(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(detail) = value.get("detail").and_then(|d| d.as_str()) {
            return detail.to_string();
        }
    }
    body.trim().chars().take(MAX_DETAIL_CHARS).collect()
}
