//! Client-side file checks, run before a file becomes the current selection.

use crate::{AppError, AppResult, SelectedFile, ALLOWED_MIME_TYPES, MAX_FILE_SIZE};

/// Whether the browser-reported MIME type is one the extraction service accepts.
pub fn is_allowed_mime(mime_type: &str) -> bool {
    let mime_type = mime_type.trim();
    ALLOWED_MIME_TYPES
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(mime_type))
}

/// Check type then size. The error message is shown to the user as-is.
pub fn validate_file(file: &SelectedFile) -> AppResult<()> {
    if !is_allowed_mime(&file.mime_type) {
        return Err(AppError::InvalidFile(
            "Please select a valid file (PDF, JPG, PNG)".to_string(),
        ));
    }

    if file.size > MAX_FILE_SIZE {
        return Err(AppError::InvalidFile(
            "File size should be less than 10MB".to_string(),
        ));
    }

    Ok(())
}

/// Bytes to megabytes with two decimals.
pub fn format_size_mb(size: u64) -> String {
    format!("{:.2}", size as f64 / 1024.0 / 1024.0)
}
