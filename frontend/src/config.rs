//! Application configuration.
//!
//! Centralized configuration for the upload widget. The widget is served by
//! the docintel host, so the upload endpoint is relative to the page origin.

/// Upload endpoint on the host server.
pub const UPLOAD_ENDPOINT: &str = "/upload-document/";

/// Application name shown in the header and page title.
pub const APP_NAME: &str = "Document Intelligence System";

/// Maximum file size for upload (in bytes).
///
/// 10 MiB limit.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// MIME types accepted by the file picker and drop zone.
pub const ALLOWED_MIME_TYPES: [&str; 4] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "application/pdf",
];

/// `accept` attribute for the hidden file input.
pub const FILE_INPUT_ACCEPT: &str = ".pdf,.jpg,.jpeg,.png";

/// Number of characters of raw text shown under the results table.
pub const RAW_TEXT_PREVIEW_CHARS: usize = 500;

/// Prefix of the exported CSV file name.
pub const CSV_FILE_PREFIX: &str = "document_analysis_";

/// MIME type of the exported CSV blob.
pub const CSV_MIME_TYPE: &str = "text/csv";
