//! CSV export of the extracted fields.
//!
//! Building the file is pure; the browser download lives in
//! [`crate::services::download`].

use csv::{QuoteStyle, WriterBuilder};

use crate::{AppError, AppResult, ExtractionResult, CSV_FILE_PREFIX};

const CSV_HEADER: &str = "Field,Value\n";
const LIST_SEPARATOR: &str = "; ";

/// A CSV file ready to be handed to the browser.
#[derive(Clone, Debug, PartialEq)]
pub struct CsvExport {
    /// Download name, `document_analysis_<epoch-ms>.csv`
    pub filename: String,
    /// File content
    pub content: String,
}

/// Prepare the download for the held result.
///
/// `Ok(None)` when there is nothing to export.
pub fn prepare_export(result: Option<&ExtractionResult>, now_ms: i64) -> AppResult<Option<CsvExport>> {
    let Some(result) = result else {
        return Ok(None);
    };

    Ok(Some(CsvExport {
        filename: csv_filename(now_ms),
        content: build_csv(result)?,
    }))
}

/// Two-column CSV of every present field, in response order.
///
/// The header line is written as-is; every data cell is quoted.
pub fn build_csv(result: &ExtractionResult) -> AppResult<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(CSV_HEADER.as_bytes().to_vec());

    for (key, value) in &result.extracted_data {
        if let Some(text) = crate::field_text(value, LIST_SEPARATOR) {
            writer
                .write_record([key.as_str(), text.as_str()])
                .map_err(|e| AppError::Export(format!("Failed to write row: {}", e)))?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Export(format!("Failed to flush CSV: {}", e)))?;

    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("Invalid UTF-8 in CSV: {}", e)))
}

/// Download name for an export made at `now_ms` (Unix epoch, milliseconds).
pub fn csv_filename(now_ms: i64) -> String {
    format!("{}{}.csv", CSV_FILE_PREFIX, now_ms)
}
