//! View model for an extraction result.
//!
//! The results component renders [`RenderedResult`] as-is, so everything
//! about which rows appear and how values are formatted lives here.

use serde_json::Value;

use crate::{ExtractionResult, RAW_TEXT_PREVIEW_CHARS};

/// Fields shown in the results table, in display order.
pub const KNOWN_FIELDS: [(&str, &str); 6] = [
    ("company_name", "Company Name"),
    ("date", "Date"),
    ("total_amount", "Total Amount"),
    ("addresses", "Addresses"),
    ("phone_numbers", "Phone Numbers"),
    ("emails", "Email Addresses"),
];

const ITEMS_KEY: &str = "items";
const ITEMS_LABEL: &str = "Items/Services";
const TABLE_SEPARATOR: &str = ", ";

/// Header line above the table.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultSummary {
    /// Document type, `"Unknown"` when not reported
    pub document_type: String,
    /// Confidence as displayed, e.g. `"85%"`, or `"N/A"`
    pub confidence: String,
}

/// One row of the two-column results table.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    /// Field name in `extracted_data`
    pub key: String,
    /// Human-readable label
    pub label: String,
    /// Display value
    pub value: String,
}

/// Everything the results panel shows.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedResult {
    pub summary: ResultSummary,
    pub rows: Vec<TableRow>,
    pub raw_text_preview: String,
}

/// Build the results view for a successful extraction.
pub fn render_result(result: &ExtractionResult) -> RenderedResult {
    let summary = ResultSummary {
        document_type: result
            .field_text("document_type", TABLE_SEPARATOR)
            .unwrap_or_else(|| "Unknown".to_string()),
        confidence: result
            .field_text("confidence_score", TABLE_SEPARATOR)
            .map(|score| Value::from(score.trim().trim_end_matches('%').trim_end()))
            .and_then(|score| crate::field_text(&score, TABLE_SEPARATOR))
            .map(|score| format!("{}%", score))
            .unwrap_or_else(|| "N/A".to_string()),
    };

    let mut rows: Vec<TableRow> = KNOWN_FIELDS
        .iter()
        .filter_map(|(key, label)| {
            let value = result.field_text(key, TABLE_SEPARATOR)?;
            Some(TableRow {
                key: key.to_string(),
                label: label.to_string(),
                value,
            })
        })
        .collect();

    // Items only count when they come as a list
    if result.field(ITEMS_KEY).is_some_and(|v| v.is_array()) {
        if let Some(value) = result.field_text(ITEMS_KEY, TABLE_SEPARATOR) {
            rows.push(TableRow {
                key: ITEMS_KEY.to_string(),
                label: ITEMS_LABEL.to_string(),
                value,
            });
        }
    }

    RenderedResult {
        summary,
        rows,
        raw_text_preview: raw_text_preview(&result.raw_text, RAW_TEXT_PREVIEW_CHARS),
    }
}

/// First `limit` characters of `text`, with `...` appended when truncated.
pub fn raw_text_preview(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
