//! Client-side file download through a temporary object URL.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::{export::CsvExport, AppError, AppResult, CSV_MIME_TYPE};

/// Hand the CSV to the browser as a download.
pub fn trigger_download(export: &CsvExport) -> AppResult<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::Export("no document available".to_string()))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&export.content));
    let options = BlobPropertyBag::new();
    options.set_type(CSV_MIME_TYPE);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| AppError::Export(format!("Failed to create blob: {:?}", e)))?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| AppError::Export(format!("Failed to create object URL: {:?}", e)))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| AppError::Export(format!("Failed to create link: {:?}", e)))?
        .unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(&export.filename);
    anchor.click();

    // Revocation failure only leaks the blob until page unload
    let _ = Url::revoke_object_url(&url);

    log::info!("Exported {}", export.filename);
    Ok(())
}
