//! User-facing failure reporting.

use crate::AppError;

/// Log the error and show it in a blocking alert.
pub fn report_error(err: &AppError) {
    log::error!("{}", err);
    alert(&err.to_string());
}

/// Blocking `window.alert`.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            log::warn!("Could not show alert: {}", message);
        }
    }
}
