//! Results panel: summary, field table, raw text preview and CSV download.

use leptos::*;
use web_sys::File;

use crate::render::{render_result, RenderedResult};
use crate::services::{report_error, trigger_download};
use crate::UploadWidget;

#[component]
pub fn ResultsSection(widget: RwSignal<UploadWidget<File>>) -> impl IntoView {
    let on_download = move |_| {
        let now_ms = chrono::Utc::now().timestamp_millis();
        let downloaded = widget
            .with_untracked(|w| w.export(now_ms))
            .and_then(|export| match export {
                Some(export) => trigger_download(&export),
                None => {
                    log::debug!("Nothing to export yet");
                    Ok(())
                }
            });
        if let Err(e) = downloaded {
            report_error(&e);
        }
    };

    move || {
        let rendered = widget.with(|w| w.visible_result().map(render_result))?;
        let RenderedResult { summary, rows, raw_text_preview } = rendered;

        Some(view! {
            <div class="results" id="results">
                <div class="results-header">
                    <h2>"📊 Extracted Information"</h2>
                    <button class="download-btn" id="download-btn" on:click=on_download>
                        "📥 Download CSV"
                    </button>
                </div>

                <div class="result-section">
                    <h3>"📄 Document Type: " {summary.document_type}</h3>
                    <div class="confidence">"Confidence: " {summary.confidence}</div>
                </div>

                <table class="results-table">
                    <thead>
                        <tr>
                            <th>"Field"</th>
                            <th>"Value"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|row| view! {
                                <tr>
                                    <td><strong>{row.label}</strong></td>
                                    <td>{row.value}</td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>

                <div class="raw-text-section">
                    <h4>"📝 Raw Extracted Text:"</h4>
                    <div class="raw-text">{raw_text_preview}</div>
                </div>
            </div>
        })
    }
}
