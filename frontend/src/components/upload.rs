//! Document upload component with drag & drop support.
//!
//! Handles file selection, validation feedback and submission to the host.
//! All state changes go through the [`UploadWidget`] held in `widget`.

use leptos::html::Input;
use leptos::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::services::{report_error, submit_document};
use crate::{AppError, LoadingIndicator, UploadWidget, FILE_INPUT_ACCEPT, UPLOAD_ENDPOINT};

#[component]
pub fn UploadSection(widget: RwSignal<UploadWidget<File>>) -> impl IntoView {
    let (is_dragover, set_is_dragover) = create_signal(false);
    let file_input = create_node_ref::<Input>();

    let select = move |file: File| {
        match widget.try_update(|w| w.select_file(file).cloned()) {
            Some(Ok(info)) => log::info!("📎 Selected {} ({})", info.name, info.size_label()),
            Some(Err(AppError::Busy)) => log::warn!("Ignoring selection while processing"),
            Some(Err(e)) => report_error(&e),
            None => {}
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            select(file);
        }
        // Picking the same file twice must fire `change` again
        input.set_value("");
    };

    let on_zone_click = move |_| {
        if widget.with_untracked(|w| w.is_submitting()) {
            return;
        }
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);

        let dropped = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = dropped {
            select(file);
        }
    };

    let on_process = move |_| {
        let ticket = match widget.try_update(|w| w.begin_submit()) {
            Some(Ok(ticket)) => ticket,
            Some(Err(e)) => {
                report_error(&e);
                return;
            }
            None => return,
        };

        log::info!("📤 Uploading {}...", ticket.file().name());

        spawn_local(async move {
            let outcome = submit_document(ticket.file(), UPLOAD_ENDPOINT).await;

            match widget.try_update(|w| w.finish_submit(ticket, outcome)) {
                Some(Ok(())) => log::info!("✅ Extraction complete"),
                Some(Err(e)) => report_error(&e),
                None => log::warn!("Upload widget disposed before the response arrived"),
            }
        });
    };

    let is_submitting = Signal::derive(move || widget.with(|w| w.is_submitting()));

    view! {
        <div class="upload-section">
            <div
                class="upload-area"
                id="upload-area"
                class:dragover=move || is_dragover.get()
                class:disabled=move || is_submitting.get()
                on:click=on_zone_click
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                {move || match widget.with(|w| w.selected().cloned()) {
                    Some(file) => {
                        let size = file.size_label();
                        view! {
                            <div class="upload-content">
                                <div class="upload-icon">"✅"</div>
                                <h3>"File Selected: " {file.name}</h3>
                                <p>"Size: " {size}</p>
                            </div>
                        }
                        .into_view()
                    }
                    None => view! {
                        <div class="upload-content">
                            <div class="upload-icon">"📁"</div>
                            <h3>"Drag & drop your document here"</h3>
                            <p>"or click to browse"</p>
                            <p class="upload-hint">"Supported formats: PDF, JPG, PNG (max 10MB)"</p>
                        </div>
                    }
                    .into_view(),
                }}
            </div>

            <input
                type="file"
                id="file-input"
                accept=FILE_INPUT_ACCEPT
                style="display:none"
                node_ref=file_input
                on:change=on_file_change
            />

            <button
                class="process-btn"
                id="process-btn"
                disabled=move || !widget.with(|w| w.can_submit())
                on:click=on_process
            >
                {move || if is_submitting.get() { "⏳ Processing..." } else { "🔍 Process Document" }}
            </button>

            <LoadingIndicator visible=is_submitting/>
        </div>
    }
}
