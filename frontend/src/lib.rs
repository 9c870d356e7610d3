//! Document Intelligence - Upload Widget (Rust/Leptos)
//!
//! A WebAssembly widget for uploading one document (PDF, JPG, PNG),
//! sending it to the extraction service through the docintel host,
//! showing the extracted fields and exporting them as CSV.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header                                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (owns the UploadWidget signal)                  │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (drop zone, process button, spinner)     │
//! │  └── ResultsSection (when a result is ready)                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (ExtractionResult, AppError, ...)
//! - [`state`] - The upload widget state machine
//! - [`validation`], [`render`], [`export`] - Pure presentation logic
//! - [`components`] - UI components
//! - [`services`] - Upload, download and alerts

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod validation;
pub mod render;
pub mod export;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    DocumentFile, SelectedFile,
    // API
    ExtractionResult, UploadEnvelope,
    // Field values
    field_text,
    // Errors
    AppError, AppResult,
};

// State
pub use state::{SubmitTicket, UploadWidget, WidgetPhase};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and mount the widget on `<body>`.
#[wasm_bindgen]
pub fn run() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Document Intelligence - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                    <Route path="/static/*any" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Current file and last result live here and nowhere else
    let widget = create_rw_signal(UploadWidget::<web_sys::File>::new());

    view! {
        <Header/>

        <div class="container">
            <Hero/>
            <UploadSection widget=widget/>
            <ResultsSection widget=widget/>
        </div>

        <Footer/>
    }
}
