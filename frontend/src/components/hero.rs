//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"📄 Document Intelligence"</h1>
            <p class="subtitle">
                "Upload an invoice, receipt or contract (PDF, JPG, PNG). "
                "Key fields are extracted automatically and can be exported as CSV."
            </p>
        </div>
    }
}
