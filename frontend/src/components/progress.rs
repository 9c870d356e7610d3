use leptos::*;

/// Spinner shown while a document is being processed.
#[component]
pub fn LoadingIndicator(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || visible.get() fallback=|| view! { }>
            <div class="loading" id="loading">
                <div class="spinner"></div>
                <p>"Processing document... This may take a few seconds."</p>
            </div>
        </Show>
    }
}
