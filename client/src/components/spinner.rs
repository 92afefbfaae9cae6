//! Busy indicator shown while a session or a page load is pending.

use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(into, optional)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Loading...".to_owned());
    view! {
        <div class="spinner" role="status" aria-live="polite">
            <span class="spinner__wheel"></span>
            <span class="spinner__label">{label}</span>
        </div>
    }
}
