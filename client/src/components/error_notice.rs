//! Inline failure message with a retry action.

use leptos::prelude::*;

/// Failed-load notice. The failure stays local to the view that raised it.
#[component]
pub fn ErrorNotice(#[prop(into)] message: Signal<String>, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="error-notice" role="alert">
            <p class="error-notice__message">{move || message.get()}</p>
            <button class="btn btn--secondary" on:click=move |_| on_retry.run(())>
                "Retry"
            </button>
        </div>
    }
}
