//! Previous / next controls under a paginated list.

use leptos::prelude::*;

use crate::state::pager::Pager;

/// Hidden when the result fits on one page. `on_change` receives the new
/// page number after the pager has moved.
#[component]
pub fn PagerBar(pager: RwSignal<Pager>, on_change: Callback<u32>) -> impl IntoView {
    let on_prev = move |_| {
        if pager.try_update(Pager::prev).unwrap_or(false) {
            on_change.run(pager.get_untracked().page());
        }
    };
    let on_next = move |_| {
        if pager.try_update(Pager::next).unwrap_or(false) {
            on_change.run(pager.get_untracked().page());
        }
    };

    view! {
        <Show when=move || !pager.with(Pager::is_single_page)>
            <nav class="pager-bar">
                <button
                    class="btn btn--secondary"
                    disabled=move || !pager.with(Pager::has_prev)
                    on:click=on_prev
                >
                    "Previous"
                </button>
                <span class="pager-bar__summary">{move || pager.with(Pager::summary)}</span>
                <button
                    class="btn btn--secondary"
                    disabled=move || !pager.with(Pager::has_next)
                    on:click=on_next
                >
                    "Next"
                </button>
            </nav>
        </Show>
    }
}
