//! The signed-in user's saved specs, shown as cards.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::Section;

use super::browse::spec_detail;
use crate::components::error_notice::ErrorNotice;
use crate::components::pager_bar::PagerBar;
use crate::components::spinner::Spinner;
use crate::config::CARD_PAGE_SIZE;
use crate::net::api;
use crate::net::types::{CarSpec, Paginated};
use crate::state::auth::use_auth;
use crate::state::pager::{Loadable, Pager, count_label};
use crate::util::auth::{gate_message, install_gate_redirect, is_allowed};
use crate::util::load::{load_page, run_action};

#[component]
pub fn MyCarsPage() -> impl IntoView {
    let auth = use_auth();
    install_gate_redirect(move || auth.view_gate(Section::MyCars), use_navigate());

    view! {
        <Show
            when=move || is_allowed(auth.view_gate(Section::MyCars))
            fallback=move || view! { <Spinner label=gate_message(auth.view_gate(Section::MyCars))/> }
        >
            <MyCarsGrid/>
        </Show>
    }
}

#[component]
fn MyCarsGrid() -> impl IntoView {
    let auth = use_auth();
    let pager = RwSignal::new(Pager::new(CARD_PAGE_SIZE));
    let cars = RwSignal::new(Loadable::<Paginated<CarSpec>>::Loading);
    let notice = RwSignal::new(String::new());

    let reload = move || {
        load_page(auth, pager, cars, |query| async move { api::list_my_cars(&query).await });
    };
    reload();

    let on_remove = move |spec_id: i64| {
        let remaining = cars.with_untracked(|cars| cars.items().len().saturating_sub(1));
        run_action(auth, notice, api::remove_my_car(spec_id), move || {
            pager.update(|p| p.settle_after_delete(remaining));
            reload();
        });
    };
    let on_page = Callback::new(move |_page: u32| reload());
    let on_retry = Callback::new(move |()| reload());

    let summary = move || {
        cars.with(|cars| {
            cars.ready().map(|page| count_label(page.meta.total_items, "car saved", "cars saved"))
        })
    };

    view! {
        <section class="page page--my-cars">
            <header class="page__header">
                <h1>"My Cars"</h1>
                <span class="page__summary">{move || summary().unwrap_or_default()}</span>
            </header>
            <Show when=move || !notice.get().is_empty()>
                <p class="form-error">{move || notice.get()}</p>
            </Show>
            {move || match cars.get() {
                Loadable::Loading => view! { <Spinner/> }.into_any(),
                Loadable::Failed(message) => {
                    view! { <ErrorNotice message=message on_retry=on_retry/> }.into_any()
                }
                Loadable::Ready(page) if page.is_empty() => {
                    view! {
                        <p class="empty-state">"No saved cars yet. Add some from the catalog."</p>
                    }
                        .into_any()
                }
                Loadable::Ready(page) => {
                    view! {
                        <div class="card-grid">
                            {page
                                .data
                                .into_iter()
                                .map(|spec| {
                                    let spec_id = spec.id;
                                    let detail = spec_detail(&spec);
                                    view! {
                                        <article class="car-card">
                                            <h2 class="car-card__name">{spec.name}</h2>
                                            <p class="car-card__detail">{detail}</p>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| on_remove(spec_id)
                                            >
                                                "Remove"
                                            </button>
                                        </article>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
            <PagerBar pager=pager on_change=on_page/>
        </section>
    }
}
