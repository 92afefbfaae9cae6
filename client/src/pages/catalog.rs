//! Read-only catalog browser for every signed-in user.
//!
//! Specs can be saved to "My Cars" by roles that have that view.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::Section;

use super::browse::{ListRow, RowTable, Trail, load_rows};
use crate::components::error_notice::ErrorNotice;
use crate::components::pager_bar::PagerBar;
use crate::components::spinner::Spinner;
use crate::config::TABLE_PAGE_SIZE;
use crate::net::api;
use crate::net::types::Paginated;
use crate::state::auth::use_auth;
use crate::state::pager::{Loadable, Pager};
use crate::util::auth::{gate_message, install_gate_redirect, is_allowed};
use crate::util::load::{load_page, run_action};

pub(crate) fn breadcrumb(titles: &[&str]) -> String {
    titles.join(" / ")
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    let auth = use_auth();
    install_gate_redirect(move || auth.view_gate(Section::Catalog), use_navigate());

    view! {
        <Show
            when=move || is_allowed(auth.view_gate(Section::Catalog))
            fallback=move || view! { <Spinner label=gate_message(auth.view_gate(Section::Catalog))/> }
        >
            <CatalogBrowser/>
        </Show>
    }
}

#[component]
fn CatalogBrowser() -> impl IntoView {
    let auth = use_auth();
    let trail = RwSignal::new(Trail::default());
    let picked = RwSignal::new(Vec::<String>::new());
    let pager = RwSignal::new(Pager::sorted(TABLE_PAGE_SIZE, "name"));
    let rows = RwSignal::new(Loadable::<Paginated<ListRow>>::Loading);
    let notice = RwSignal::new(String::new());

    let reload = move || {
        let scope = trail.get_untracked().scope();
        load_page(auth, pager, rows, move |query| async move { load_rows(scope, &query).await });
    };
    reload();

    let move_to = move |next: Trail| {
        trail.set(next);
        pager.set(Pager::sorted(TABLE_PAGE_SIZE, "name"));
        notice.set(String::new());
        reload();
    };
    let on_open = Callback::new(move |id: i64| {
        let label = rows.with_untracked(|rows| {
            rows.items().iter().find(|row| row.id == id).map(|row| row.label.clone())
        });
        picked.update(|picked| picked.push(label.unwrap_or_default()));
        move_to(trail.get_untracked().descend(id));
    });
    let on_back = move |_| {
        picked.update(|picked| {
            picked.pop();
        });
        move_to(trail.get_untracked().ascend());
    };
    let on_save = Callback::new(move |spec_id: i64| {
        run_action(auth, notice, async move { api::add_my_car(spec_id).await.map(drop) }, move || {
            notice.set("Saved to My Cars.".to_owned());
        });
    });
    let on_page = Callback::new(move |_page: u32| reload());
    let on_retry = Callback::new(move |()| reload());
    let can_save = move || is_allowed(auth.view_gate(Section::MyCars));

    view! {
        <section class="page page--catalog">
            <header class="page__header">
                <h1>{move || trail.with(|t| t.scope().title())}</h1>
                <p class="page__breadcrumb">
                    {move || picked.with(|picked| {
                        breadcrumb(&picked.iter().map(String::as_str).collect::<Vec<_>>())
                    })}
                </p>
                <Show when=move || !trail.with(Trail::is_root)>
                    <button class="btn btn--secondary" on:click=on_back>
                        "Back"
                    </button>
                </Show>
            </header>
            <Show when=move || !notice.get().is_empty()>
                <p class="form-notice">{move || notice.get()}</p>
            </Show>
            {move || match rows.get() {
                Loadable::Loading => view! { <Spinner/> }.into_any(),
                Loadable::Failed(message) => {
                    view! { <ErrorNotice message=message on_retry=on_retry/> }.into_any()
                }
                Loadable::Ready(page) => {
                    if trail.with(|t| t.scope().is_leaf()) {
                        if can_save() {
                            view! { <RowTable rows=page.data on_save=on_save/> }.into_any()
                        } else {
                            view! { <RowTable rows=page.data/> }.into_any()
                        }
                    } else {
                        view! { <RowTable rows=page.data on_open=on_open/> }.into_any()
                    }
                }
            }}
            <PagerBar pager=pager on_change=on_page/>
        </section>
    }
}
