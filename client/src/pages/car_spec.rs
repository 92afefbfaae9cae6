//! Car-spec editor: cascaded hierarchy lists with create, edit and delete.
//!
//! Open to Admin and CarSpec. Edit and delete buttons only render on records
//! the user may modify; the server stays the authority either way.

#[cfg(test)]
#[path = "car_spec_test.rs"]
mod car_spec_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::Section;

use super::browse::{
    ListRow, RowTable, Scope, Trail, delete_row, load_rows, save_generation, save_name, save_spec,
};
use crate::components::error_notice::ErrorNotice;
use crate::components::pager_bar::PagerBar;
use crate::components::spinner::Spinner;
use crate::config::TABLE_PAGE_SIZE;
use crate::net::api;
use crate::net::types::{CarSpec, Paginated};
use crate::state::auth::use_auth;
use crate::state::pager::{Loadable, Pager};
use crate::util::auth::{gate_message, install_gate_redirect, is_allowed};
use crate::util::forms::{
    CarSpecFields, FormError, validate_car_spec, validate_generation, validate_name,
};
use crate::util::load::{load_page, load_value, run_action};

#[component]
pub fn CarSpecPage() -> impl IntoView {
    let auth = use_auth();
    install_gate_redirect(move || auth.view_gate(Section::CarSpecs), use_navigate());

    view! {
        <Show
            when=move || is_allowed(auth.view_gate(Section::CarSpecs))
            fallback=move || view! { <Spinner label=gate_message(auth.view_gate(Section::CarSpecs))/> }
        >
            <CarSpecEditor/>
        </Show>
    }
}

#[component]
fn CarSpecEditor() -> impl IntoView {
    let auth = use_auth();
    let trail = RwSignal::new(Trail::default());
    let pager = RwSignal::new(Pager::sorted(TABLE_PAGE_SIZE, "name"));
    let rows = RwSignal::new(Loadable::<Paginated<ListRow>>::Loading);
    let editing = RwSignal::new(None::<ListRow>);
    let notice = RwSignal::new(String::new());

    let reload = move || {
        let scope = trail.get_untracked().scope();
        load_page(auth, pager, rows, move |query| async move { load_rows(scope, &query).await });
    };
    reload();

    let move_to = move |next: Trail| {
        trail.set(next);
        pager.set(Pager::sorted(TABLE_PAGE_SIZE, "name"));
        editing.set(None);
        notice.set(String::new());
        reload();
    };
    let on_open = Callback::new(move |id: i64| move_to(trail.get_untracked().descend(id)));
    let on_back = move |_| move_to(trail.get_untracked().ascend());
    let on_page = Callback::new(move |_page: u32| reload());
    let on_retry = Callback::new(move |()| reload());

    let on_edit = Callback::new(move |id: i64| {
        let row = rows.with_untracked(|rows| rows.items().iter().find(|row| row.id == id).cloned());
        editing.set(row);
    });
    let on_delete = Callback::new(move |id: i64| {
        let scope = trail.get_untracked().scope();
        let remaining = rows.with_untracked(|rows| rows.items().len().saturating_sub(1));
        run_action(auth, notice, delete_row(scope, id), move || {
            if editing.with_untracked(|e| e.as_ref().is_some_and(|row| row.id == id)) {
                editing.set(None);
            }
            pager.update(|p| p.settle_after_delete(remaining));
            reload();
        });
    });
    let on_saved = Callback::new(move |()| {
        editing.set(None);
        reload();
    });
    let on_cancel = Callback::new(move |()| editing.set(None));

    let open_handler = move || (!trail.with(|t| t.scope().is_leaf())).then_some(on_open);

    view! {
        <section class="page page--car-spec">
            <header class="page__header">
                <h1>{move || trail.with(|t| t.scope().title())}</h1>
                <Show when=move || !trail.with(Trail::is_root)>
                    <button class="btn btn--secondary" on:click=on_back>
                        "Back"
                    </button>
                </Show>
            </header>
            <Show when=move || !notice.get().is_empty()>
                <p class="form-error">{move || notice.get()}</p>
            </Show>
            {move || match rows.get() {
                Loadable::Loading => view! { <Spinner/> }.into_any(),
                Loadable::Failed(message) => {
                    view! { <ErrorNotice message=message on_retry=on_retry/> }.into_any()
                }
                Loadable::Ready(page) => match open_handler() {
                    Some(open) => {
                        view! {
                            <RowTable rows=page.data on_open=open on_edit=on_edit on_delete=on_delete/>
                        }
                            .into_any()
                    }
                    None => {
                        view! { <RowTable rows=page.data on_edit=on_edit on_delete=on_delete/> }
                            .into_any()
                    }
                },
            }}
            <PagerBar pager=pager on_change=on_page/>
            {move || {
                let scope = trail.with(Trail::scope);
                let editing = editing.get();
                view! { <RecordForm scope=scope editing=editing on_saved=on_saved on_cancel=on_cancel/> }
            }}
        </section>
    }
}

/// "New brand", "Edit spec"
pub(crate) fn form_title(scope: Scope, editing: bool) -> String {
    let noun = match scope {
        Scope::Brands => "brand",
        Scope::Models { .. } => "model",
        Scope::Submodels { .. } => "submodel",
        Scope::Generations { .. } => "generation",
        Scope::Specs { .. } => "spec",
    };
    if editing { format!("Edit {noun}") } else { format!("New {noun}") }
}

/// Create form for the list named by `scope`, or the edit form of `editing`.
#[component]
fn RecordForm(
    scope: Scope,
    editing: Option<ListRow>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let id = editing.as_ref().map(|row| row.id);
    let (start_init, end_init) = editing
        .as_ref()
        .and_then(|row| row.years)
        .map_or_else(Default::default, |(start, end)| (start.to_string(), end.to_string()));
    let name_init = editing.as_ref().map(|row| row.name.clone()).unwrap_or_default();
    let notice = RwSignal::new(String::new());
    let name = RwSignal::new(name_init);
    let year_start = RwSignal::new(start_init);
    let year_end = RwSignal::new(end_init);
    let spec = RwSignal::new(CarSpecFields::default());
    let loaded_spec = RwSignal::new(Loadable::<CarSpec>::Loading);

    if let (Scope::Specs { .. }, Some(spec_id)) = (scope, id) {
        load_value(auth, loaded_spec, api::get_spec(spec_id));
        Effect::new(move || match loaded_spec.get() {
            Loadable::Loading => {}
            Loadable::Ready(record) => spec.set(CarSpecFields::from(&record)),
            Loadable::Failed(message) => notice.set(message),
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let reset = move || {
            name.set(String::new());
            year_start.set(String::new());
            year_end.set(String::new());
            spec.set(CarSpecFields::default());
            on_saved.run(());
        };
        let submitted: Result<(), FormError> = match scope {
            Scope::Brands | Scope::Models { .. } | Scope::Submodels { .. } => validate_name(&name.get())
                .map(|payload| run_action(auth, notice, save_name(scope, id, payload), reset)),
            Scope::Generations { submodel_id } => {
                validate_generation(&name.get(), &year_start.get(), &year_end.get()).map(|payload| {
                    run_action(auth, notice, save_generation(submodel_id, id, payload), reset);
                })
            }
            Scope::Specs { generation_id } => validate_car_spec(&spec.get()).map(|payload| {
                run_action(auth, notice, save_spec(generation_id, id, payload), reset);
            }),
        };
        if let Err(e) = submitted {
            notice.set(e.message);
        }
    };

    let spec_input = move |label: &'static str, get: fn(&CarSpecFields) -> String, set: fn(&mut CarSpecFields, String)| {
        view! {
            <input
                class="form-input"
                placeholder=label
                prop:value=move || spec.with(get)
                on:input=move |ev| spec.update(|fields| set(fields, event_target_value(&ev)))
            />
        }
    };

    let fields = match scope {
        Scope::Brands | Scope::Models { .. } | Scope::Submodels { .. } => view! {
            <input
                class="form-input"
                placeholder="Name"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
        }
        .into_any(),
        Scope::Generations { .. } => view! {
            <input
                class="form-input"
                placeholder="Name"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                class="form-input"
                placeholder="Start year"
                prop:value=move || year_start.get()
                on:input=move |ev| year_start.set(event_target_value(&ev))
            />
            <input
                class="form-input"
                placeholder="End year"
                prop:value=move || year_end.get()
                on:input=move |ev| year_end.set(event_target_value(&ev))
            />
        }
        .into_any(),
        Scope::Specs { .. } => view! {
            {spec_input("Name", |f| f.name.clone(), |f, v| f.name = v)}
            {spec_input("Engine", |f| f.engine.clone(), |f, v| f.engine = v)}
            {spec_input("Horsepower", |f| f.horsepower.clone(), |f, v| f.horsepower = v)}
            {spec_input("Torque", |f| f.torque.clone(), |f, v| f.torque = v)}
            {spec_input("Fuel type", |f| f.fuel_type.clone(), |f, v| f.fuel_type = v)}
            {spec_input("Year", |f| f.year.clone(), |f, v| f.year = v)}
        }
        .into_any(),
    };

    view! {
        <form class="create-form" on:submit=on_submit>
            <h2>{form_title(scope, id.is_some())}</h2>
            {fields}
            <button class="btn btn--primary" type="submit">
                {if id.is_some() { "Save" } else { "Create" }}
            </button>
            <Show when=move || id.is_some()>
                <button class="btn btn--secondary" type="button" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </Show>
            <Show when=move || !notice.get().is_empty()>
                <p class="form-error">{move || notice.get()}</p>
            </Show>
        </form>
    }
}
