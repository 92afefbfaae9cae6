//! User administration: accounts and their role assignments.
//!
//! Admin only. The user table is paginated; selecting a user opens a panel
//! listing that user's roles with assign and remove actions. Edit opens a
//! form that renames a user or resets their password.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::Section;

use crate::components::error_notice::ErrorNotice;
use crate::components::pager_bar::PagerBar;
use crate::components::spinner::Spinner;
use crate::config::TABLE_PAGE_SIZE;
use crate::net::api;
use crate::net::types::{Paginated, RoleRecord, User, UserUpdate};
use crate::state::auth::use_auth;
use crate::state::pager::{Loadable, Pager};
use crate::util::auth::{gate_message, install_gate_redirect, is_allowed};
use crate::util::forms::{validate_user_create, validate_user_update};
use crate::util::load::{load_page, load_value, run_action};

/// Roles from `all` not yet held by the user.
pub(crate) fn assignable<'a>(all: &'a [RoleRecord], held: &[RoleRecord]) -> Vec<&'a RoleRecord> {
    all.iter().filter(|role| held.iter().all(|h| h.name != role.name)).collect()
}

/// "users.read, users.write" or "none".
pub(crate) fn permission_summary(role: &RoleRecord) -> String {
    if role.permissions.is_empty() {
        return "none".to_owned();
    }
    role.permissions.iter().map(|p| p.name.as_str()).collect::<Vec<_>>().join(", ")
}

/// True when the update would send no fields.
pub(crate) fn is_noop_update(update: &UserUpdate) -> bool {
    update.username.is_none() && update.password.is_none()
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = use_auth();
    install_gate_redirect(move || auth.view_gate(Section::Users), use_navigate());

    view! {
        <Show
            when=move || is_allowed(auth.view_gate(Section::Users))
            fallback=move || view! { <Spinner label=gate_message(auth.view_gate(Section::Users))/> }
        >
            <UsersAdmin/>
        </Show>
    }
}

#[component]
fn UsersAdmin() -> impl IntoView {
    let auth = use_auth();
    let pager = RwSignal::new(Pager::sorted(TABLE_PAGE_SIZE, "username"));
    let users = RwSignal::new(Loadable::<Paginated<User>>::Loading);
    let notice = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<User>);
    let editing = RwSignal::new(None::<User>);
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let reload = move || {
        load_page(auth, pager, users, |query| async move { api::list_users(&query).await });
    };
    reload();

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_user_create(&username.get(), &password.get()) {
            Ok(payload) => run_action(
                auth,
                notice,
                async move { api::create_user(&payload).await.map(drop) },
                move || {
                    username.set(String::new());
                    password.set(String::new());
                    reload();
                },
            ),
            Err(e) => notice.set(e.message),
        }
    };
    let on_delete = move |user_id: i64| {
        let remaining = users.with_untracked(|users| users.items().len().saturating_sub(1));
        run_action(auth, notice, api::delete_user(user_id), move || {
            if selected.with_untracked(|s| s.as_ref().is_some_and(|u| u.id == user_id)) {
                selected.set(None);
            }
            if editing.with_untracked(|e| e.as_ref().is_some_and(|u| u.id == user_id)) {
                editing.set(None);
            }
            pager.update(|p| p.settle_after_delete(remaining));
            reload();
        });
    };
    let on_page = Callback::new(move |_page: u32| reload());
    let on_retry = Callback::new(move |()| reload());
    let is_self = move |user_id: i64| auth.identity().is_some_and(|identity| identity.id == user_id);

    view! {
        <section class="page page--admin">
            <header class="page__header">
                <h1>"Users"</h1>
            </header>
            <Show when=move || !notice.get().is_empty()>
                <p class="form-error">{move || notice.get()}</p>
            </Show>
            {move || match users.get() {
                Loadable::Loading => view! { <Spinner/> }.into_any(),
                Loadable::Failed(message) => {
                    view! { <ErrorNotice message=message on_retry=on_retry/> }.into_any()
                }
                Loadable::Ready(page) => {
                    view! {
                        <table class="row-table">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Username"</th>
                                    <th>"Active"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {page
                                    .data
                                    .into_iter()
                                    .map(|user| {
                                        let user_id = user.id;
                                        let row = user.clone();
                                        let edit_row = user.clone();
                                        view! {
                                            <tr>
                                                <td>{user.id}</td>
                                                <td>{user.username}</td>
                                                <td>{if user.is_active { "yes" } else { "no" }}</td>
                                                <td class="row-table__actions">
                                                    <button
                                                        class="btn btn--secondary"
                                                        on:click=move |_| selected.set(Some(row.clone()))
                                                    >
                                                        "Roles"
                                                    </button>
                                                    <button
                                                        class="btn btn--secondary"
                                                        on:click=move |_| editing.set(Some(edit_row.clone()))
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <Show when=move || !is_self(user_id)>
                                                        <button
                                                            class="btn btn--danger"
                                                            on:click=move |_| on_delete(user_id)
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </Show>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
            <PagerBar pager=pager on_change=on_page/>

            <form class="create-form" on:submit=on_create>
                <h2>"New user"</h2>
                <input
                    class="form-input"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    class="form-input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    "Create"
                </button>
            </form>

            {move || {
                editing
                    .get()
                    .map(|user| {
                        view! {
                            <EditUserForm
                                user=user
                                on_saved=Callback::new(move |()| {
                                    editing.set(None);
                                    reload();
                                })
                                on_cancel=Callback::new(move |()| editing.set(None))
                            />
                        }
                    })
            }}
            {move || {
                selected
                    .get()
                    .map(|user| {
                        view! {
                            <UserRolesPanel user=user on_close=Callback::new(move |()| selected.set(None))/>
                        }
                    })
            }}
            <RolesOverview/>
        </section>
    }
}

/// Rename a user or reset their password; blank fields stay unchanged.
#[component]
fn EditUserForm(user: User, on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let user_id = user.id;
    let username = RwSignal::new(user.username.clone());
    let password = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_user_update(&username.get(), &password.get()) {
            Ok(payload) if is_noop_update(&payload) => notice.set("Nothing to change.".to_owned()),
            Ok(payload) => run_action(
                auth,
                notice,
                async move { api::update_user(user_id, &payload).await.map(drop) },
                move || on_saved.run(()),
            ),
            Err(e) => notice.set(e.message),
        }
    };

    view! {
        <form class="create-form" on:submit=on_submit>
            <h2>{format!("Edit {}", user.username)}</h2>
            <input
                class="form-input"
                placeholder="Username"
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
            />
            <input
                class="form-input"
                type="password"
                placeholder="New password (leave blank to keep)"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button class="btn btn--primary" type="submit">
                "Save"
            </button>
            <button class="btn btn--secondary" type="button" on:click=move |_| on_cancel.run(())>
                "Cancel"
            </button>
            <Show when=move || !notice.get().is_empty()>
                <p class="form-error">{move || notice.get()}</p>
            </Show>
        </form>
    }
}

/// Role assignments of one user.
#[component]
fn UserRolesPanel(user: User, on_close: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let user_id = user.id;
    let held = RwSignal::new(Loadable::<Vec<RoleRecord>>::Loading);
    let all = RwSignal::new(Loadable::<Vec<RoleRecord>>::Loading);
    let choice = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());

    let reload = move || {
        load_value(auth, held, api::list_user_roles(user_id));
        load_value(auth, all, api::list_roles());
    };
    reload();

    let on_assign = move |_| {
        let role_name = choice.get();
        if role_name.is_empty() {
            notice.set("Pick a role first.".to_owned());
            return;
        }
        run_action(
            auth,
            notice,
            async move { api::assign_role(user_id, &role_name).await },
            move || {
                choice.set(String::new());
                reload();
            },
        );
    };
    let on_remove = move |role_name: String| {
        run_action(
            auth,
            notice,
            async move { api::remove_role(user_id, &role_name).await },
            reload,
        );
    };
    let on_retry = Callback::new(move |()| reload());

    view! {
        <aside class="side-panel">
            <header class="side-panel__header">
                <h2>{format!("Roles of {}", user.username)}</h2>
                <button class="btn btn--secondary" on:click=move |_| on_close.run(())>
                    "Close"
                </button>
            </header>
            <Show when=move || !notice.get().is_empty()>
                <p class="form-error">{move || notice.get()}</p>
            </Show>
            {move || match held.get() {
                Loadable::Loading => view! { <Spinner/> }.into_any(),
                Loadable::Failed(message) => {
                    view! { <ErrorNotice message=message on_retry=on_retry/> }.into_any()
                }
                Loadable::Ready(roles) => {
                    let options = all.with(|all| {
                        all.ready()
                            .map(|all| {
                                assignable(all, &roles)
                                    .into_iter()
                                    .map(|r| r.name.clone())
                                    .collect::<Vec<_>>()
                            })
                            .unwrap_or_default()
                    });
                    view! {
                        <ul class="role-list">
                            {roles
                                .into_iter()
                                .map(|role| {
                                    let name = role.name.clone();
                                    view! {
                                        <li>
                                            <span class="role-badge">{role.name}</span>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| on_remove(name.clone())
                                            >
                                                "Remove"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        <div class="role-assign">
                            <select
                                class="form-input"
                                prop:value=move || choice.get()
                                on:change=move |ev| choice.set(event_target_value(&ev))
                            >
                                <option value="">"Select a role"</option>
                                {options
                                    .into_iter()
                                    .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
                                    .collect_view()}
                            </select>
                            <button class="btn btn--primary" on:click=on_assign>
                                "Assign"
                            </button>
                        </div>
                    }
                        .into_any()
                }
            }}
        </aside>
    }
}

/// Read-only list of roles and the permissions they grant.
#[component]
fn RolesOverview() -> impl IntoView {
    let auth = use_auth();
    let roles = RwSignal::new(Loadable::<Vec<RoleRecord>>::Loading);

    let reload = move || load_value(auth, roles, api::list_roles());
    reload();
    let on_retry = Callback::new(move |()| reload());

    view! {
        <section class="roles-overview">
            <h2>"Roles"</h2>
            {move || match roles.get() {
                Loadable::Loading => view! { <Spinner/> }.into_any(),
                Loadable::Failed(message) => {
                    view! { <ErrorNotice message=message on_retry=on_retry/> }.into_any()
                }
                Loadable::Ready(list) => {
                    view! {
                        <dl class="roles-overview__list">
                            {list
                                .into_iter()
                                .map(|role| {
                                    let permissions = permission_summary(&role);
                                    view! {
                                        <dt>{role.name}</dt>
                                        <dd>{permissions}</dd>
                                    }
                                })
                                .collect_view()}
                        </dl>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
