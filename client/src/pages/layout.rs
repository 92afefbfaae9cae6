//! Authenticated shell: header, role menu and the active protected view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route is nested under this layout. It renders nothing of
//! the protected tree until the session is settled and authenticated; the
//! nested views then apply their own role checks.

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_navigate;
use session::{LayoutGate, Section};

use crate::components::spinner::Spinner;
use crate::state::auth::{role_badge, use_auth};
use crate::util::auth::{install_gate_redirect, layout_redirect};

fn menu_of(gate: LayoutGate) -> &'static [Section] {
    match gate {
        LayoutGate::Render { menu } => menu,
        LayoutGate::Loading | LayoutGate::RedirectToLogin => &[],
    }
}

#[component]
pub fn AuthenticatedLayout() -> impl IntoView {
    let auth = use_auth();
    install_gate_redirect(move || layout_redirect(auth.layout_gate()), use_navigate());

    let user_label = move || {
        auth.identity().map_or_else(String::new, |identity| format!("User #{}", identity.id))
    };
    let badge = move || role_badge(auth.identity().as_ref());
    let on_logout = move |_| auth.logout();

    view! {
        <Show
            when=move || matches!(auth.layout_gate(), LayoutGate::Render { .. })
            fallback=|| view! { <Spinner/> }
        >
            <div class="shell">
                <header class="shell__header">
                    <span class="shell__title">"Car Catalog"</span>
                    <span class="shell__user">{user_label}</span>
                    {move || badge().map(|role| view! { <span class="role-badge">{role}</span> })}
                    <button class="btn btn--secondary" on:click=on_logout>
                        "Log out"
                    </button>
                </header>
                <div class="shell__body">
                    <nav class="shell__menu">
                        <For
                            each=move || menu_of(auth.layout_gate()).iter().copied()
                            key=|section| section.path()
                            let:section
                        >
                            <A href=section.path()>{section.label()}</A>
                        </For>
                    </nav>
                    <main class="shell__content">
                        <Outlet/>
                    </main>
                </div>
            </div>
        </Show>
    }
}
