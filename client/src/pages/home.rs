//! Index route: sends each user to the landing view for their role.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::spinner::Spinner;
use crate::state::auth::use_auth;
use crate::util::auth::{gate_message, install_gate_redirect};

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    install_gate_redirect(move || auth.index_gate(), use_navigate());

    move || view! { <Spinner label=gate_message(auth.index_gate())/> }
}
