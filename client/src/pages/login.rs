//! Login page: username + password exchanged for a bearer credential.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::spinner::Spinner;
use crate::state::auth::{AuthError, use_auth};
use crate::util::auth::{install_gate_redirect, is_allowed};

pub(crate) fn submit_label(busy: bool) -> &'static str {
    if busy { "Signing in..." } else { "Sign in" }
}

pub(crate) fn credential_failure_message(err: &AuthError) -> String {
    match err {
        AuthError::Rejected(_) => "The server issued an unreadable credential.".to_owned(),
        AuthError::Disposed => err.to_string(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    install_gate_redirect(move || auth.login_gate(), use_navigate());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use crate::util::forms::validate_login;

            let request = match validate_login(&username.get(), &password.get()) {
                Ok(request) => request,
                Err(e) => {
                    info.set(e.message);
                    return;
                }
            };
            busy.set(true);
            info.set(String::new());
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&request).await {
                    Ok(token) => match auth.login(&token.access_token) {
                        Ok(_) => password.set(String::new()),
                        Err(e) => info.set(credential_failure_message(&e)),
                    },
                    Err(e) => info.set(e.login_message()),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <Show
            when=move || is_allowed(auth.login_gate())
            fallback=|| view! { <Spinner/> }
        >
            <div class="login-page">
                <div class="login-card">
                    <h1>"Car Catalog"</h1>
                    <p class="login-card__subtitle">"Sign in to continue"</p>
                    <form class="login-form" on:submit=on_submit>
                        <input
                            class="login-input"
                            type="text"
                            autocomplete="username"
                            placeholder="Username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            autocomplete="current-password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            {move || submit_label(busy.get())}
                        </button>
                    </form>
                    <Show when=move || !info.get().is_empty()>
                        <p class="login-message">{move || info.get()}</p>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
