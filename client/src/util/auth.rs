//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same gate-then-navigate behavior, so the
//! redirect effect lives here instead of being repeated in each page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use session::{LOGIN_PATH, LayoutGate, ViewGate};

/// Navigate whenever `gate` produces a redirect.
///
/// `gate` is read inside an effect, so it re-evaluates after bootstrap,
/// login and logout.
pub fn install_gate_redirect<G, F>(gate: G, navigate: F)
where
    G: Fn() -> ViewGate + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = gate().redirect_target() {
            navigate(path, redirect_options());
        }
    });
}

/// The layout gate seen as a route gate, so the shell reuses the same
/// redirect effect.
pub fn layout_redirect(gate: LayoutGate) -> ViewGate {
    match gate {
        LayoutGate::Loading => ViewGate::Loading,
        LayoutGate::RedirectToLogin => ViewGate::Redirect(LOGIN_PATH),
        LayoutGate::Render { .. } => ViewGate::Allow,
    }
}

/// Guard redirects replace the history entry so "back" does not bounce.
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Whether the gated content may render.
pub fn is_allowed(gate: ViewGate) -> bool {
    gate == ViewGate::Allow
}

/// Placeholder text shown while the gate is not `Allow`.
pub fn gate_message(gate: ViewGate) -> &'static str {
    match gate {
        ViewGate::Loading => "Loading...",
        ViewGate::Redirect(_) => "Redirecting...",
        ViewGate::Allow => "",
    }
}
