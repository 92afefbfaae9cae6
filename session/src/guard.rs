//! Route-guard decisions for protected views.
//!
//! The UI layer turns these into a spinner, a navigation, or the view itself.
//! Order is fixed: an undetermined session never navigates, an anonymous one
//! always goes to login, and only then is the role consulted.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::access::{Section, landing_for, menu_for};
use crate::claims::Role;
use crate::state::SessionState;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// Decision for the authenticated layout shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutGate {
    Loading,
    RedirectToLogin,
    Render { menu: &'static [Section] },
}

/// Decision for a single route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewGate {
    Loading,
    Redirect(&'static str),
    Allow,
}

impl ViewGate {
    /// Navigation target, if this decision navigates.
    #[must_use]
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::Redirect(path) => Some(path),
            Self::Loading | Self::Allow => None,
        }
    }
}

fn role_of(state: &SessionState) -> Option<&Role> {
    state.identity.as_ref().and_then(|identity| identity.role.as_ref())
}

/// Gate for the shell wrapping every protected view.
#[must_use]
pub fn guard_layout(state: &SessionState) -> LayoutGate {
    if state.loading {
        LayoutGate::Loading
    } else if !state.is_authenticated() {
        LayoutGate::RedirectToLogin
    } else {
        LayoutGate::Render { menu: menu_for(role_of(state)) }
    }
}

/// Gate for the view of `section`, re-checking the role even when the
/// section is absent from the menu.
#[must_use]
pub fn guard_view(state: &SessionState, section: Section) -> ViewGate {
    match guard_layout(state) {
        LayoutGate::Loading => ViewGate::Loading,
        LayoutGate::RedirectToLogin => ViewGate::Redirect(LOGIN_PATH),
        LayoutGate::Render { .. } => {
            let role = role_of(state);
            if section.permits(role) {
                ViewGate::Allow
            } else {
                log::debug!("view {} refused for role {role:?}", section.path());
                ViewGate::Redirect(landing_for(role).path())
            }
        }
    }
}

/// Gate for `/`, which only ever redirects.
#[must_use]
pub fn guard_index(state: &SessionState) -> ViewGate {
    match guard_layout(state) {
        LayoutGate::Loading => ViewGate::Loading,
        LayoutGate::RedirectToLogin => ViewGate::Redirect(LOGIN_PATH),
        LayoutGate::Render { .. } => ViewGate::Redirect(landing_for(role_of(state)).path()),
    }
}

/// Gate for the login view: signed-in users are sent home.
#[must_use]
pub fn guard_login(state: &SessionState) -> ViewGate {
    if state.loading {
        ViewGate::Loading
    } else if state.is_authenticated() {
        ViewGate::Redirect(HOME_PATH)
    } else {
        ViewGate::Allow
    }
}
