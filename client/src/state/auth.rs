//! Auth-session context for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provide_auth` is called once by the root `App`. It owns the single
//! `AuthSession` for the page, and every route guard and user-aware component
//! reads it through `use_auth`. Reads outside the provider's subtree are a
//! wiring defect and fail fatally.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use session::{
    AuthSession, DecodeError, Identity, LayoutGate, Phase, Section, SessionConfig, SessionState,
    ViewGate,
};

use crate::net::api::ApiError;
use crate::util::clock::now_ms;
use crate::util::storage::LocalTokenStore;

/// Error returned by [`AuthContext::login`].
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The issued credential could not be decoded.
    #[error("credential rejected: {0}")]
    Rejected(#[from] DecodeError),
    /// The context was used after its owner was disposed.
    #[error("session context disposed")]
    Disposed,
}

/// Handle to the page's session. `Copy`, so closures can capture it freely.
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<AuthSession<LocalTokenStore>>,
}

impl AuthContext {
    /// New context in the bootstrapping state.
    pub fn new(config: SessionConfig) -> Self {
        Self { session: RwSignal::new(AuthSession::with_config(LocalTokenStore::default(), config)) }
    }

    /// Run the one-time stored-credential check.
    pub fn bootstrap(&self) {
        self.session.update(|session| {
            session.bootstrap(now_ms());
        });
    }

    /// Accept a credential returned by the login endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Rejected`] if the credential does not decode.
    pub fn login(&self, credential: &str) -> Result<Identity, AuthError> {
        self.session
            .try_update(|session| session.login(credential).cloned())
            .ok_or(AuthError::Disposed)?
            .map_err(AuthError::from)
    }

    pub fn logout(&self) {
        self.session.update(AuthSession::logout);
    }

    /// Reactive snapshot of the whole state.
    pub fn state(&self) -> SessionState {
        self.session.with(AuthSession::snapshot)
    }

    pub fn identity(&self) -> Option<Identity> {
        self.session.with(|session| session.identity().cloned())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(AuthSession::is_authenticated)
    }

    pub fn is_loading(&self) -> bool {
        self.session.with(AuthSession::is_loading)
    }

    pub fn phase(&self) -> Phase {
        self.session.with(AuthSession::phase)
    }

    /// Current bearer credential without subscribing.
    pub fn credential_untracked(&self) -> Option<String> {
        self.session.with_untracked(|session| session.credential().map(str::to_owned))
    }

    pub fn layout_gate(&self) -> LayoutGate {
        self.session.with(|session| session::guard_layout(session.state()))
    }

    pub fn view_gate(&self, section: Section) -> ViewGate {
        self.session.with(|session| session::guard_view(session.state(), section))
    }

    pub fn index_gate(&self) -> ViewGate {
        self.session.with(|session| session::guard_index(session.state()))
    }

    pub fn login_gate(&self) -> ViewGate {
        self.session.with(|session| session::guard_login(session.state()))
    }

    /// Turn a failed call into a display message, signing out on 401.
    ///
    /// The layout gate then sends the user to the login view.
    pub fn handle_api_error(&self, err: &ApiError) -> String {
        if err.is_unauthorized() {
            log::info!("credential refused by api, signing out");
            self.logout();
            return "Session expired. Please sign in again.".to_owned();
        }
        err.to_string()
    }

    /// Whether the signed-in user gets edit/delete on a record.
    pub fn can_modify(&self, created_by: i64) -> bool {
        self.session.with(|session| {
            session
                .identity()
                .is_some_and(|identity| session::can_modify(identity, created_by))
        })
    }
}

/// Install the page's [`AuthContext`] and schedule its bootstrap.
///
/// The bootstrap effect only runs in the browser, once, after hydration, so
/// the server render and the first client render agree on the loading state.
pub fn provide_auth() -> AuthContext {
    let auth = AuthContext::new(SessionConfig::default());
    provide_context(auth);
    Effect::new(move || auth.bootstrap());
    auth
}

/// The page's [`AuthContext`].
///
/// # Panics
///
/// Panics when called outside the subtree of [`provide_auth`].
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Short role badge text for the header.
pub fn role_badge(identity: Option<&Identity>) -> Option<String> {
    identity.and_then(|i| i.role.as_ref()).map(ToString::to_string)
}
