//! Session state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthSession` is the single owner of the current credential and identity.
//! The UI wraps one instance per application root and republishes its
//! [`SessionState`] snapshot to the view tree; nothing else mutates it.
//!
//! LIFECYCLE
//! =========
//! `Bootstrapping` --bootstrap--> `Authenticated` | `Anonymous`
//! `Anonymous`/`Bootstrapping` --login--> `Authenticated`
//! `Authenticated` --logout--> `Anonymous`
//!
//! Every transition is a synchronous step; the only pending state is the
//! bootstrap check, flagged by `loading`.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use serde::{Deserialize, Serialize};

use crate::claims::{self, DecodeError, Identity};
use crate::store::TokenStore;

/// What bootstrap does with a credential that is present but undecodable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Leave it in storage; it keeps failing on every reload.
    #[default]
    Retain,
    /// Remove it, same as an expired credential.
    Clear,
}

/// Tunables for [`AuthSession`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub malformed: MalformedPolicy,
}

/// Coarse state derived from a [`SessionState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Bootstrapping,
    Authenticated,
    Anonymous,
}

/// Snapshot of the session published to views.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub identity: Option<Identity>,
    pub credential: Option<String>,
    pub loading: bool,
}

impl SessionState {
    /// Initial state before the stored credential has been checked.
    #[must_use]
    pub fn bootstrapping() -> Self {
        Self { identity: None, credential: None, loading: true }
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self { identity: None, credential: None, loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some() && self.identity.is_some()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Bootstrapping
        } else if self.is_authenticated() {
            Phase::Authenticated
        } else {
            Phase::Anonymous
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::bootstrapping()
    }
}

/// Owner of the session state and its backing [`TokenStore`].
#[derive(Debug)]
pub struct AuthSession<S> {
    store: S,
    config: SessionConfig,
    state: SessionState,
}

impl<S: TokenStore> AuthSession<S> {
    /// New session in `Bootstrapping`, using the default config.
    pub fn new(store: S) -> Self {
        Self::with_config(store, SessionConfig::default())
    }

    pub fn with_config(store: S, config: SessionConfig) -> Self {
        Self { store, config, state: SessionState::bootstrapping() }
    }

    /// Check the stored credential and leave `Bootstrapping`.
    ///
    /// Runs at most once; later calls return the current phase untouched.
    pub fn bootstrap(&mut self, now_ms: i64) -> Phase {
        if !self.state.loading {
            return self.state.phase();
        }
        self.state = match self.store.load() {
            None => {
                log::debug!("session bootstrap: no stored credential");
                SessionState::anonymous()
            }
            Some(credential) if claims::is_expired(&credential, now_ms) => {
                log::info!("session bootstrap: stored credential expired, clearing");
                self.store.clear();
                SessionState::anonymous()
            }
            Some(credential) => match claims::decode(&credential) {
                Ok(identity) => {
                    log::info!("session bootstrap: restored user {}", identity.id);
                    SessionState { identity: Some(identity), credential: Some(credential), loading: false }
                }
                Err(e) => {
                    log::warn!("session bootstrap: stored credential unreadable: {e}");
                    if self.config.malformed == MalformedPolicy::Clear {
                        self.store.clear();
                    }
                    SessionState::anonymous()
                }
            },
        };
        self.state.phase()
    }

    /// Accept a freshly issued credential.
    ///
    /// No expiry check is made. Also completes a pending bootstrap.
    ///
    /// # Errors
    ///
    /// Returns the [`DecodeError`] when the credential cannot be decoded; the
    /// state and storage are left unchanged in that case.
    pub fn login(&mut self, credential: &str) -> Result<&Identity, DecodeError> {
        let identity = claims::decode(credential).inspect_err(|e| {
            log::warn!("login rejected: credential unreadable: {e}");
        })?;
        self.store.save(credential);
        log::info!("login: user {}", identity.id);
        self.state.credential = Some(credential.to_owned());
        self.state.loading = false;
        Ok(self.state.identity.insert(identity))
    }

    /// Forget the credential. Safe to call when already anonymous.
    pub fn logout(&mut self) {
        self.store.clear();
        if self.state.is_authenticated() {
            log::info!("logout");
        }
        self.state.identity = None;
        self.state.credential = None;
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.state.identity.as_ref()
    }

    #[must_use]
    pub fn credential(&self) -> Option<&str> {
        self.state.credential.as_deref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Owned copy of the state for publishing to views.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state.clone()
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
