//! Client session core for the car catalog UI.
//!
//! This crate owns everything about "who is signed in" that does not need a
//! browser: credential storage behind [`TokenStore`], claim decoding, the
//! [`AuthSession`] state machine and the role-based route guard. The `client`
//! crate wires it to `localStorage` and Leptos context.

pub mod access;
pub mod claims;
pub mod guard;
pub mod state;
pub mod store;

#[cfg(test)]
#[path = "support_test.rs"]
mod support;

pub use access::{Section, can_modify, landing_for, menu_for};
pub use claims::{DecodeError, Identity, Role, decode, is_expired, now_millis};
pub use guard::{HOME_PATH, LOGIN_PATH, LayoutGate, ViewGate, guard_index, guard_layout, guard_login, guard_view};
pub use state::{AuthSession, MalformedPolicy, Phase, SessionConfig, SessionState};
pub use store::{DEFAULT_TOKEN_KEY, MemoryTokenStore, TokenStore};
