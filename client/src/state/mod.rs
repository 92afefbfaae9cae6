//! Reactive application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` wraps the session core in a signal shared through context; `pager`
//! holds the per-view pagination and load state.

pub mod auth;
pub mod pager;
