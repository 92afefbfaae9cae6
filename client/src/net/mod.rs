//! Networking modules for the catalog REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs authenticated HTTP calls and `types` defines the shared
//! wire schema.

pub mod api;
pub mod types;
