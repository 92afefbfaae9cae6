//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shared load, failure and pagination chrome that
//! every list page repeats.

pub mod error_notice;
pub mod pager_bar;
pub mod spinner;
