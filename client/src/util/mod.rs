//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, clock) and pure form
//! and routing helpers from page and component logic.

pub mod auth;
pub mod clock;
pub mod forms;
pub mod load;
pub mod storage;
