//! Compile-time client configuration.
//!
//! The browser bundle has no runtime environment, so the API location is
//! baked in at build time from `CARS_API_BASE`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Fallback API origin for local development.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// `localStorage` key holding the bearer credential.
pub const TOKEN_STORAGE_KEY: &str = session::DEFAULT_TOKEN_KEY;

/// Rows per page on paginated tables.
pub const TABLE_PAGE_SIZE: u32 = 10;

/// Cards per page on the "My Cars" grid.
pub const CARD_PAGE_SIZE: u32 = 12;

/// Page size used to fill selectors in one request.
pub const SELECT_PAGE_SIZE: u32 = 100;

/// API origin without a trailing slash.
pub fn api_base() -> &'static str {
    normalize_base(option_env!("CARS_API_BASE").unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE } else { trimmed }
}
