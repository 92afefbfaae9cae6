//! # client
//!
//! Leptos + WASM frontend for the car catalog.
//!
//! This crate contains the authenticated shell, route pages, shared
//! components, the auth context built on the `session` crate, and the REST
//! client. The `ssr` feature renders it inside the axum host; `hydrate`
//! attaches it in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
