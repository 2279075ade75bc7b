//! # registration-form
//!
//! Leptos + WASM registration form: full name, email, and password fields
//! validated against a declarative schema, a password visibility toggle, and a
//! fire-and-forget `POST` of each validated registration followed by a success
//! toast.
//!
//! The `hydrate` feature builds the browser bundle; the `ssr` feature builds
//! the Axum host in `main.rs` that renders the page and serves the bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod server;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::console_warn(&format!("console logger unavailable: {e}"));
    }
    leptos::mount::hydrate_body(app::App);
}
