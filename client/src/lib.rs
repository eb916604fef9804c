//! # bluetrees-client
//!
//! Leptos + WASM login screen. Plays a decorative entry sequence, simulates a
//! sign-in delay, and redirects to a URL configured in a local settings panel.
//!
//! The `ssr` feature renders the page on the server; the `hydrate` feature
//! builds the browser bundle whose entry point is [`hydrate`].

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed (hot reload).
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
