//! # client
//!
//! Leptos frontend for the SkyDeck live-flight dashboard.
//!
//! The page is a responsive shell (navigation, header, content) whose
//! regions are injected as renderers. Flight data comes from the server's
//! REST API and is decoded with the shared `flights` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    leptos::mount::hydrate_body(app::App);
}
