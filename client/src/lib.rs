//! # client
//!
//! Leptos frontend for the AURA showcase: catalog grid, acquisition modal,
//! chat widget and ambient chrome.
//!
//! State lives in `state` as plain structs with synchronous transitions;
//! components wrap them in `RwSignal`s provided through context and own the
//! timers and relay calls.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
