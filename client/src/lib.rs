//! # client
//!
//! Leptos + WASM admin console for the CCI content backend.
//!
//! This crate contains pages, components, application state and the REST
//! client. Editing rules live in the `content` crate; this crate wires them
//! to signals, forms and HTTP calls.

#![recursion_limit = "256"]
pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point for the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
