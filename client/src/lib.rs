//! # folio-client
//!
//! Leptos frontend for the single-page portfolio site. Rendered on the
//! server by `folio-server` and hydrated in the browser.
//!
//! This crate contains the project catalog and profile data, the UI state
//! machines (gallery filter, detail modal, carousel, contact form), the
//! browser helpers, and the components that draw them.

pub mod app;
pub mod components;
pub mod data;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
