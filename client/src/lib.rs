//! # client
//!
//! Leptos + WASM frontend for the classboard school-administration
//! dashboard. Contains pages, components (tables, modal forms, chart and
//! calendar widgets), application state, and the HTTP layer that talks to
//! the school REST backend.
//!
//! Entity records, projections, and validation live in the shared
//! `records` crate so they stay testable without a browser.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
