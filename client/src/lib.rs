//! # client
//!
//! Leptos + WASM front end for the photobooth page.
//!
//! This crate contains the booth page, the polaroid and modal components,
//! page state, the relay and gallery network clients, and the browser
//! glue (camera, pointer, clock, localStorage). Card rules live in the
//! platform-free `booth` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
