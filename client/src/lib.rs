//! # client
//!
//! Leptos + WASM front-end for managing horses and their owners.
//!
//! This crate contains pages, components, view state, and the REST client
//! for the horse/owner backend. The `server` crate renders it with the `ssr`
//! feature; the browser hydrates it with the `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
