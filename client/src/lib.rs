//! # client
//!
//! Leptos + WASM frontend for the social media content engine.
//!
//! The generator page collects a brand profile and content brief, posts them
//! to `/generate-post`, and renders the returned post into a preview card.

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
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
