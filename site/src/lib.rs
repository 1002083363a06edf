//! # site
//!
//! Leptos frontend for the portfolio: the app shell and router, page
//! templates, shared presentational components, and the small amount of
//! client-side state the contact form needs. Rendered on the server with the
//! `ssr` feature and hydrated in the browser with `hydrate`.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
