//! # championship-client
//!
//! Leptos + WASM single-page client for the Campeonato de Trading website.
//! Public landing and auth pages plus trading pages gated behind the
//! session store, which hydrates once from `localStorage` and mediates
//! login/registration against the championship REST API.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
