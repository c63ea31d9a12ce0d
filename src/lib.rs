//! # briefly
//!
//! Leptos + WASM client for the Briefly audio news service. A signed-in user
//! submits a topic query with a narrator persona, receives a generated audio
//! briefing from the external Briefly API, and can browse and play past
//! briefings.
//!
//! This crate contains pages, components, application state, the REST client
//! for the external API, and the route guard evaluated by the `ssr` serving
//! binary before any page code runs.

pub mod app;
pub mod components;
pub mod guard;
pub mod net;
pub mod pages;
pub mod persona;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
