//! # client
//!
//! Leptos + WASM frontend for the tile editor.
//!
//! This crate contains the page, components, editor state, and the photo
//! listing fetch. It drives the `canvas` crate's manipulation engine from
//! DOM pointer events in the `TileCanvas` component.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
