#![recursion_limit = "256"]

pub mod api;
pub mod catalog;
pub mod common;
pub mod frontend;
pub mod models;

/// WASM hydration entry point
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(frontend::App);
}
