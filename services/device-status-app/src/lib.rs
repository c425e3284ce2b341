//! Device Status Dashboard - Leptos frontend
//!
//! Client-side device list and detail views over an in-memory store owned by
//! the root component.

pub mod api;
pub mod app;
pub mod clock;
pub mod components;

pub use app::App;

/// Entry point for the WASM client
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    leptos::mount::mount_to_body(App);
}
