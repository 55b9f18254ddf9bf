//! # client
//!
//! Leptos + WASM admin dashboard for the tenant portal.
//!
//! This crate contains the pages, components, browser-side token storage and
//! the `gloo-net` implementation of [`portal::PortalApi`]. Session and guard
//! semantics live in the `portal` crate; this crate wires them to signals,
//! routing and markup.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
