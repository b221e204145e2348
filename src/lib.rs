//! # foorum
//!
//! Leptos + WASM client for the Foo-rum social feed.
//!
//! This crate contains the feed page, the sign-in and sign-up forms, and the
//! client-side session machinery behind them: a pure auth reducer, a static
//! credential verifier standing in for a backend, a `localStorage`
//! persistence adapter, and the `AuthSession` facade that ties them together.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook and console logger, then
/// mount the root component onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("mounting foorum client");
    leptos::mount::mount_to_body(app::App);
}
