//! # servicemarket-client
//!
//! Leptos + WASM frontend for the ServiceMarket marketplace, where customers
//! post service requests, workers quote on them, and administrators watch the
//! platform.
//!
//! The interesting part of this crate is `session`: bearer-token and user
//! persistence in `localStorage`, same-tab change notification, cross-tab
//! re-synchronization through the browser `storage` event, and the role gate
//! in front of every private route. Pages and components are thin views over
//! the REST backend in `net::api`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod session;
pub mod state;

/// Browser entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
