//! # client
//!
//! Leptos + WASM front end for the session-authenticated API.
//!
//! The browser owns one [`session::AuthStateStore`] behind an `RwSignal`,
//! probes the authority once on mount, and routes between the home, login,
//! and signup screens. Cookies ride along with every request; the session
//! itself lives on the server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic and log hooks, then mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
