//! # newsdesk-enhancer
//!
//! Leptos + WASM enhancements for the server-rendered news listing page:
//! staggered card fade-in, persisted light/dark theme, relative publish
//! times, broken-image fallbacks, the market ticker strip, the trending
//! list, and search query cleanup.
//!
//! Decision logic lives in `util` and is tested natively. The `hydrate`
//! feature adds the browser wiring in `enhancer` and the WASM entry point.

pub mod components;
pub mod config;
pub mod enhancer;
pub mod error;
pub mod util;

pub use config::EnhancerConfig;
pub use error::EnhanceError;

/// WASM entry point: install logging and enhance the page once it is ready.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&err.to_string().into());
    }
    if let Err(err) = enhancer::run_when_ready() {
        log::warn!("page enhancer not started: {err}");
    }
}
