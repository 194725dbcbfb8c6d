//! # page-ui
//!
//! Leptos + WASM helpers for server-rendered pages: collapsible accordion
//! sections whose open/closed state is persisted to `localStorage` and
//! reconciled against server defaults on every page load, a help modal, a
//! profile dropdown, and range sliders with a live value readout.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Root component and page-load hook |
//! | [`state`] | Browser-free state models (accordion store, modal, dropdown) |
//! | [`util`] | Storage capability, slider formatting, DOM glue |
//! | [`components`] | Leptos views wired to the state models |
//! | [`config`] | Build-time storage namespace and log level |

pub mod app;
pub mod components;
pub mod config;
pub mod state;
pub mod util;

/// Runs when the WASM module is instantiated: panic hook, console logging,
/// then mounts [`app::App`], which reconciles the accordion for this page view.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = config::UiConfig::from_build_env();
    if let Err(err) = console_log::init_with_level(config.log_level.into()) {
        leptos::logging::warn!("console logging unavailable: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
