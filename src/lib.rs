//! # aleks-widget
//!
//! Leptos + WASM chat widget for the Aleks legal assistant API.
//!
//! The widget renders a conversation with the assistant, a composer, and a
//! modal form for filling document templates the assistant offers. All
//! behavior is expressed as transitions on plain state structs (`state`)
//! that components wrap in signals; `net` talks to the HTTP API.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the widget into the host page.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    util::mount::mount_widget(config::WidgetConfig::default());
}
