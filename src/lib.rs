//! iRDA-X landing page
//!
//! Marketing page for an AI vision-inspection service, built with Leptos:
//! server-rendered by axum and hydrated in the browser as WebAssembly.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
