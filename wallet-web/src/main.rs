//! Avalanche Fuji wallet connection page
//!
//! Client-side Leptos app that talks to the injected EIP-1193 wallet through
//! `window.ethereum` and drives [`lib_core::ConnectionController`].

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Wallet connection page starting");

    if let Err(e) = lib_core::config::init_config() {
        log::error!("Invalid build configuration, using Fuji defaults: {}", e);
    }

    hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading placeholder from index.html
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available, loading screen left in place");
        return;
    };

    let Some(loading) = document.get_element_by_id("leptos-loading") else {
        log::debug!("Loading element not found");
        return;
    };

    if let Some(html) = loading.dyn_ref::<HtmlElement>() {
        if let Err(e) = html.class_list().add_1("hidden") {
            log::warn!("Failed to add 'hidden' class: {:?}", e);
        }
    }
    loading.set_attribute("style", "display: none !important;").ok();
}
