//! Trippy landing page
//!
//! Single-page Leptos front end: hero, navigation, showcase cards and the
//! Gemini key dialog. Domain logic lives in the `shared` crate.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;
use utils::constants::LOADING_SCREEN_ID;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("Trippy landing page starting");

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading screen shipped in index.html
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("No document available, loading screen stays visible");
        return;
    };

    let Some(loading_element) = document.get_element_by_id(LOADING_SCREEN_ID) else {
        log::debug!("Loading element '{}' not found", LOADING_SCREEN_ID);
        return;
    };

    if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::warn!("Failed to add 'hidden' class: {:?}", e);
        }
    }

    // Also set display:none in case the stylesheet has not loaded yet
    if let Err(e) = loading_element.set_attribute("style", "display: none !important;") {
        log::warn!("Failed to hide loading screen: {:?}", e);
    }
}
