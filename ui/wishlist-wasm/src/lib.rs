//! Wishlist WASM Frontend
//!
//! Browser binding of the wishlist form controller: resolves the form's DOM
//! elements, talks to the wishlist service over `fetch`, and wires one click
//! handler per action button.

pub mod api;
pub mod dom;
pub mod events;
pub mod view;

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wl_form_core::WishlistController;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init()
}

fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;

    let base = api::base_url();
    gloo_console::log!(format!(
        "wishlist api: {}",
        if base.is_empty() { "same origin" } else { base.as_str() }
    ));

    let controller = Rc::new(WishlistController::new(
        api::FetchClient::new(base),
        view::DomView::new(els.clone()),
    ));
    events::bind_events(&els, controller)
}
