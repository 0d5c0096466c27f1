//! Event binding.
//!
//! One click listener per action button. Each click spawns the action on the
//! browser's event loop via `wasm_bindgen_futures::spawn_local`; the
//! controller disables the button until the response lands.

use std::rc::Rc;

use gloo_console::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wl_form_core::{Action, ActionOutcome, WishlistController};

use crate::api::FetchClient;
use crate::dom::Elements;
use crate::view::DomView;

pub type Controller = WishlistController<FetchClient, DomView>;

/// Helper: attach async click handler that dispatches `$action`.
macro_rules! on_click_async {
    ($el:expr, $controller:expr, $action:expr) => {{
        let controller = Rc::clone(&$controller);
        let action = $action;
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            let controller = Rc::clone(&controller);
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = controller.dispatch(action).await;
                log_outcome(action, &outcome);
            });
        }) as Box<dyn FnMut(_)>);
        $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }};
}

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(els: &Elements, controller: Rc<Controller>) -> Result<(), JsValue> {
    for action in Action::ALL {
        on_click_async!(els.button(action), controller, action);
    }
    Ok(())
}

fn log_outcome(action: Action, outcome: &ActionOutcome) {
    match outcome {
        ActionOutcome::Failed(err) => warn!(format!("{} failed: {}", action, err)),
        ActionOutcome::Rejected(err) => debug!(format!("{} rejected: {}", action, err)),
        other => debug!(format!("{}: {:?}", action, other)),
    }
}
