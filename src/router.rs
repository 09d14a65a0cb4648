//! Browser side of routing: reads `window.location`, listens for
//! back/forward and intercepts clicks on in-app links.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlAnchorElement, MouseEvent, PopStateEvent};

use crate::constants::ATTR_DATA_ROUTE;
use crate::messages::Message;
use crate::route::Route;
use crate::state::dispatch_global_message;

/// Route for the address bar as it is now.
pub fn current_route() -> Result<Route, JsValue> {
    let location = web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .location();
    let pathname = location.pathname()?;
    let search = location.search()?;
    Ok(Route::parse(&pathname, &search))
}

pub fn push_history(path: &str) {
    let result = web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))
        .and_then(|w| w.history())
        .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(path)));
    if let Err(e) = result {
        error_log!("pushState({}) failed: {:?}", path, e);
    }
}

pub fn install() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("No document"))?;

    let on_popstate = Closure::wrap(Box::new(move |_e: PopStateEvent| match current_route() {
        Ok(route) => dispatch_global_message(Message::RouteChanged(route)),
        Err(e) => error_log!("popstate: {:?}", e),
    }) as Box<dyn FnMut(_)>);
    window.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref())?;
    on_popstate.forget();

    // One delegated listener covers every link rendered now or later.
    let on_click = Closure::wrap(Box::new(move |e: MouseEvent| {
        if e.default_prevented() || e.button() != 0 || e.ctrl_key() || e.meta_key() || e.shift_key() || e.alt_key() {
            return;
        }
        let Some(anchor) = route_anchor(&e) else {
            return;
        };
        e.prevent_default();
        dispatch_global_message(Message::Navigate(format!("{}{}", anchor.pathname(), anchor.search())));
    }) as Box<dyn FnMut(_)>);
    document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    Ok(())
}

fn route_anchor(e: &MouseEvent) -> Option<HtmlAnchorElement> {
    let target: Element = e.target()?.dyn_into().ok()?;
    target
        .closest(&format!("a[{}]", ATTR_DATA_ROUTE))
        .ok()
        .flatten()?
        .dyn_into()
        .ok()
}
