//! Inline alerts: the account-status notice and the list load failure.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::constants::{ATTR_TYPE, BUTTON_TYPE_BUTTON, CSS_ALERT_DANGER, CSS_ALERT_WARNING, CSS_BTN_LINK};
use crate::dom_utils;
use crate::i18n::t;
use crate::messages::Message;
use crate::state::dispatch_global_message;

thread_local! {
    /// Every retry button shares this listener.
    static RETRY_HANDLER: Closure<dyn FnMut(web_sys::Event)> = Closure::wrap(Box::new(|_e: web_sys::Event| {
        dispatch_global_message(Message::RetryProfileList);
    }) as Box<dyn FnMut(_)>);
}

/// Non-fatal account status notice (suspended, deleted, …).
pub fn render_status(document: &Document, message: &str) -> Result<Element, JsValue> {
    let alert = dom_utils::element(document, "div", CSS_ALERT_WARNING, Some(message))?;
    alert.set_attribute("role", "alert")?;
    Ok(alert)
}

/// Load failure of the tab list, with a button that re-issues the fetch.
pub fn render_load_failed(document: &Document, detail: &str) -> Result<Element, JsValue> {
    let alert = dom_utils::element(document, "div", CSS_ALERT_DANGER, None)?;
    alert.set_attribute("role", "alert")?;
    let el = dom_utils::element(document, "span", "", Some(&t("personal.load_failed")))?;
    alert.append_child(&el)?;
    alert.set_attribute("title", detail)?;

    let retry = dom_utils::element(document, "button", CSS_BTN_LINK, Some(&t("personal.retry")))?;
    retry.set_attribute(ATTR_TYPE, BUTTON_TYPE_BUTTON)?;
    RETRY_HANDLER.with(|cb| retry.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref()))?;
    alert.append_child(&retry)?;

    Ok(alert)
}
