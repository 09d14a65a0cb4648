//! Shared modal helper used by the editor dialogs.
//!
//! Keeps creation / show / hide logic in one place so dialogs don't
//! duplicate the same boilerplate.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom_utils;

/// Ensure a `<div id="{id}" class="modal">…` exists in the DOM and return it.
/// The returned element is the **backdrop** container.  A child `<div
/// class="modal-content">` is created (and returned) if missing so callers
/// can append their specific inner markup.
///
/// Returns `(backdrop, content)`.
pub fn ensure_modal(document: &Document, id: &str) -> Result<(Element, Element), JsValue> {
    let backdrop = match document.get_element_by_id(id) {
        Some(el) => el,
        None => {
            let el = document.create_element("div")?;
            el.set_id(id);
            el.set_class_name("modal");
            el.set_attribute("role", "dialog")?;
            el.set_attribute("aria-modal", "true")?;
            dom_utils::hide(&el);
            document
                .body()
                .ok_or_else(|| JsValue::from_str("No body"))?
                .append_child(&el)?;
            el
        }
    };

    let content = match backdrop.query_selector(".modal-content")? {
        Some(el) => el,
        None => {
            let el = document.create_element("div")?;
            el.set_class_name("modal-content");
            backdrop.append_child(&el)?;
            el
        }
    };

    Ok((backdrop, content))
}

pub fn show(modal_backdrop: &Element) {
    dom_utils::show(modal_backdrop);
}

pub fn hide(modal_backdrop: &Element) {
    dom_utils::hide(modal_backdrop);
}
