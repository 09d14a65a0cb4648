use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::CSS_EMPTY_STATE;
use crate::dom_utils;
use crate::i18n::t;

/// "No content" placeholder; `key` selects the message.
pub fn render(document: &Document, key: &str) -> Result<Element, JsValue> {
    let wrapper = dom_utils::element(document, "div", CSS_EMPTY_STATE, None)?;
    let el = dom_utils::element(document, "p", "empty-text", Some(&t(key)))?;
    wrapper.append_child(&el)?;
    Ok(wrapper)
}
