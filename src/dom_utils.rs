//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Small wrappers for the show / hide / activate patterns and element
//! factories the page renderers share, so views don't sprinkle
//! `set_attribute("style", …)` and `create_element` boilerplate everywhere.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement};

use crate::constants::{
    ATTR_DATA_ROUTE, CSS_HIDDEN, CSS_TAB_BUTTON, CSS_TAB_BUTTON_ACTIVE, CSS_VISIBLE, ID_APP_CONTAINER,
};

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))
}

/// Swap the `hidden` class for `visible`.
pub fn show(el: &Element) {
    let _ = el.class_list().remove_1(CSS_HIDDEN);
    let _ = el.class_list().add_1(CSS_VISIBLE);
}

/// Hide the element by toggling CSS classes.
pub fn hide(el: &Element) {
    let _ = el.class_list().remove_1(CSS_VISIBLE);
    let _ = el.class_list().add_1(CSS_HIDDEN);
}

/// Mark a tab button as the active one.
pub fn set_active(btn: &Element) {
    btn.set_class_name(CSS_TAB_BUTTON_ACTIVE);
}

pub fn set_inactive(btn: &Element) {
    btn.set_class_name(CSS_TAB_BUTTON);
}

pub fn clear_children(el: &Element) {
    while let Some(child) = el.first_child() {
        let _ = el.remove_child(&child);
    }
}

/// `<tag class="…">` with optional text content.
pub fn element(document: &Document, tag: &str, class: &str, text: Option<&str>) -> Result<Element, JsValue> {
    let el = document.create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    if let Some(text) = text {
        el.set_text_content(Some(text));
    }
    Ok(el)
}

/// In-app anchor.  The router intercepts clicks on anything carrying
/// `data-route` and turns them into `Message::Navigate`.
pub fn route_link(document: &Document, href: &str, class: &str, text: &str) -> Result<Element, JsValue> {
    let a = element(document, "a", class, Some(text))?;
    a.set_attribute("href", href)?;
    a.set_attribute(ATTR_DATA_ROUTE, "")?;
    Ok(a)
}

/// Return the page root `#id` (created inside `#app-container`, or `<body>`
/// as a fallback), emptied and ready for a fresh render.
pub fn fresh_page_root(document: &Document, id: &str) -> Result<Element, JsValue> {
    let root = match document.get_element_by_id(id) {
        Some(el) => el,
        None => {
            let el = document.create_element("div")?;
            el.set_id(id);
            let parent: Element = match document.get_element_by_id(ID_APP_CONTAINER) {
                Some(app) => app,
                None => document
                    .body()
                    .ok_or_else(|| JsValue::from_str("No body"))?
                    .unchecked_into(),
            };
            parent.append_child(&el)?;
            el
        }
    };
    clear_children(&root);
    show(&root);
    Ok(root)
}

/// Hide the page root `#id` if it was ever mounted.
pub fn hide_page_root(document: &Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        clear_children(&el);
        hide(&el);
    }
}

/// Focus the `<input id=…>` and select its text.
pub fn focus_and_select(id: &str) {
    let input = document()
        .ok()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok());
    if let Some(input) = input {
        let _ = input.focus();
        input.select();
    }
}
