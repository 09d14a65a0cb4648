//! Profile navigation bar.
//!
//! One `<a class="tab-button">` per nav entry, in registry order.  Links are
//! regular in-app routes (`data-route`), so a click is handled by the router
//! like any other navigation; keyboard support moves focus with the arrow
//! keys and follows the focused link on Enter / Space.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

use crate::dom_utils;
use crate::i18n::t;
use crate::pages::profile::view_model::NavTab;

// Thread-local storage for keyboard event handlers to prevent memory leaks
thread_local! {
    static TAB_KEYBOARD_HANDLERS: RefCell<Vec<(String, Closure<dyn FnMut(KeyboardEvent)>)>> = RefCell::new(Vec::new());
}

/// Build `<nav class="tab-container">` with one link per entry.
pub fn build_tab_bar(document: &Document, id: &str, tabs: &[NavTab]) -> Result<Element, JsValue> {
    let container = dom_utils::element(document, "nav", "tab-container", None)?;
    container.set_id(id);

    for entry in tabs {
        let link = dom_utils::route_link(document, &entry.href, "", &t(entry.label_key))?;
        if entry.active {
            dom_utils::set_active(&link);
            link.set_attribute("aria-selected", "true")?;
        } else {
            dom_utils::set_inactive(&link);
        }
        container.append_child(&link)?;
    }

    add_keyboard_navigation(&container, id)?;
    Ok(container)
}

/// Arrow keys move focus between tabs; Enter / Space follow the focused one.
pub fn add_keyboard_navigation(container: &Element, container_id: &str) -> Result<(), JsValue> {
    // Remove any existing handler for this container
    remove_keyboard_navigation(container_id);

    let links = tab_links(container);
    if links.is_empty() {
        return Ok(());
    }

    let active = links
        .iter()
        .position(|l| l.get_attribute("aria-selected").is_some())
        .unwrap_or(0);
    for (i, link) in links.iter().enumerate() {
        link.set_attribute("role", "tab")?;
        link.set_attribute("tabindex", if i == active { "0" } else { "-1" })?;
    }
    container.set_attribute("role", "tablist")?;

    let container_clone = container.clone();
    let keydown_handler = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        let key = event.key();
        if !matches!(key.as_str(), "ArrowLeft" | "ArrowRight" | "Enter" | " ") {
            return;
        }
        event.prevent_default();

        let Some(focused) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.active_element())
        else {
            return;
        };
        let focused: &web_sys::Node = focused.as_ref();
        let links = tab_links(&container_clone);
        let Some(current) = links.iter().position(|l| l.is_same_node(Some(focused))) else {
            return;
        };

        match key.as_str() {
            "ArrowLeft" => {
                let new_index = if current == 0 { links.len() - 1 } else { current - 1 };
                focus_tab(&links, new_index);
            }
            "ArrowRight" => focus_tab(&links, (current + 1) % links.len()),
            _ => links[current].click(),
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);

    container.add_event_listener_with_callback("keydown", keydown_handler.as_ref().unchecked_ref())?;

    TAB_KEYBOARD_HANDLERS.with(|handlers| {
        handlers
            .borrow_mut()
            .push((container_id.to_string(), keydown_handler));
    });

    Ok(())
}

/// Remove keyboard navigation for a specific tab container
pub fn remove_keyboard_navigation(container_id: &str) {
    TAB_KEYBOARD_HANDLERS.with(|handlers| {
        handlers.borrow_mut().retain(|(id, _)| id != container_id);
    });
}

fn tab_links(container: &Element) -> Vec<HtmlElement> {
    let children = container.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|child| child.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Focus one tab and make it the only tabbable one.
fn focus_tab(links: &[HtmlElement], index: usize) {
    for (i, link) in links.iter().enumerate() {
        if i == index {
            let _ = link.set_attribute("tabindex", "0");
            let _ = link.focus();
        } else {
            let _ = link.set_attribute("tabindex", "-1");
        }
    }
}
