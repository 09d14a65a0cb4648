//! Order switch: the first few keys as a button group, the rest in a
//! "more" `<select>`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlSelectElement};

use crate::constants::{CSS_BTN_OUTLINE, CSS_BTN_OUTLINE_ACTIVE};
use crate::dom_utils;
use crate::i18n::t;
use crate::messages::Message;
use crate::pages::questions::view_model::QueryGroupModel;
use crate::state::dispatch_global_message;

thread_local! {
    /// Shared by every "more" select; the select itself carries the href.
    static ON_MORE_CHANGE: Closure<dyn FnMut(web_sys::Event)> = Closure::wrap(Box::new(|e: web_sys::Event| {
        let Some(select) = e.target().and_then(|target| target.dyn_into::<HtmlSelectElement>().ok()) else {
            return;
        };
        let href = select.value();
        if !href.is_empty() {
            dispatch_global_message(Message::Navigate(href));
        }
    }) as Box<dyn FnMut(_)>);
}

pub fn render(document: &Document, model: &QueryGroupModel) -> Result<Element, JsValue> {
    let group = dom_utils::element(document, "div", "btn-group query-group", None)?;
    group.set_attribute("role", "group")?;

    for option in &model.buttons {
        let class = if option.active { CSS_BTN_OUTLINE_ACTIVE } else { CSS_BTN_OUTLINE };
        let link = dom_utils::route_link(document, &option.href, class, &option.label)?;
        group.append_child(&link)?;
    }

    if !model.more.is_empty() {
        let select: HtmlSelectElement = document.create_element("select")?.dyn_into()?;
        let any_active = model.more.iter().any(|o| o.active);
        select.set_class_name(if any_active { "form-select active" } else { "form-select" });

        let placeholder = document.create_element("option")?;
        placeholder.set_text_content(Some(&t("question.more")));
        placeholder.set_attribute("value", "")?;
        if !any_active {
            placeholder.set_attribute("selected", "")?;
        }
        select.append_child(&placeholder)?;

        for option in &model.more {
            let el = document.create_element("option")?;
            el.set_attribute("value", &option.href)?;
            el.set_text_content(Some(&option.label));
            if option.active {
                el.set_attribute("selected", "")?;
            }
            select.append_child(&el)?;
        }

        ON_MORE_CHANGE.with(|cb| select.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref()))?;

        group.append_child(&select)?;
    }

    Ok(group)
}
