//! "{count} {label}" header above a profile list, with the newest / score
//! switch on sortable tabs.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{CSS_BTN_OUTLINE, CSS_BTN_OUTLINE_ACTIVE};
use crate::dom_utils;
use crate::i18n::{t, t_with};
use crate::pages::profile::view_model::ListHead;

pub fn render(document: &Document, head: &ListHead) -> Result<Element, JsValue> {
    let row = dom_utils::element(document, "div", "list-head d-flex", None)?;
    let title = t_with(
        "personal.list_count",
        &[("count", &head.count.to_string()), ("label", &t(head.label_key))],
    );
    let el = dom_utils::element(document, "h5", "list-head-title", Some(&title))?;
    row.append_child(&el)?;

    if !head.sort.is_empty() {
        let group = dom_utils::element(document, "div", "btn-group", None)?;
        group.set_attribute("role", "group")?;
        for link in &head.sort {
            let class = if link.active { CSS_BTN_OUTLINE_ACTIVE } else { CSS_BTN_OUTLINE };
            let label = t(&format!("personal.{}", link.order));
            let link_el = dom_utils::route_link(document, &link.href, class, &label)?;
            group.append_child(&link_el)?;
        }
        row.append_child(&group)?;
    }

    Ok(row)
}
