use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::{list_group, list_item, object_href, time_label};
use crate::constants::CSS_TEXT_SECONDARY;
use crate::dom_utils;
use crate::models::ReputationItem;

/// `+10` / `-2` / `0`.
pub fn signed(reputation: i64) -> String {
    if reputation > 0 {
        format!("+{}", reputation)
    } else {
        reputation.to_string()
    }
}

pub fn render(document: &Document, items: &[ReputationItem]) -> Result<Element, JsValue> {
    let group = list_group(document)?;
    for item in items {
        let row = list_item(document)?;
        row.class_list().add_1("d-flex")?;

        let class = if item.reputation < 0 { "reputation-delta negative" } else { "reputation-delta" };
        let el = dom_utils::element(document, "span", class, Some(&signed(item.reputation)))?;
        row.append_child(&el)?;

        let body = dom_utils::element(document, "div", "", None)?;
        let el = dom_utils::element(document, "span", CSS_TEXT_SECONDARY, Some(&item.rank_type))?;
        body.append_child(&el)?;
        let href = object_href(&item.question_id, &item.url_title, &item.answer_id);
        let link = dom_utils::route_link(document, &href, "reputation-title", &item.title)?;
        body.append_child(&link)?;
        row.append_child(&body)?;
        let time = time_label(document, item.created_at)?;
        row.append_child(&time)?;

        group.append_child(&row)?;
    }
    Ok(group)
}
