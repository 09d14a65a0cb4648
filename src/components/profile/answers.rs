use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::{list_group, list_item, object_href, time_label};
use crate::dom_utils;
use crate::i18n::t;
use crate::models::AnswerItem;

pub fn render(document: &Document, items: &[AnswerItem]) -> Result<Element, JsValue> {
    let group = list_group(document)?;
    for item in items {
        let row = list_item(document)?;
        let href = object_href(&item.question_id, &item.question_info.url_title, &item.answer_id);
        let link = dom_utils::route_link(document, &href, "answer-title", &item.question_info.title)?;
        row.append_child(&link)?;

        let meta = dom_utils::element(document, "div", "answer-meta small", None)?;
        let class = if item.is_accepted() { "badge vote-badge accepted" } else { "badge vote-badge" };
        let el = dom_utils::element(document, "span", class, Some(&item.vote_count.to_string()))?;
        meta.append_child(&el)?;
        if item.is_accepted() {
            let el = dom_utils::element(document, "span", "accepted-label", Some(&t("personal.accepted")))?;
            meta.append_child(&el)?;
        }
        let time = time_label(document, item.create_time)?;
        meta.append_child(&time)?;
        row.append_child(&meta)?;

        group.append_child(&row)?;
    }
    Ok(group)
}
