//! Questions and bookmarks tabs.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::{list_group, list_item, object_href, time_label};
use crate::dom_utils;
use crate::i18n::t;
use crate::models::QuestionItem;
use crate::route::tag_path;

pub fn render(document: &Document, items: &[QuestionItem]) -> Result<Element, JsValue> {
    let group = list_group(document)?;
    for item in items {
        let row = list_item(document)?;
        let href = object_href(item.key(), &item.url_title, "");
        let link = dom_utils::route_link(document, &href, "question-title", &item.title)?;
        row.append_child(&link)?;

        let meta = dom_utils::element(document, "div", "question-meta small", None)?;
        let el = dom_utils::element(
            document,
            "span",
            "",
            Some(&format!("{} {}", item.vote_count, t("question.votes"))),
        )?;
        meta.append_child(&el)?;
        let answers_class = if item.has_accepted_answer() { "answers accepted" } else { "answers" };
        let el = dom_utils::element(
            document,
            "span",
            answers_class,
            Some(&format!("{} {}", item.answer_count, t("question.answers"))),
        )?;
        meta.append_child(&el)?;
        let time = time_label(document, item.created_at)?;
        meta.append_child(&time)?;
        row.append_child(&meta)?;

        if !item.tags.is_empty() {
            let tags = dom_utils::element(document, "div", "tag-list", None)?;
            for tag in &item.tags {
                let link = dom_utils::route_link(document, &tag_path(&tag.slug_name), "badge tag", &tag.display_name)?;
                tags.append_child(&link)?;
            }
            row.append_child(&tags)?;
        }

        group.append_child(&row)?;
    }
    Ok(group)
}
