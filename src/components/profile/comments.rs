use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::{list_group, list_item, object_href, time_label};
use crate::dom_utils;
use crate::models::CommentItem;
use crate::utils::{excerpt, strip_tags};

const COMMENT_EXCERPT: usize = 200;

pub fn render(document: &Document, items: &[CommentItem]) -> Result<Element, JsValue> {
    let group = list_group(document)?;
    for item in items {
        let row = list_item(document)?;
        let href = object_href(&item.question_id, &item.url_title, &item.answer_id);
        let link = dom_utils::route_link(document, &href, "comment-title", &item.title)?;
        row.append_child(&link)?;
        let text = excerpt(&strip_tags(&item.content), COMMENT_EXCERPT);
        let el = dom_utils::element(document, "p", "comment-excerpt small", Some(&text))?;
        row.append_child(&el)?;
        let time = time_label(document, item.created_at)?;
        row.append_child(&time)?;
        group.append_child(&row)?;
    }
    Ok(group)
}
