use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::{list_group, list_item, object_href, time_label};
use crate::dom_utils;
use crate::i18n::t;
use crate::models::VoteItem;

/// Label for a backend vote type (`vote_up`, `vote_down`, …).
pub fn vote_label(vote_type: &str) -> String {
    if vote_type.contains("down") {
        t("personal.downvote")
    } else if vote_type.contains("up") {
        t("personal.upvote")
    } else {
        vote_type.to_string()
    }
}

pub fn render(document: &Document, items: &[VoteItem]) -> Result<Element, JsValue> {
    let group = list_group(document)?;
    for item in items {
        let row = list_item(document)?;
        let el = dom_utils::element(document, "span", "vote-type badge", Some(&vote_label(&item.vote_type)))?;
        row.append_child(&el)?;
        let href = object_href(&item.question_id, &item.url_title, &item.answer_id);
        let link = dom_utils::route_link(document, &href, "vote-title", &item.title)?;
        row.append_child(&link)?;
        let time = time_label(document, item.created_at)?;
        row.append_child(&time)?;
        group.append_child(&row)?;
    }
    Ok(group)
}

#[cfg(test)]
mod tests {
    use super::vote_label;

    #[test]
    fn vote_types_are_labelled() {
        assert_eq!(vote_label("vote_up"), "upvote");
        assert_eq!(vote_label("vote_down"), "downvote");
        assert_eq!(vote_label("bounty"), "bounty");
    }
}
