//! Question cards and the skeleton shown while a slow page loads.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::CSS_TEXT_SECONDARY;
use crate::dom_utils;
use crate::i18n::t;
use crate::pages::questions::view_model::QuestionCard;
use crate::route::tag_path;
use crate::utils::{format_time_with_prefix, now_secs};

const SKELETON_ROWS: usize = 6;

pub fn render_cards(document: &Document, cards: &[QuestionCard]) -> Result<Element, JsValue> {
    let row = dom_utils::element(document, "div", "row g-3", None)?;
    let now = now_secs();
    for card in cards {
        let col = dom_utils::element(document, "div", "col-12 col-md-6 col-lg-4", None)?;
        col.set_attribute("data-key", &card.key)?;
        let body = dom_utils::element(document, "div", "card h-100 card-body", None)?;

        let title = dom_utils::element(document, "h5", "text-wrap text-break", None)?;
        if card.pinned {
            let pin = dom_utils::element(document, "i", "bi bi-pin-fill me-1", None)?;
            pin.set_attribute("title", &t("btns.pinned"))?;
            title.append_child(&pin)?;
        }
        let title_link = dom_utils::route_link(document, &card.href, "link-dark", &card.title)?;
        title.append_child(&title_link)?;
        body.append_child(&title)?;

        let meta = dom_utils::element(document, "div", &format!("small mb-2 {}", CSS_TEXT_SECONDARY), None)?;
        let line = match &card.operator {
            Some(name) => format!("{} • {}", name, format_time_with_prefix(&card.time_prefix, card.time, now)),
            None => format_time_with_prefix(&card.time_prefix, card.time, now),
        };
        let el = dom_utils::element(document, "div", "", Some(&line))?;
        meta.append_child(&el)?;

        let counts = dom_utils::element(document, "div", "counts mt-2", None)?;
        let el = dom_utils::element(
            document,
            "span",
            "me-3",
            Some(&format!("{} {}", card.votes, t("question.votes"))),
        )?;
        counts.append_child(&el)?;
        let answers_class = if card.accepted { "me-3 text-success" } else { "me-3" };
        let el = dom_utils::element(
            document,
            "span",
            answers_class,
            Some(&format!("{} {}", card.answers, t("question.answers"))),
        )?;
        counts.append_child(&el)?;
        let el = dom_utils::element(
            document,
            "span",
            "",
            Some(&format!("{} {}", card.views, t("question.views"))),
        )?;
        counts.append_child(&el)?;
        meta.append_child(&counts)?;
        body.append_child(&meta)?;

        let tags = dom_utils::element(document, "div", "question-tags", None)?;
        for tag in &card.tags {
            let tag_link = dom_utils::route_link(document, &tag_path(&tag.slug_name), "badge tag m-1", &tag.display_name)?;
            tags.append_child(&tag_link)?;
        }
        body.append_child(&tags)?;

        col.append_child(&body)?;
        row.append_child(&col)?;
    }
    Ok(row)
}

pub fn render_skeleton(document: &Document) -> Result<Element, JsValue> {
    let row = dom_utils::element(document, "div", "row g-3 placeholder-glow", None)?;
    row.set_attribute("aria-busy", "true")?;
    for _ in 0..SKELETON_ROWS {
        let col = dom_utils::element(document, "div", "col-12 col-md-6 col-lg-4", None)?;
        let card = dom_utils::element(document, "div", "card h-100 card-body", None)?;
        let el = dom_utils::element(document, "span", "placeholder col-10 mb-2", None)?;
        card.append_child(&el)?;
        let el = dom_utils::element(document, "span", "placeholder col-6", None)?;
        card.append_child(&el)?;
        col.append_child(&card)?;
        row.append_child(&col)?;
    }
    Ok(row)
}
