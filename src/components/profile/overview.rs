//! Overview tab: "about me", top answers and top questions.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::{list_group, list_item, object_href};
use crate::constants::ANSWER_ACCEPTED;
use crate::dom_utils;
use crate::i18n::t;
use crate::models::{Profile, TopSummary};

pub fn render(
    document: &Document,
    profile: Option<&Profile>,
    top: Option<&TopSummary>,
) -> Result<Element, JsValue> {
    let root = dom_utils::element(document, "div", "profile-overview", None)?;

    let el = dom_utils::element(document, "h5", "mb-3", Some(&t("personal.about_me")))?;
    root.append_child(&el)?;
    let bio_html = profile.map(|p| p.bio_html.as_str()).unwrap_or_default();
    let about = dom_utils::element(document, "div", "about-me", None)?;
    if bio_html.trim().is_empty() {
        about.set_text_content(Some(&t("personal.about_me_empty")));
    } else {
        // Sanitised server-side.
        about.set_inner_html(bio_html);
    }
    root.append_child(&about)?;

    let columns = dom_utils::element(document, "div", "row", None)?;

    let answers_col = dom_utils::element(document, "div", "col-md-6", None)?;
    let el = dom_utils::element(document, "h5", "mb-3", Some(&t("personal.top_answers")))?;
    answers_col.append_child(&el)?;
    let answers = list_group(document)?;
    for item in top.map(|t| t.answer.as_slice()).unwrap_or_default() {
        let row = list_item(document)?;
        let href = object_href(&item.question_id, &item.question_info.url_title, &item.answer_id);
        let link = dom_utils::route_link(document, &href, "text-truncate", &item.question_info.title)?;
        row.append_child(&link)?;
        let badge = vote_badge(document, item.vote_count, item.accepted == ANSWER_ACCEPTED)?;
        row.append_child(&badge)?;
        answers.append_child(&row)?;
    }
    answers_col.append_child(&answers)?;
    columns.append_child(&answers_col)?;

    let questions_col = dom_utils::element(document, "div", "col-md-6", None)?;
    let el = dom_utils::element(document, "h5", "mb-3", Some(&t("personal.top_questions")))?;
    questions_col.append_child(&el)?;
    let questions = list_group(document)?;
    for item in top.map(|t| t.question.as_slice()).unwrap_or_default() {
        let row = list_item(document)?;
        let href = object_href(&item.question_id, &item.url_title, "");
        let link = dom_utils::route_link(document, &href, "text-truncate", &item.title)?;
        row.append_child(&link)?;
        let accepted = item.accepted_answer_id.parse::<u64>().is_ok_and(|id| id >= 1);
        let badge = vote_badge(document, item.vote_count, accepted)?;
        row.append_child(&badge)?;
        questions.append_child(&row)?;
    }
    questions_col.append_child(&questions)?;
    columns.append_child(&questions_col)?;

    root.append_child(&columns)?;
    Ok(root)
}

fn vote_badge(document: &Document, votes: i64, accepted: bool) -> Result<Element, JsValue> {
    let class = if accepted { "badge vote-badge accepted" } else { "badge vote-badge" };
    dom_utils::element(document, "span", class, Some(&votes.to_string()))
}
