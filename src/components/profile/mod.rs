//! Profile tab bodies.
//!
//! One module per [`SubView`]; `render_sub_view` is the only place that
//! branches on it, and the match is exhaustive.  A sub-view that is not
//! visible renders nothing.

pub mod answers;
pub mod badges;
pub mod comments;
pub mod default_list;
pub mod overview;
pub mod reputation;
pub mod votes;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{CSS_LIST_GROUP, CSS_LIST_ITEM, CSS_TEXT_SECONDARY};
use crate::dom_utils;
use crate::models::TabRecords;
use crate::pages::profile::view_model::ProfileViewModel;
use crate::route::{answer_path, question_path};
use crate::tabs::SubView;
use crate::utils::{format_time, now_secs};

pub fn render_sub_view(
    document: &Document,
    view: SubView,
    vm: &ProfileViewModel<'_>,
) -> Result<Option<Element>, JsValue> {
    if !vm.is_visible(view) {
        return Ok(None);
    }
    let el = match (view, vm.records) {
        (SubView::Overview, _) => overview::render(document, vm.profile, vm.top)?,
        (SubView::Answers, TabRecords::Answers(items)) => answers::render(document, items)?,
        (SubView::DefaultList, TabRecords::Questions(items)) => default_list::render(document, items)?,
        (SubView::Reputation, TabRecords::Reputation(items)) => reputation::render(document, items)?,
        (SubView::Comments, TabRecords::Comments(items)) => comments::render(document, items)?,
        (SubView::Votes, TabRecords::Votes(items)) => votes::render(document, items)?,
        (SubView::Badges, TabRecords::Badges(items)) => badges::render(document, items)?,
        // No records yet (loading / failed / empty): the page shows the
        // matching state below the list.
        (
            SubView::Answers
            | SubView::DefaultList
            | SubView::Reputation
            | SubView::Comments
            | SubView::Votes
            | SubView::Badges,
            _,
        ) => return Ok(None),
    };
    Ok(Some(el))
}

/// Link target for a record that points at a question or one of its answers.
pub fn object_href(question_id: &str, url_title: &str, answer_id: &str) -> String {
    if answer_id.is_empty() || answer_id == "0" {
        question_path(question_id, url_title)
    } else {
        answer_path(question_id, url_title, answer_id)
    }
}

fn list_group(document: &Document) -> Result<Element, JsValue> {
    dom_utils::element(document, "div", CSS_LIST_GROUP, None)
}

fn list_item(document: &Document) -> Result<Element, JsValue> {
    dom_utils::element(document, "div", CSS_LIST_ITEM, None)
}

fn time_label(document: &Document, ts: i64) -> Result<Element, JsValue> {
    let el = dom_utils::element(document, "span", CSS_TEXT_SECONDARY, Some(&format_time(ts, now_secs())))?;
    el.set_attribute("data-ts", &ts.to_string())?;
    Ok(el)
}
