// src/pages/questions/mod.rs
//
// Global question list: `/questions?page=&order=`.

pub mod view_model;

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::components::{alert, empty, pagination, query_group, question_list};
use crate::constants::ID_QUESTIONS_CONTAINER;
use crate::dom_utils;
use crate::route::PageQuery;
use crate::state::APP_STATE;

use self::view_model::compose;

pub fn mount_questions(document: &Document, query: &PageQuery) -> Result<(), JsValue> {
    let container = dom_utils::fresh_page_root(document, ID_QUESTIONS_CONTAINER)?;
    container.set_class_name("questions-page pt-4 mb-5");

    APP_STATE.with(|state| -> Result<(), JsValue> {
        let state = state.borrow();
        let vm = compose(query, &state.question_list);

        document.set_title(&vm.heading);

        let head = dom_utils::element(document, "div", "mb-3 d-flex flex-wrap justify-content-between", None)?;
        let el = dom_utils::element(document, "h5", "fs-5 text-nowrap", Some(&vm.heading))?;
        head.append_child(&el)?;
        let sort = query_group::render(document, &vm.query_group)?;
        head.append_child(&sort)?;
        container.append_child(&head)?;

        if vm.show_skeleton {
            let skeleton = question_list::render_skeleton(document)?;
            container.append_child(&skeleton)?;
        } else {
            let cards = question_list::render_cards(document, &vm.cards)?;
            container.append_child(&cards)?;
        }

        if let Some(error) = vm.error {
            let status = alert::render_status(document, &error.to_string())?;
            container.append_child(&status)?;
        }
        if vm.show_empty {
            let empty_state = empty::render(document, "common.empty")?;
            container.append_child(&empty_state)?;
        }
        if let Some(model) = &vm.pagination {
            let wrapper = dom_utils::element(document, "div", "mt-4 mb-2 d-flex justify-content-center", None)?;
            let pager = pagination::render(document, model)?;
            wrapper.append_child(&pager)?;
            container.append_child(&wrapper)?;
        }
        Ok(())
    })
}

pub fn unmount_questions(document: &Document) {
    dom_utils::hide_page_root(document, ID_QUESTIONS_CONTAINER);
}
