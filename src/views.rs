// src/views.rs
//
// Picks the page for the current route and (re)mounts it.  Pages not
// selected by the route are hidden and emptied.
//
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::components::empty;
use crate::constants::ID_NOT_FOUND_CONTAINER;
use crate::dom_utils;
use crate::pages::profile::{mount_profile, unmount_profile};
use crate::pages::questions::{mount_questions, unmount_questions};
use crate::route::Route;
use crate::state::APP_STATE;

pub fn render_active_view() -> Result<(), JsValue> {
    let document = dom_utils::document()?;
    let route = APP_STATE.with(|state| state.borrow().route.clone());

    match &route {
        Route::Profile(profile_route) => {
            unmount_questions(&document);
            dom_utils::hide_page_root(&document, ID_NOT_FOUND_CONTAINER);
            mount_profile(&document, profile_route)
        }
        Route::Questions(query) => {
            unmount_profile(&document);
            dom_utils::hide_page_root(&document, ID_NOT_FOUND_CONTAINER);
            mount_questions(&document, query)
        }
        Route::NotFound(path) => {
            crate::debug_log!("No page for {}", path);
            unmount_profile(&document);
            unmount_questions(&document);
            render_not_found(&document)
        }
    }
}

fn render_not_found(document: &Document) -> Result<(), JsValue> {
    let container = dom_utils::fresh_page_root(document, ID_NOT_FOUND_CONTAINER)?;
    let not_found = empty::render(document, "common.not_found")?;
    container.append_child(&not_found)?;
    Ok(())
}
