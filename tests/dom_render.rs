//! Browser tests for the DOM renderers.
//!
//! Run with: wasm-pack test --headless --chrome

#![cfg(target_arch = "wasm32")]

use std::collections::HashMap;

use wasm_bindgen_test::*;

use forum_frontend::constants::{
    ID_LINK_MODAL, ID_LINK_NAME_INPUT, ID_LINK_URL_INPUT, ID_PROFILE_CONTAINER, ID_PROFILE_NAV,
};
use forum_frontend::messages::{Command, Message};
use forum_frontend::models::{ListPayload, Profile, TabRecords, TopSummary};
use forum_frontend::route::Route;
use forum_frontend::state::{LinkDialogState, APP_STATE};
use forum_frontend::update::update;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    forum_frontend::dom_utils::document().expect("document")
}

/// Route the shared state to `target` and answer its fetches.
fn load_profile(target: &str, list: ListPayload) -> Route {
    APP_STATE.with(|state| {
        let mut state = state.borrow_mut();
        let commands = update(&mut state, Message::Navigate(target.to_string()));
        let slug = match &state.route {
            Route::Profile(r) => r.tab.name().to_string(),
            _ => String::new(),
        };
        for c in commands {
            let msg = match c {
                Command::FetchProfile { token, .. } => Message::ProfileLoaded {
                    token,
                    result: Ok(Profile {
                        username: "alice".into(),
                        display_name: "Alice".into(),
                        rank: 10,
                        ..Profile::default()
                    }),
                },
                Command::FetchTopSummary { token, .. } => {
                    Message::TopSummaryLoaded { token, result: Ok(TopSummary::default()) }
                }
                Command::FetchProfileList { token, .. } => Message::ProfileListLoaded {
                    token,
                    result: Ok(HashMap::from([(slug.clone(), list.clone())])),
                },
                _ => continue,
            };
            update(&mut state, msg);
        }
        state.route.clone()
    })
}

#[wasm_bindgen_test]
fn profile_page_renders_nav_and_title() {
    let route = load_profile("/users/alice", ListPayload::empty());
    let Route::Profile(route) = route else { panic!("not a profile route") };
    let doc = document();
    forum_frontend::pages::profile::mount_profile(&doc, &route).expect("mount");

    assert_eq!(doc.title(), "Alice (alice)");
    let nav = doc.get_element_by_id(ID_PROFILE_NAV).expect("nav");
    // Votes is hidden from visitors.
    assert_eq!(nav.children().length(), 7);
    let active = nav.query_selector(".active").unwrap().expect("active tab");
    assert_eq!(active.get_attribute("href").as_deref(), Some("/users/alice"));
}

#[wasm_bindgen_test]
fn empty_list_renders_empty_state() {
    let list = ListPayload { count: 0, list: TabRecords::Comments(Vec::new()) };
    let Route::Profile(route) = load_profile("/users/alice/comments", list) else {
        panic!("not a profile route")
    };
    let doc = document();
    forum_frontend::pages::profile::mount_profile(&doc, &route).expect("mount");
    let container = doc.get_element_by_id(ID_PROFILE_CONTAINER).expect("container");
    assert!(container.query_selector(".empty-state").unwrap().is_some());
    assert!(container.query_selector(".pagination").unwrap().is_none());

    forum_frontend::pages::profile::unmount_profile(&doc);
    assert_eq!(container.children().length(), 0);
}

#[wasm_bindgen_test]
fn link_dialog_marks_invalid_url() {
    let doc = document();
    let dialog = LinkDialogState {
        visible: true,
        url: forum_frontend::state::LinkField { value: String::new(), invalid: true },
        ..LinkDialogState::default()
    };
    forum_frontend::components::link_tool::render_dialog(&doc, &dialog).expect("render");
    let input = doc.get_element_by_id(ID_LINK_URL_INPUT).expect("url input");
    assert!(input.class_list().contains("is-invalid"));

    forum_frontend::components::link_tool::render_dialog(&doc, &LinkDialogState::default()).expect("render");
    let modal = doc.get_element_by_id(ID_LINK_MODAL).expect("modal");
    assert!(modal.class_list().contains("hidden"));
}

#[wasm_bindgen_test]
fn link_dialog_is_built_once_and_updated_in_place() {
    use forum_frontend::components::link_tool::render_dialog;
    use forum_frontend::state::LinkField;
    use wasm_bindgen::JsCast;

    let doc = document();
    let first = LinkDialogState {
        visible: true,
        url: LinkField { value: "https://a.io".into(), invalid: true },
        name: LinkField { value: "A".into(), invalid: false },
    };
    render_dialog(&doc, &first).expect("render");
    let url = doc.get_element_by_id(ID_LINK_URL_INPUT).expect("url input");
    let buttons = doc.get_element_by_id(ID_LINK_MODAL).expect("modal").query_selector_all("button").unwrap().length();

    let second = LinkDialogState {
        visible: true,
        url: LinkField { value: "https://b.io".into(), invalid: false },
        name: LinkField { value: "B".into(), invalid: false },
    };
    render_dialog(&doc, &second).expect("render");

    let again = doc.get_element_by_id(ID_LINK_URL_INPUT).expect("url input");
    let again_node: &web_sys::Node = again.as_ref();
    assert!(url.is_same_node(Some(again_node)));
    let url: web_sys::HtmlInputElement = again.dyn_into().unwrap();
    assert_eq!(url.value(), "https://b.io");
    assert!(!url.class_list().contains("is-invalid"));
    assert!(url.get_attribute("aria-invalid").is_none());
    let name: web_sys::HtmlInputElement = doc.get_element_by_id(ID_LINK_NAME_INPUT).unwrap().dyn_into().unwrap();
    assert_eq!(name.value(), "B");
    let modal = doc.get_element_by_id(ID_LINK_MODAL).expect("modal");
    assert_eq!(modal.query_selector_all("button").unwrap().length(), buttons);
}
