use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlTextAreaElement};

#[macro_use]
pub mod macros;

pub mod command_executors;
pub mod components;
pub mod constants;
pub mod dom_utils;
pub mod editor;
pub mod error;
pub mod fetch;
pub mod i18n;
pub mod messages;
pub mod models;
pub mod network;
pub mod pages;
pub mod reducers;
pub mod route;
pub mod router;
pub mod session;
pub mod state;
pub mod storage;
pub mod tabs;
pub mod toast;
pub mod update;
pub mod utils;
pub mod views;

use crate::constants::ATTR_DATA_EDITOR;
use crate::messages::Message;
use crate::models::SessionUser;
use crate::session::{SessionAccessor, SESSION};
use crate::state::dispatch_global_message;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    // Same-origin unless the build baked in a base URL.
    if let Err(e) = network::init_api_config() {
        debug_log!("{}; using same-origin API", e);
    }

    // Components read the session through the accessor; the app state keeps a
    // snapshot that follows every change.
    SESSION.with(|s| {
        s.subscribe(std::rc::Rc::new(|user: Option<&SessionUser>| {
            dispatch_global_message(Message::SessionChanged(user.cloned()));
        }))
    });

    router::install()?;

    let document = dom_utils::document()?;
    attach_link_tools(&document)?;

    dispatch_global_message(Message::RouteChanged(router::current_route()?));

    // After the first route so the cached user re-renders the right page.
    command_executors::refresh_session_user();

    Ok(())
}

/// Add the link tool to every `<textarea data-md-editor>` on the page.
fn attach_link_tools(document: &Document) -> Result<(), JsValue> {
    let editors = document.query_selector_all(&format!("textarea[{}]", ATTR_DATA_EDITOR))?;
    for i in 0..editors.length() {
        let Some(textarea) = editors.item(i).and_then(|n| n.dyn_into::<HtmlTextAreaElement>().ok()) else {
            continue;
        };
        components::link_tool::attach(document, &textarea)?;
    }
    Ok(())
}

/// Point the API client at `url` (e.g. `"https://forum.example.com"`).
#[wasm_bindgen]
pub fn init_api_config_js(url: &str) {
    network::set_api_config(network::ApiConfig::from_url(url));
}

/// Overlay translations from i18next-style JSON; returns how many keys were
/// loaded.  Re-renders the current page.
#[wasm_bindgen]
pub fn load_translations_js(json: &str) -> Result<usize, JsValue> {
    let loaded = i18n::load_translations(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    command_executors::run(vec![messages::Command::RenderActiveView]);
    Ok(loaded)
}

/// Let the host page sign a user in or out (`null`).
#[wasm_bindgen]
pub fn set_session_user_js(user: JsValue) -> Result<(), JsValue> {
    let user: Option<SessionUser> = serde_wasm_bindgen::from_value(user)?;
    if let Err(e) = storage::save_session_user(user.as_ref()) {
        error_log!("Failed to persist session: {:?}", e);
    }
    SESSION.with(|s| s.set(user));
    Ok(())
}
