//! localStorage persistence: the access token and a cached copy of the
//! session user so the profile page can gate "edit profile" before
//! `/user/info` answers.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::constants::{STORAGE_ACCESS_TOKEN, STORAGE_SESSION_USER};
use crate::models::SessionUser;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn load_access_token() -> Option<String> {
    local_storage()?
        .get_item(STORAGE_ACCESS_TOKEN)
        .ok()?
        .filter(|t| !t.is_empty())
}

pub fn load_session_user() -> Option<SessionUser> {
    let raw = local_storage()?.get_item(STORAGE_SESSION_USER).ok()??;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            crate::error_log!("Discarding corrupt cached session: {}", e);
            None
        }
    }
}

pub fn save_session_user(user: Option<&SessionUser>) -> Result<(), JsValue> {
    let storage = local_storage().ok_or_else(|| JsValue::from_str("localStorage unavailable"))?;
    match user {
        Some(user) => {
            let raw = serde_json::to_string(user).map_err(|e| JsValue::from_str(&e.to_string()))?;
            storage.set_item(STORAGE_SESSION_USER, &raw)
        }
        None => storage.remove_item(STORAGE_SESSION_USER),
    }
}
