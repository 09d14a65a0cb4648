//! Typed failures for everything that crosses the network boundary.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// `fetch()` itself rejected (offline, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected HTTP status {status}")]
    Http { status: u16 },

    #[error("not signed in")]
    Unauthorized,

    #[error("resource not found")]
    NotFound,

    /// The backend answered with a non-success envelope.
    #[error("api error {code}: {msg}")]
    Api { code: i64, msg: String },

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx HTTP status.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            _ => ApiError::Http { status },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

impl From<ApiError> for JsValue {
    fn from(e: ApiError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
