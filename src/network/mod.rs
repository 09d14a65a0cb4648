//! Network layer: API configuration and the REST client.

pub mod api_client;
pub mod config;

pub use api_client::{ApiClient, ListQuery};
pub use config::ApiConfig;

use std::cell::RefCell;

thread_local! {
    static API_CONFIG: RefCell<Option<ApiConfig>> = RefCell::new(None);
}

/// Initialise from the compile-time `API_BASE_URL`.  Leaves the config unset
/// (same-origin) when the variable was not provided.
pub fn init_api_config() -> Result<(), &'static str> {
    let config = ApiConfig::new()?;
    set_api_config(config);
    Ok(())
}

pub fn set_api_config(config: ApiConfig) {
    API_CONFIG.with(|c| *c.borrow_mut() = Some(config));
}

/// Active configuration, falling back to same-origin.
pub fn api_config() -> ApiConfig {
    API_CONFIG.with(|c| c.borrow().clone().unwrap_or_default())
}
