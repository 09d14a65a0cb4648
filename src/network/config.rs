/// API route configuration
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    /// Same-origin configuration: every request path is relative
    /// (`/answer/api/v1/...`).  This is what a bundle served by the forum
    /// backend itself wants; dev servers on another port must call
    /// `init_api_config_js()` or build with `API_BASE_URL` set.
    fn default() -> Self {
        Self {
            base_url: String::new(),
        }
    }
}

impl ApiConfig {
    /// Create a new ApiConfig from the API_BASE_URL environment variable
    pub fn new() -> Result<Self, &'static str> {
        if let Some(url) = option_env!("API_BASE_URL") {
            Ok(Self::from_url(url))
        } else {
            Err("API_BASE_URL environment variable is not set")
        }
    }

    /// Create a new ApiConfig from a URL string
    pub fn from_url(url: &str) -> Self {
        Self {
            base_url: url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL for all API calls
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a path below the API prefix, e.g. `url("/personal/user/info")`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, crate::constants::API_PREFIX, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_same_origin() {
        assert_eq!(ApiConfig::default().url("/x"), "/answer/api/v1/x");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let cfg = ApiConfig::from_url("http://localhost:9080/ ");
        assert_eq!(cfg.base_url(), "http://localhost:9080");
        assert_eq!(
            cfg.url("/personal/user/info"),
            "http://localhost:9080/answer/api/v1/personal/user/info"
        );
    }
}
