use std::collections::HashMap;

use serde::de::DeserializeOwned;
use url::form_urlencoded;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{
    AnswerItem, ApiEnvelope, BadgeAward, CommentItem, ListPayload, Page, Profile, QuestionItem,
    ReputationItem, SessionUser, TabRecords, TopSummary, VoteItem,
};
use crate::route::PageQuery;
use crate::tabs::{ProfileTab, SubView};

/// Input of the per-tab list fetch.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListQuery {
    pub username: String,
    pub page: u32,
    pub page_size: u32,
    pub order: String,
}

/// Answers with `code == 200` (or no code at all) carry their payload in
/// `data`.
const ENVELOPE_OK: i64 = 200;

// REST API client for the forum backend
pub struct ApiClient;

impl ApiClient {
    fn config() -> ApiConfig {
        super::api_config()
    }

    // -------------------------------------------------------------------
    // Profile page
    // -------------------------------------------------------------------

    pub async fn fetch_profile_by_username(username: &str) -> Result<Profile, ApiError> {
        let body = Self::fetch_json(&profile_info_url(&Self::config(), username)).await?;
        decode_envelope(&body)
    }

    /// `tab_name` only keys the caller's cache; the backend returns the same
    /// highlights for every tab.
    pub async fn fetch_top_summary(username: &str, tab_name: &str) -> Result<TopSummary, ApiError> {
        debug_log!("Fetching top summary for {} ({})", username, tab_name);
        let body = Self::fetch_json(&top_summary_url(&Self::config(), username)).await?;
        decode_envelope(&body)
    }

    /// Page of `tab`'s records, keyed by the tab's name.  Tabs without a list
    /// endpoint resolve to an empty map without a request.
    pub async fn fetch_list_by_tab(
        query: &ListQuery,
        tab: ProfileTab,
    ) -> Result<HashMap<String, ListPayload>, ApiError> {
        let Some(url) = tab_list_url(&Self::config(), query, tab) else {
            return Ok(HashMap::new());
        };
        let body = Self::fetch_json(&url).await?;
        let payload = decode_tab_list(tab.spec().view, &body)?;
        Ok(HashMap::from([(tab.slug().to_string(), payload)]))
    }

    // -------------------------------------------------------------------
    // Question list
    // -------------------------------------------------------------------

    pub async fn fetch_questions(query: &PageQuery, page_size: u32) -> Result<Page<QuestionItem>, ApiError> {
        let body = Self::fetch_json(&question_page_url(&Self::config(), query, page_size)).await?;
        decode_envelope(&body)
    }

    // -------------------------------------------------------------------
    // Session
    // -------------------------------------------------------------------

    /// The signed-in user (`/user/info`).  Fails with `Unauthorized` when no
    /// valid token is stored.
    pub async fn fetch_logged_user() -> Result<SessionUser, ApiError> {
        let url = Self::config().url("/user/info");
        let body = Self::fetch_json(&url).await?;
        decode_envelope(&body)
    }

    // Helper function to make GET requests; returns the raw body.
    pub async fn fetch_json(url: &str) -> Result<String, ApiError> {
        use web_sys::{Request, RequestCredentials, RequestInit, RequestMode, Response};

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);
        opts.set_credentials(RequestCredentials::Include);

        let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(js_err)?;
        if let Some(token) = crate::storage::load_access_token() {
            request
                .headers()
                .set("Authorization", &token)
                .map_err(js_err)?;
        }

        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_err)?;
        let resp: Response = resp_value.dyn_into().map_err(js_err)?;

        if !resp.ok() {
            return Err(ApiError::from_status(resp.status()));
        }

        let text = JsFuture::from(resp.text().map_err(js_err)?)
            .await
            .map_err(js_err)?;
        text.as_string()
            .ok_or_else(|| ApiError::Decode("response body is not text".into()))
    }
}

/// `fetch` rejects with a `TypeError`; keep its message.
fn js_err(e: wasm_bindgen::JsValue) -> ApiError {
    let msg = e
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| e.as_string())
        .unwrap_or_else(|| format!("{:?}", e));
    ApiError::Network(msg)
}

// ---------------------------------------------------------------------------
// URL builders
// ---------------------------------------------------------------------------

fn with_params(base: String, params: &[(&str, &str)]) -> String {
    let mut ser = form_urlencoded::Serializer::new(String::new());
    for (k, v) in params {
        ser.append_pair(k, v);
    }
    format!("{}?{}", base, ser.finish())
}

pub fn profile_info_url(cfg: &ApiConfig, username: &str) -> String {
    with_params(cfg.url("/personal/user/info"), &[("username", username)])
}

pub fn top_summary_url(cfg: &ApiConfig, username: &str) -> String {
    with_params(cfg.url("/personal/qa/top"), &[("username", username)])
}

pub fn tab_list_url(cfg: &ApiConfig, query: &ListQuery, tab: ProfileTab) -> Option<String> {
    let spec = tab.spec();
    let endpoint = spec.endpoint?;
    if spec.view == SubView::Badges {
        return Some(with_params(cfg.url(endpoint), &[("username", &query.username)]));
    }
    Some(with_params(
        cfg.url(endpoint),
        &[
            ("username", &query.username),
            ("order", &query.order),
            ("page", &query.page.to_string()),
            ("page_size", &query.page_size.to_string()),
        ],
    ))
}

pub fn question_page_url(cfg: &ApiConfig, query: &PageQuery, page_size: u32) -> String {
    with_params(
        cfg.url("/question/page"),
        &[
            ("order", &query.order),
            ("page", &query.page.to_string()),
            ("page_size", &page_size.to_string()),
        ],
    )
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Unwrap `{code, msg, data}`.  A success envelope without data means the
/// resource does not exist.
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let env: ApiEnvelope<T> = serde_json::from_str(body)?;
    if env.code != 0 && env.code != ENVELOPE_OK {
        let msg = if env.msg.is_empty() { env.reason } else { env.msg };
        return Err(ApiError::Api { code: env.code, msg });
    }
    env.data.ok_or(ApiError::NotFound)
}

fn decode_page<T: DeserializeOwned>(body: &str) -> Result<(u64, Vec<T>), ApiError> {
    let page: Page<T> = decode_envelope(body)?;
    Ok((page.count, page.list))
}

/// Decode a tab's list response into the records its sub-view renders.
pub fn decode_tab_list(view: SubView, body: &str) -> Result<ListPayload, ApiError> {
    let (count, list) = match view {
        SubView::Overview => (0, TabRecords::None),
        SubView::DefaultList => {
            let (count, list) = decode_page::<QuestionItem>(body)?;
            (count, TabRecords::Questions(list))
        }
        SubView::Answers => {
            let (count, list) = decode_page::<AnswerItem>(body)?;
            (count, TabRecords::Answers(list))
        }
        SubView::Reputation => {
            let (count, list) = decode_page::<ReputationItem>(body)?;
            (count, TabRecords::Reputation(list))
        }
        SubView::Comments => {
            let (count, list) = decode_page::<CommentItem>(body)?;
            (count, TabRecords::Comments(list))
        }
        SubView::Votes => {
            let (count, list) = decode_page::<VoteItem>(body)?;
            (count, TabRecords::Votes(list))
        }
        SubView::Badges => {
            // Awards are not paginated: a bare array.
            let list: Vec<BadgeAward> = decode_envelope(body)?;
            (list.len() as u64, TabRecords::Badges(list))
        }
    };
    Ok(ListPayload { count, list })
}
