//! URL ⇄ route mapping.
//!
//! Parsing is pure (path + search string in, [`Route`] out) so it runs in
//! native tests; `router.rs` feeds it from `window.location`.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use url::form_urlencoded;

use crate::constants::{DEFAULT_ORDER, DEFAULT_PAGE, PATH_QUESTIONS};
use crate::tabs::TabSelection;

/// Characters escaped when a username becomes a path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    Profile(ProfileRoute),
    Questions(PageQuery),
    NotFound(String),
}

/// `/users/{username}[/{tabName}]?page=&order=`
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileRoute {
    pub username: String,
    pub tab: TabSelection,
    pub query: PageQuery,
}

/// Pagination and ordering from the query string.  Page size is not part of
/// it: each page type fixes its own.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PageQuery {
    pub page: u32,
    pub order: String,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            order: DEFAULT_ORDER.to_string(),
        }
    }
}

impl PageQuery {
    pub fn from_search(search: &str) -> Self {
        let page = query_param(search, "page");
        let order = query_param(search, "order");
        Self {
            page: coerce_page(page.as_deref()),
            order: order
                .filter(|o| !o.is_empty())
                .unwrap_or_else(|| DEFAULT_ORDER.to_string()),
        }
    }
}

impl Route {
    pub fn parse(path: &str, search: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] | ["questions"] => Route::Questions(PageQuery::from_search(search)),
            // Account settings live outside this bundle.
            ["users", "settings", ..] => Route::NotFound(path.to_string()),
            ["users", username] => Route::Profile(ProfileRoute {
                username: decode_segment(username),
                tab: TabSelection::resolve(None),
                query: PageQuery::from_search(search),
            }),
            ["users", username, tab] => Route::Profile(ProfileRoute {
                username: decode_segment(username),
                tab: TabSelection::resolve(Some(tab)),
                query: PageQuery::from_search(search),
            }),
            _ => Route::NotFound(path.to_string()),
        }
    }
}

/// The address bar hands over percent-encoded segments.
fn decode_segment(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

/// First value of `key` in a `?a=b&c=d` string.
pub fn query_param(search: &str, key: &str) -> Option<String> {
    form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// `page` query value → page number.  Absent, non-numeric or < 1 falls back
/// to the first page; fractional values are truncated.  No upper bound.
pub fn coerce_page(raw: Option<&str>) -> u32 {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return DEFAULT_PAGE;
    };
    if let Ok(n) = raw.parse::<u32>() {
        return n.max(DEFAULT_PAGE);
    }
    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 1.0 => f.min(u32::MAX as f64) as u32,
        _ => DEFAULT_PAGE,
    }
}

// ---------------------------------------------------------------------------
// Path builders
// ---------------------------------------------------------------------------

pub fn user_tab_path(username: &str, tab: &str) -> String {
    let username = utf8_percent_encode(username, SEGMENT);
    if tab.is_empty() || tab == crate::constants::DEFAULT_TAB {
        format!("/users/{}", username)
    } else {
        format!("/users/{}/{}", username, tab)
    }
}

pub fn question_path(question_id: &str, url_title: &str) -> String {
    if url_title.is_empty() {
        format!("{}/{}", PATH_QUESTIONS, question_id)
    } else {
        format!("{}/{}/{}", PATH_QUESTIONS, question_id, url_title)
    }
}

pub fn answer_path(question_id: &str, url_title: &str, answer_id: &str) -> String {
    let slug = if url_title.is_empty() { "-" } else { url_title };
    format!("{}/{}/{}/{}", PATH_QUESTIONS, question_id, slug, answer_id)
}

pub fn tag_path(slug_name: &str) -> String {
    format!("/tags/{}", slug_name)
}

pub fn badge_path(badge_id: &str) -> String {
    format!("/badges/{}", badge_id)
}

/// `path?page=..&order=..`, leaving out values equal to their defaults.
pub fn with_query(path: &str, page: u32, order: &str) -> String {
    let mut ser = form_urlencoded::Serializer::new(String::new());
    if page > DEFAULT_PAGE {
        ser.append_pair("page", &page.to_string());
    }
    if !order.is_empty() && order != DEFAULT_ORDER {
        ser.append_pair("order", order);
    }
    let query = ser.finish();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::ProfileTab;

    #[test]
    fn bare_profile_path_uses_defaults() {
        let Route::Profile(r) = Route::parse("/users/alice", "") else {
            panic!("expected profile route");
        };
        assert_eq!(r.username, "alice");
        assert_eq!(r.tab, TabSelection::Known(ProfileTab::Overview));
        assert_eq!(r.query.page, 1);
        assert_eq!(r.query.order, "newest");
    }

    #[test]
    fn tab_and_query_are_read() {
        let route = Route::parse("/users/bob/answers/", "?page=3&order=score");
        let Route::Profile(r) = route else { panic!() };
        assert_eq!(r.tab, TabSelection::Known(ProfileTab::Answers));
        assert_eq!(r.query, PageQuery { page: 3, order: "score".into() });
    }

    #[test]
    fn username_segment_is_percent_decoded() {
        let Route::Profile(r) = Route::parse("/users/j%C3%BCrgen/answers", "") else { panic!() };
        assert_eq!(r.username, "jürgen");
        assert_eq!(r.tab, TabSelection::Known(ProfileTab::Answers));
        assert_eq!(user_tab_path(&r.username, "answers"), "/users/j%C3%BCrgen/answers");
        assert_eq!(user_tab_path("a b", ""), "/users/a%20b");
    }

    #[test]
    fn unknown_tab_is_preserved() {
        let Route::Profile(r) = Route::parse("/users/bob/followers", "") else { panic!() };
        assert_eq!(r.tab, TabSelection::Unknown("followers".into()));
    }

    #[test]
    fn questions_and_fallbacks() {
        assert!(matches!(Route::parse("/", ""), Route::Questions(_)));
        assert!(matches!(Route::parse("/questions", "?order=active"), Route::Questions(q) if q.order == "active"));
        assert!(matches!(Route::parse("/users/settings/profile", ""), Route::NotFound(_)));
        assert!(matches!(Route::parse("/tags/rust", ""), Route::NotFound(_)));
    }

    #[test]
    fn page_coercion() {
        assert_eq!(coerce_page(None), 1);
        assert_eq!(coerce_page(Some("3")), 3);
        assert_eq!(coerce_page(Some(" 7 ")), 7);
        assert_eq!(coerce_page(Some("0")), 1);
        assert_eq!(coerce_page(Some("-2")), 1);
        assert_eq!(coerce_page(Some("abc")), 1);
        assert_eq!(coerce_page(Some("2.9")), 2);
        assert_eq!(coerce_page(Some("99999")), 99999);
    }

    #[test]
    fn empty_order_falls_back() {
        assert_eq!(PageQuery::from_search("?order=").order, "newest");
        assert_eq!(PageQuery::from_search("order=votes&order=x").order, "votes");
    }

    #[test]
    fn path_builders() {
        assert_eq!(user_tab_path("alice", "overview"), "/users/alice");
        assert_eq!(user_tab_path("alice", "votes"), "/users/alice/votes");
        assert_eq!(question_path("10", "how-to"), "/questions/10/how-to");
        assert_eq!(question_path("10", ""), "/questions/10");
        assert_eq!(answer_path("10", "how-to", "20"), "/questions/10/how-to/20");
        assert_eq!(with_query("/users/a/answers", 1, "newest"), "/users/a/answers");
        assert_eq!(with_query("/users/a/answers", 2, "score"), "/users/a/answers?page=2&order=score");
    }
}
