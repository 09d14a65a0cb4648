//! Profile page composer.
//!
//! `compose` merges the route, the three fetch slots and the session snapshot
//! into everything the renderer needs.  It is recomputed on every render and
//! never stored.

use crate::components::pagination::PaginationModel;
use crate::constants::{LIST_SORT_KEYS, PROFILE_PAGE_SIZE};
use crate::error::ApiError;
use crate::models::{Profile, SessionUser, TabRecords, TopSummary};
use crate::route::{user_tab_path, with_query, ProfileRoute};
use crate::state::ProfilePageState;
use crate::tabs::{CountSource, ProfileTab, SubView, TabSelection, TAB_REGISTRY};

const NO_RECORDS: &TabRecords = &TabRecords::None;

#[derive(Clone, Debug, PartialEq)]
pub struct NavTab {
    pub tab: ProfileTab,
    pub label_key: &'static str,
    pub href: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SortLink {
    pub order: &'static str,
    pub href: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListHead {
    pub count: u64,
    pub label_key: &'static str,
    /// Empty unless the tab is sortable.
    pub sort: Vec<SortLink>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stats {
    pub created_at: i64,
    pub last_login: Option<i64>,
}

#[derive(Debug)]
pub struct ProfileViewModel<'a> {
    pub username: &'a str,
    pub tab: &'a TabSelection,
    pub page_title: Option<String>,
    pub profile: Option<&'a Profile>,
    /// The backend has no such user.
    pub profile_missing: bool,
    pub status_alert: Option<&'a str>,
    pub is_self: bool,
    pub show_edit_profile: bool,
    pub nav: Vec<NavTab>,
    pub visibility: [(SubView, bool); 7],
    pub top: Option<&'a TopSummary>,
    pub records: &'a TabRecords,
    pub list_head: Option<ListHead>,
    /// The tab's list fetch is in flight.  The profile fetch does not count.
    pub is_loading: bool,
    pub list_error: Option<&'a ApiError>,
    pub show_empty: bool,
    pub pagination: Option<PaginationModel>,
    pub show_stats: bool,
    pub stats: Option<Stats>,
}

impl ProfileViewModel<'_> {
    pub fn is_visible(&self, view: SubView) -> bool {
        self.visibility.iter().any(|(v, on)| *v == view && *on)
    }
}

pub fn compose<'a>(
    route: &'a ProfileRoute,
    page: &'a ProfilePageState,
    session: Option<&SessionUser>,
) -> ProfileViewModel<'a> {
    let username = route.username.as_str();
    let tab = &route.tab;

    let profile = page.profile.data();
    let profile_missing = page.profile.state().error().is_some_and(ApiError::is_not_found);
    let is_self = !username.is_empty() && session.is_some_and(|u| u.username == username);

    let nav = TAB_REGISTRY
        .iter()
        .filter(|spec| is_self || !spec.self_only)
        .map(|spec| NavTab {
            tab: spec.tab,
            label_key: spec.label_key,
            href: user_tab_path(username, spec.slug),
            active: tab.tab() == Some(spec.tab),
        })
        .collect();

    let payload = page.list.data().and_then(|lists| lists.get(tab.name()));
    let records = payload.map(|p| &p.list).unwrap_or(NO_RECORDS);
    let list_count = payload.map(|p| p.count).unwrap_or(0);

    let list_head = tab.spec().and_then(|spec| {
        let count = match spec.count {
            CountSource::None => return None,
            CountSource::ListCount => list_count,
            CountSource::ProfileRank => profile.map(|p| p.rank.max(0) as u64).unwrap_or(0),
        };
        let sort = if spec.sortable {
            let path = user_tab_path(username, spec.slug);
            LIST_SORT_KEYS
                .iter()
                .map(|&order| SortLink {
                    order,
                    href: with_query(&path, 1, order),
                    active: route.query.order == *order,
                })
                .collect()
        } else {
            Vec::new()
        };
        Some(ListHead { count, label_key: spec.label_key, sort })
    });

    let is_loading = page.list.is_loading();
    let list_error = page.list.state().error();
    let show_empty = !tab.is_overview() && !is_loading && list_error.is_none() && records.is_empty();

    let paginated = tab.spec().is_some_and(|spec| spec.paginated);
    let pagination = (paginated && list_count > 0).then(|| PaginationModel {
        current: route.query.page,
        total: list_count,
        page_size: PROFILE_PAGE_SIZE,
        base_path: user_tab_path(username, tab.name()),
        order: route.query.order.clone(),
    });

    let show_stats = tab.is_overview();
    let stats = profile
        .filter(|_| show_stats)
        .and_then(|p| p.created_at().map(|created_at| Stats { created_at, last_login: p.last_login() }));

    ProfileViewModel {
        username,
        tab,
        page_title: profile.map(|p| format!("{} ({})", p.display_name, p.username)),
        profile,
        profile_missing,
        status_alert: profile.and_then(Profile::status_alert),
        is_self,
        show_edit_profile: is_self,
        nav,
        visibility: tab.visibility(),
        top: page.top.data(),
        records,
        list_head,
        is_loading,
        list_error,
        show_empty,
        pagination,
        show_stats,
        stats,
    }
}
