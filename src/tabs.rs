//! Profile tab registry.
//!
//! Every tab is one [`ProfileTab`] variant plus one row in [`TAB_REGISTRY`];
//! nothing else branches on tab names.  Rendering dispatches on the row's
//! [`SubView`] with an exhaustive `match`, so adding a tab is a table edit the
//! compiler checks.

use crate::constants::DEFAULT_TAB;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProfileTab {
    Overview,
    Questions,
    Answers,
    Bookmarks,
    Reputation,
    Comments,
    Votes,
    Badges,
}

/// Presentational component that renders a tab's body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubView {
    Overview,
    Answers,
    DefaultList,
    Reputation,
    Comments,
    Votes,
    Badges,
}

/// Where the list head takes its number from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountSource {
    /// No list head (overview).
    None,
    /// `count` of the tab's list payload.
    ListCount,
    /// The profile's reputation rank.
    ProfileRank,
}

#[derive(Debug)]
pub struct TabSpec {
    pub tab: ProfileTab,
    /// URL segment and list-payload key.
    pub slug: &'static str,
    pub label_key: &'static str,
    pub view: SubView,
    pub count: CountSource,
    /// Personal list endpoint below the API prefix; `None` when the tab has
    /// no list.
    pub endpoint: Option<&'static str>,
    /// Only listed in the nav bar for the profile owner.
    pub self_only: bool,
    /// List head offers the newest/score switch.
    pub sortable: bool,
    /// The endpoint pages its results; the awards list comes back whole.
    pub paginated: bool,
}

pub static TAB_REGISTRY: [TabSpec; 8] = [
    TabSpec {
        tab: ProfileTab::Overview,
        slug: "overview",
        label_key: "personal.overview",
        view: SubView::Overview,
        count: CountSource::None,
        endpoint: None,
        self_only: false,
        sortable: false,
        paginated: false,
    },
    TabSpec {
        tab: ProfileTab::Questions,
        slug: "questions",
        label_key: "personal.questions",
        view: SubView::DefaultList,
        count: CountSource::ListCount,
        endpoint: Some("/personal/question/page"),
        self_only: false,
        sortable: true,
        paginated: true,
    },
    TabSpec {
        tab: ProfileTab::Answers,
        slug: "answers",
        label_key: "personal.answers",
        view: SubView::Answers,
        count: CountSource::ListCount,
        endpoint: Some("/personal/answer/page"),
        self_only: false,
        sortable: true,
        paginated: true,
    },
    TabSpec {
        tab: ProfileTab::Bookmarks,
        slug: "bookmarks",
        label_key: "personal.bookmarks",
        view: SubView::DefaultList,
        count: CountSource::ListCount,
        endpoint: Some("/personal/collection/page"),
        self_only: false,
        sortable: false,
        paginated: true,
    },
    TabSpec {
        tab: ProfileTab::Reputation,
        slug: "reputation",
        label_key: "personal.reputation",
        view: SubView::Reputation,
        count: CountSource::ProfileRank,
        endpoint: Some("/personal/rank/page"),
        self_only: false,
        sortable: false,
        paginated: true,
    },
    TabSpec {
        tab: ProfileTab::Comments,
        slug: "comments",
        label_key: "personal.comments",
        view: SubView::Comments,
        count: CountSource::ListCount,
        endpoint: Some("/personal/comment/page"),
        self_only: false,
        sortable: false,
        paginated: true,
    },
    TabSpec {
        tab: ProfileTab::Votes,
        slug: "votes",
        label_key: "personal.votes",
        view: SubView::Votes,
        count: CountSource::ListCount,
        endpoint: Some("/personal/vote/page"),
        self_only: true,
        sortable: false,
        paginated: true,
    },
    TabSpec {
        tab: ProfileTab::Badges,
        slug: "badges",
        label_key: "personal.badges",
        view: SubView::Badges,
        count: CountSource::ListCount,
        endpoint: Some("/badge/user/awards"),
        self_only: false,
        sortable: false,
        paginated: false,
    },
];

impl ProfileTab {
    /// Registry order; also the nav bar order.
    pub const ALL: [ProfileTab; 8] = [
        ProfileTab::Overview,
        ProfileTab::Questions,
        ProfileTab::Answers,
        ProfileTab::Bookmarks,
        ProfileTab::Reputation,
        ProfileTab::Comments,
        ProfileTab::Votes,
        ProfileTab::Badges,
    ];

    pub fn spec(self) -> &'static TabSpec {
        &TAB_REGISTRY[self as usize]
    }

    pub fn slug(self) -> &'static str {
        self.spec().slug
    }

    /// Exact, case-sensitive lookup.
    pub fn from_slug(slug: &str) -> Option<Self> {
        TAB_REGISTRY.iter().find(|s| s.slug == slug).map(|s| s.tab)
    }
}

impl SubView {
    pub const ALL: [SubView; 7] = [
        SubView::Overview,
        SubView::Answers,
        SubView::DefaultList,
        SubView::Reputation,
        SubView::Comments,
        SubView::Votes,
        SubView::Badges,
    ];
}

/// The tab named by the URL.  Unknown names are kept so links and fetch keys
/// still carry them, but they mount no sub-view.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TabSelection {
    Known(ProfileTab),
    Unknown(String),
}

impl TabSelection {
    /// Resolve the optional `tabName` path segment, defaulting to overview.
    pub fn resolve(segment: Option<&str>) -> Self {
        let name = segment.filter(|s| !s.is_empty()).unwrap_or(DEFAULT_TAB);
        match ProfileTab::from_slug(name) {
            Some(tab) => TabSelection::Known(tab),
            None => TabSelection::Unknown(name.to_string()),
        }
    }

    pub fn tab(&self) -> Option<ProfileTab> {
        match self {
            TabSelection::Known(t) => Some(*t),
            TabSelection::Unknown(_) => None,
        }
    }

    pub fn spec(&self) -> Option<&'static TabSpec> {
        self.tab().map(ProfileTab::spec)
    }

    /// Name as it appears in the URL and in list-payload keys.
    pub fn name(&self) -> &str {
        match self {
            TabSelection::Known(t) => t.slug(),
            TabSelection::Unknown(name) => name,
        }
    }

    pub fn is_overview(&self) -> bool {
        *self == TabSelection::Known(ProfileTab::Overview)
    }

    pub fn active_view(&self) -> Option<SubView> {
        self.spec().map(|s| s.view)
    }

    /// `visible` flag for every sub-view, in [`SubView::ALL`] order.
    pub fn visibility(&self) -> [(SubView, bool); 7] {
        let active = self.active_view();
        SubView::ALL.map(|v| (v, Some(v) == active))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_rows_line_up_with_enum_order() {
        for (i, tab) in ProfileTab::ALL.iter().enumerate() {
            assert_eq!(TAB_REGISTRY[i].tab, *tab);
            assert_eq!(tab.spec().tab, *tab);
        }
    }

    #[test]
    fn every_sub_view_is_reachable() {
        for view in SubView::ALL {
            assert!(TAB_REGISTRY.iter().any(|s| s.view == view), "{:?} unused", view);
        }
    }

    #[test]
    fn slugs_round_trip() {
        for tab in ProfileTab::ALL {
            assert_eq!(ProfileTab::from_slug(tab.slug()), Some(tab));
        }
        assert_eq!(ProfileTab::from_slug("Answers"), None);
    }

    #[test]
    fn missing_segment_defaults_to_overview() {
        assert!(TabSelection::resolve(None).is_overview());
        assert!(TabSelection::resolve(Some("")).is_overview());
    }

    #[test]
    fn unknown_tab_mounts_nothing() {
        let sel = TabSelection::resolve(Some("followers"));
        assert_eq!(sel.name(), "followers");
        assert!(sel.visibility().iter().all(|(_, v)| !v));
    }

    #[test]
    fn questions_and_bookmarks_share_the_default_list() {
        let q = TabSelection::resolve(Some("questions"));
        let b = TabSelection::resolve(Some("bookmarks"));
        assert_eq!(q.active_view(), Some(SubView::DefaultList));
        assert_eq!(b.active_view(), Some(SubView::DefaultList));
    }

    #[test]
    fn reputation_counts_rank() {
        assert_eq!(ProfileTab::Reputation.spec().count, CountSource::ProfileRank);
        assert_eq!(ProfileTab::Overview.spec().count, CountSource::None);
    }

    #[test]
    fn only_paged_endpoints_paginate() {
        let unpaged: Vec<_> = TAB_REGISTRY.iter().filter(|s| !s.paginated).map(|s| s.tab).collect();
        assert_eq!(unpaged, vec![ProfileTab::Overview, ProfileTab::Badges]);
    }
}
