//! Native tests for the profile page: routing through `update()`, fetch
//! bookkeeping and the composed view model.
//!
//! Run with: cargo test --test profile_composer

use std::collections::HashMap;

use proptest::prelude::*;

use forum_frontend::fetch::RequestToken;
use forum_frontend::messages::{Command, Message};
use forum_frontend::models::{AnswerItem, ListPayload, Profile, SessionUser, TabRecords, TopSummary, VoteItem};
use forum_frontend::pages::profile::view_model::compose;
use forum_frontend::route::{ProfileRoute, Route};
use forum_frontend::state::AppState;
use forum_frontend::tabs::{ProfileTab, SubView, TAB_REGISTRY};
use forum_frontend::update::update;

fn navigate(state: &mut AppState, target: &str) -> Vec<Command> {
    update(state, Message::Navigate(target.to_string()))
}

fn profile_route(state: &AppState) -> ProfileRoute {
    match &state.route {
        Route::Profile(r) => r.clone(),
        other => panic!("expected a profile route, got {:?}", other),
    }
}

fn list_token(commands: &[Command]) -> Option<(RequestToken, ProfileTab)> {
    commands.iter().find_map(|c| match c {
        Command::FetchProfileList { token, tab, .. } => Some((*token, *tab)),
        _ => None,
    })
}

fn profile_token(commands: &[Command]) -> Option<RequestToken> {
    commands.iter().find_map(|c| match c {
        Command::FetchProfile { token, .. } => Some(*token),
        _ => None,
    })
}

fn alice() -> Profile {
    Profile {
        username: "alice".into(),
        display_name: "Alice".into(),
        rank: 1234,
        created_at: 1_600_000_000,
        status: "normal".into(),
        ..Profile::default()
    }
}

fn payload(slug: &str, list: ListPayload) -> HashMap<String, ListPayload> {
    HashMap::from([(slug.to_string(), list)])
}

/// Open `target` and answer every fetch it issued with `profile` and `list`.
fn open_loaded(state: &mut AppState, target: &str, list: Option<ListPayload>) {
    let commands = navigate(state, target);
    let slug = profile_route(state).tab.name().to_string();
    for c in commands {
        match c {
            Command::FetchProfile { token, .. } => {
                update(state, Message::ProfileLoaded { token, result: Ok(alice()) });
            }
            Command::FetchTopSummary { token, .. } => {
                update(state, Message::TopSummaryLoaded { token, result: Ok(TopSummary::default()) });
            }
            Command::FetchProfileList { token, .. } => {
                let map = list.clone().map(|l| payload(&slug, l)).unwrap_or_default();
                update(state, Message::ProfileListLoaded { token, result: Ok(map) });
            }
            _ => {}
        }
    }
}

#[test]
fn alice_overview_end_to_end() {
    let mut state = AppState::new();
    let commands = navigate(&mut state, "/users/alice");
    assert!(profile_token(&commands).is_some());
    assert!(list_token(&commands).is_none(), "overview has no list endpoint");
    assert!(commands
        .iter()
        .any(|c| matches!(c, Command::FetchTopSummary { username, tab_name, .. } if username == "alice" && tab_name == "overview")));

    let profile = profile_token(&commands).expect("profile fetch");
    update(&mut state, Message::ProfileLoaded { token: profile, result: Ok(alice()) });
    for c in &commands {
        if let Command::FetchTopSummary { token, .. } = c {
            update(&mut state, Message::TopSummaryLoaded { token: *token, result: Ok(TopSummary::default()) });
        }
    }

    // Opening the same page again reuses what is in flight or loaded.
    assert!(profile_token(&navigate(&mut state, "/users/alice")).is_none());

    let route = profile_route(&state);
    let vm = compose(&route, &state.profile_page, None);
    assert_eq!(vm.page_title.as_deref(), Some("Alice (alice)"));
    assert!(vm.is_visible(SubView::Overview));
    assert!(vm.show_stats);
    assert!(!vm.show_empty);
    assert!(vm.pagination.is_none());
    assert_eq!(vm.nav.iter().filter(|n| n.active).count(), 1);
}

#[test]
fn stale_answers_response_cannot_overwrite_votes() {
    let mut state = AppState::new();
    let answers = navigate(&mut state, "/users/alice/answers");
    let (answers_token, tab) = list_token(&answers).expect("answers fetch");
    assert_eq!(tab, ProfileTab::Answers);

    let votes = navigate(&mut state, "/users/alice/votes");
    let (votes_token, tab) = list_token(&votes).expect("votes fetch");
    assert_eq!(tab, ProfileTab::Votes);
    assert!(profile_token(&votes).is_none(), "same username, no refetch");

    let late = payload(
        "answers",
        ListPayload { count: 5, list: TabRecords::Answers(vec![AnswerItem::default(); 5]) },
    );
    let commands = update(&mut state, Message::ProfileListLoaded { token: answers_token, result: Ok(late) });
    assert!(!commands.iter().any(|c| matches!(c, Command::RenderActiveView)));

    let route = profile_route(&state);
    let vm = compose(&route, &state.profile_page, None);
    assert!(vm.is_loading);
    assert!(vm.records.is_empty());
    assert!(!vm.show_empty);

    let fresh = payload(
        "votes",
        ListPayload { count: 2, list: TabRecords::Votes(vec![VoteItem::default(); 2]) },
    );
    update(&mut state, Message::ProfileListLoaded { token: votes_token, result: Ok(fresh) });
    let vm = compose(&route, &state.profile_page, None);
    assert!(vm.is_visible(SubView::Votes));
    assert_eq!(vm.records.len(), 2);
    assert_eq!(vm.list_head.map(|h| h.count), Some(2));
}

#[test]
fn answers_arriving_after_votes_are_dropped() {
    let mut state = AppState::new();
    let (answers_token, _) = list_token(&navigate(&mut state, "/users/alice/answers")).expect("answers fetch");
    let (votes_token, _) = list_token(&navigate(&mut state, "/users/alice/votes")).expect("votes fetch");

    let fresh = payload(
        "votes",
        ListPayload { count: 2, list: TabRecords::Votes(vec![VoteItem::default(); 2]) },
    );
    let commands = update(&mut state, Message::ProfileListLoaded { token: votes_token, result: Ok(fresh) });
    assert!(commands.iter().any(|c| matches!(c, Command::RenderActiveView)));

    let late = payload(
        "answers",
        ListPayload { count: 5, list: TabRecords::Answers(vec![AnswerItem::default(); 5]) },
    );
    let commands = update(&mut state, Message::ProfileListLoaded { token: answers_token, result: Ok(late) });
    assert!(!commands.iter().any(|c| matches!(c, Command::RenderActiveView)));

    let route = profile_route(&state);
    let vm = compose(&route, &state.profile_page, None);
    assert!(vm.is_visible(SubView::Votes));
    assert!(!vm.is_loading);
    assert_eq!(vm.records.len(), 2);
    assert_eq!(vm.list_head.map(|h| h.count), Some(2));
}

#[test]
fn reputation_count_is_profile_rank() {
    let mut state = AppState::new();
    open_loaded(&mut state, "/users/alice/reputation", Some(ListPayload::empty()));
    let route = profile_route(&state);
    let vm = compose(&route, &state.profile_page, None);
    assert_eq!(vm.list_head.map(|h| h.count), Some(1234));
}

#[test]
fn empty_state_waits_for_loading() {
    let mut state = AppState::new();
    navigate(&mut state, "/users/alice/bookmarks");
    let route = profile_route(&state);
    let vm = compose(&route, &state.profile_page, None);
    assert!(vm.is_loading);
    assert!(!vm.show_empty);

    let mut state = AppState::new();
    open_loaded(&mut state, "/users/alice/bookmarks", Some(ListPayload::empty()));
    let route = profile_route(&state);
    let vm = compose(&route, &state.profile_page, None);
    assert!(!vm.is_loading);
    assert!(vm.show_empty);
}

#[test]
fn retry_refetches_the_failed_list() {
    let mut state = AppState::new();
    let commands = navigate(&mut state, "/users/alice/comments");
    let (token, _) = list_token(&commands).expect("comments fetch");
    update(
        &mut state,
        Message::ProfileListLoaded { token, result: Err(forum_frontend::error::ApiError::Http { status: 500 }) },
    );
    let route = profile_route(&state);
    assert!(compose(&route, &state.profile_page, None).list_error.is_some());

    let commands = update(&mut state, Message::RetryProfileList);
    let (retry, tab) = list_token(&commands).expect("retry fetch");
    assert_eq!(tab, ProfileTab::Comments);
    assert_ne!(retry, token);
    assert!(compose(&route, &state.profile_page, None).list_error.is_none());
}

#[test]
fn empty_username_fetches_nothing() {
    let mut state = AppState::new();
    state.route = Route::Profile(ProfileRoute {
        username: String::new(),
        tab: forum_frontend::tabs::TabSelection::resolve(None),
        query: Default::default(),
    });
    let mut commands = Vec::new();
    let route = profile_route(&state);
    forum_frontend::reducers::profile::sync_fetches(&mut state.profile_page, &route, &mut commands);
    assert!(commands.is_empty());
    let vm = compose(&route, &state.profile_page, None);
    assert!(!vm.is_loading);
    assert!(vm.page_title.is_none());
}

fn slug_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::sample::select(TAB_REGISTRY.iter().map(|s| s.slug.to_string()).collect::<Vec<_>>()),
        "[a-z]{1,10}",
    ]
}

proptest! {
    #[test]
    fn at_most_one_sub_view_is_visible(slug in slug_strategy()) {
        let mut state = AppState::new();
        open_loaded(&mut state, &format!("/users/alice/{}", slug), Some(ListPayload::empty()));
        let route = profile_route(&state);
        let vm = compose(&route, &state.profile_page, None);
        let visible = vm.visibility.iter().filter(|(_, on)| *on).count();
        let known = TAB_REGISTRY.iter().any(|s| s.slug == slug);
        prop_assert_eq!(visible, usize::from(known));
        prop_assert_eq!(vm.nav.iter().filter(|n| n.active).count() <= 1, true);
    }

    #[test]
    fn page_is_coerced_to_a_positive_integer(raw in "[-a-z0-9.]{0,6}") {
        let route = match Route::parse("/users/alice/answers", &format!("page={}", raw)) {
            Route::Profile(r) => r,
            other => panic!("{:?}", other),
        };
        prop_assert!(route.query.page >= 1);
        if let Ok(n) = raw.parse::<u32>() {
            prop_assert_eq!(route.query.page, n.max(1));
        }
    }

    #[test]
    fn pagination_iff_list_has_records(count in 0u64..200) {
        let mut state = AppState::new();
        let list = ListPayload {
            count,
            list: TabRecords::Answers(vec![AnswerItem::default(); count.min(30) as usize]),
        };
        open_loaded(&mut state, "/users/alice/answers", Some(list));
        let route = profile_route(&state);
        let vm = compose(&route, &state.profile_page, None);
        prop_assert_eq!(vm.pagination.is_some(), count > 0);
        if let Some(p) = vm.pagination {
            prop_assert_eq!(p.page_size, 30);
            prop_assert_eq!(p.total, count);
        }
    }

    #[test]
    fn edit_profile_only_for_the_owner(viewer in "[a-zA-Z]{1,8}") {
        let mut state = AppState::new();
        open_loaded(&mut state, "/users/alice", None);
        let route = profile_route(&state);
        let session = SessionUser { username: viewer.clone(), display_name: viewer.clone() };
        let vm = compose(&route, &state.profile_page, Some(&session));
        prop_assert_eq!(vm.show_edit_profile, viewer == "alice");
        prop_assert_eq!(vm.nav.iter().any(|n| n.tab == ProfileTab::Votes), viewer == "alice");
    }
}
