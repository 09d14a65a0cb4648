//! Profile page reducer: issues the three fetches for the current route and
//! applies their responses through the version-guarded slots.

use std::collections::HashMap;

use crate::constants::PROFILE_PAGE_SIZE;
use crate::messages::{Command, Message};
use crate::network::ListQuery;
use crate::route::ProfileRoute;
use crate::state::{AppState, ListKey, ProfilePageState};

/// Point every slot at the route's input tuples; only changed tuples cause
/// requests.  An empty username turns every fetch into a no-op.
pub fn sync_fetches(page: &mut ProfilePageState, route: &ProfileRoute, commands: &mut Vec<Command>) {
    let username = route.username.clone();
    if username.is_empty() {
        page.profile.clear();
        page.top.clear();
        page.list.clear();
        return;
    }

    if let Some(token) = page.profile.request(username.clone()) {
        commands.push(Command::FetchProfile {
            username: username.clone(),
            token,
        });
    }

    let tab_name = route.tab.name().to_string();
    if let Some(token) = page.top.request((username.clone(), tab_name.clone())) {
        commands.push(Command::FetchTopSummary {
            username: username.clone(),
            tab_name: tab_name.clone(),
            token,
        });
    }

    let key = ListKey {
        username: username.clone(),
        tab_name,
        page: route.query.page,
        order: route.query.order.clone(),
    };
    match route.tab.tab().filter(|t| t.spec().endpoint.is_some()) {
        Some(tab) => {
            if let Some(token) = page.list.request(key) {
                commands.push(Command::FetchProfileList {
                    query: ListQuery {
                        username,
                        page: route.query.page,
                        page_size: PROFILE_PAGE_SIZE,
                        order: route.query.order.clone(),
                    },
                    tab,
                    token,
                });
            }
        }
        // Overview and unknown tabs have nothing to list.
        None => page.list.settle(key, HashMap::new()),
    }
}

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    let page = &mut state.profile_page;
    match msg {
        Message::ProfileLoaded { token, result } => {
            if let Err(e) = result {
                if !e.is_not_found() && page.profile.is_current(*token) {
                    let text = e.to_string();
                    commands.push(Command::UpdateUI(Box::new(move || {
                        crate::toast::error(&text);
                    })));
                }
            }
            if page.profile.resolve(*token, result.clone()) {
                commands.push(Command::RenderActiveView);
            } else {
                debug_log!("Discarding stale profile response");
            }
            true
        }
        Message::TopSummaryLoaded { token, result } => {
            if page.top.resolve(*token, result.clone()) {
                commands.push(Command::RenderActiveView);
            } else {
                debug_log!("Discarding stale top summary response");
            }
            true
        }
        Message::ProfileListLoaded { token, result } => {
            if page.list.resolve(*token, result.clone()) {
                commands.push(Command::RenderActiveView);
            } else {
                debug_log!("Discarding stale list response");
            }
            true
        }
        Message::RetryProfileList => {
            let crate::route::Route::Profile(route) = &state.route else {
                return true;
            };
            let Some(tab) = route.tab.tab() else {
                return true;
            };
            if let Some(token) = state.profile_page.list.refresh() {
                commands.push(Command::FetchProfileList {
                    query: ListQuery {
                        username: route.username.clone(),
                        page: route.query.page,
                        page_size: PROFILE_PAGE_SIZE,
                        order: route.query.order.clone(),
                    },
                    tab,
                    token,
                });
                commands.push(Command::RenderActiveView);
            }
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::{ListPayload, TabRecords};
    use crate::route::Route;
    use crate::tabs::ProfileTab;

    fn route(path: &str, search: &str) -> ProfileRoute {
        match Route::parse(path, search) {
            Route::Profile(r) => r,
            other => panic!("not a profile route: {:?}", other),
        }
    }

    #[test]
    fn three_fetches_for_a_list_tab() {
        let mut page = ProfilePageState::default();
        let mut commands = Vec::new();
        sync_fetches(&mut page, &route("/users/alice/votes", "?page=3"), &mut commands);
        assert_eq!(commands.len(), 3);
        assert!(matches!(&commands[0], Command::FetchProfile { username, .. } if username == "alice"));
        assert!(matches!(&commands[1], Command::FetchTopSummary { tab_name, .. } if tab_name == "votes"));
        assert!(matches!(
            &commands[2],
            Command::FetchProfileList { tab: ProfileTab::Votes, query, .. }
                if query.page == 3 && query.page_size == 30 && query.order == "newest"
        ));
    }

    #[test]
    fn overview_settles_the_list_locally() {
        let mut page = ProfilePageState::default();
        let mut commands = Vec::new();
        sync_fetches(&mut page, &route("/users/alice", ""), &mut commands);
        assert_eq!(commands.len(), 2);
        assert!(!page.list.is_loading());
        assert_eq!(page.list.data().map(|m| m.len()), Some(0));
    }

    #[test]
    fn empty_username_is_a_no_op() {
        let mut page = ProfilePageState::default();
        let mut commands = Vec::new();
        let r = ProfileRoute { username: String::new(), ..route("/users/x/answers", "") };
        sync_fetches(&mut page, &r, &mut commands);
        assert!(commands.is_empty());
        assert!(page.profile.key().is_none());
    }

    #[test]
    fn tab_switch_only_refetches_what_changed() {
        let mut page = ProfilePageState::default();
        let mut commands = Vec::new();
        sync_fetches(&mut page, &route("/users/alice/answers", ""), &mut commands);
        commands.clear();
        sync_fetches(&mut page, &route("/users/alice/comments", ""), &mut commands);
        assert_eq!(commands.len(), 2, "profile fetch must be reused: {:?}", commands);
    }

    #[test]
    fn retry_reissues_the_list_fetch() {
        let mut state = AppState::new();
        let mut commands = Vec::new();
        crate::update::update(&mut state, Message::RouteChanged(Route::Profile(route("/users/alice/answers", ""))));
        let token = match crate::update::update(&mut state, Message::RouteChanged(Route::Profile(route("/users/alice/comments", ""))))
            .into_iter()
            .find_map(|c| match c {
                Command::FetchProfileList { token, .. } => Some(token),
                _ => None,
            }) {
            Some(t) => t,
            None => panic!("no list fetch"),
        };
        update(
            &mut state,
            &Message::ProfileListLoaded { token, result: Err(ApiError::Http { status: 500 }) },
            &mut commands,
        );
        assert!(state.profile_page.list.state().error().is_some());

        commands.clear();
        update(&mut state, &Message::RetryProfileList, &mut commands);
        assert!(matches!(&commands[0], Command::FetchProfileList { tab: ProfileTab::Comments, .. }));
        assert!(state.profile_page.list.is_loading());
    }

    #[test]
    fn list_response_is_applied() {
        let mut state = AppState::new();
        let commands = crate::update::update(
            &mut state,
            Message::RouteChanged(Route::Profile(route("/users/alice/answers", ""))),
        );
        let token = commands
            .iter()
            .find_map(|c| match c {
                Command::FetchProfileList { token, .. } => Some(*token),
                _ => None,
            })
            .unwrap();
        let payload = ListPayload { count: 2, list: TabRecords::Answers(vec![Default::default(); 2]) };
        let mut out = Vec::new();
        update(
            &mut state,
            &Message::ProfileListLoaded {
                token,
                result: Ok(HashMap::from([("answers".to_string(), payload.clone())])),
            },
            &mut out,
        );
        assert!(matches!(out.as_slice(), [Command::RenderActiveView]));
        assert_eq!(state.profile_page.list.data().unwrap().get("answers"), Some(&payload));
    }
}
