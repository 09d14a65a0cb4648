//! Routing & session reducer: keeps `state.route` in sync with the location
//! and (re)triggers the fetches of whichever page the route selects.

use crate::messages::{Command, Message};
use crate::route::Route;
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::Navigate(target) => {
            let (path, search) = split_target(target);
            commands.push(Command::PushHistory(target.clone()));
            apply_route(state, Route::parse(path, search), commands);
            true
        }
        Message::RouteChanged(route) => {
            apply_route(state, route.clone(), commands);
            true
        }
        Message::SessionChanged(user) => {
            state.session_user = user.clone();
            commands.push(Command::RenderActiveView);
            true
        }
        _ => false,
    }
}

fn apply_route(state: &mut AppState, route: Route, commands: &mut Vec<Command>) {
    crate::debug_log!("Route -> {:?}", route);
    match &route {
        Route::Profile(profile_route) => {
            crate::reducers::profile::sync_fetches(&mut state.profile_page, profile_route, commands);
        }
        Route::Questions(query) => {
            crate::reducers::questions::sync_fetches(&mut state.question_list, query, commands);
        }
        Route::NotFound(_) => {}
    }
    state.route = route;
    commands.push(Command::RenderActiveView);
}

/// `"/a/b?x=1#frag"` → `("/a/b", "x=1")`.
fn split_target(target: &str) -> (&str, &str) {
    let target = target.split('#').next().unwrap_or_default();
    match target.split_once('?') {
        Some((path, search)) => (path, search),
        None => (target, ""),
    }
}
