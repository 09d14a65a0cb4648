// src/update.rs
//
use crate::messages::{Command, Message};
use crate::state::AppState;

/// Apply `msg` to `state` and collect the side effects it needs.  Pure apart
/// from the deferred closures inside `Command::UpdateUI`.
pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    // ---------------------------------------------------------------
    // Delegate to domain-specific reducers; the first one that consumes
    // the message wins.
    // ---------------------------------------------------------------

    if crate::reducers::routing::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::profile::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::questions::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::link_tool::update(state, &msg, &mut commands) {
        return commands;
    }

    crate::debug_log!("Unhandled message: {:?}", msg);
    commands
}
