use std::cell::RefCell;
use std::collections::HashMap;

use crate::command_executors;
use crate::constants::LINK_URL_PLACEHOLDER;
use crate::fetch::FetchSlot;
use crate::messages::Message;
use crate::models::{ListPayload, Page, Profile, QuestionItem, SessionUser, TopSummary};
use crate::route::{PageQuery, Route};
use crate::update::update;

/// Input tuple of the profile list fetch.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListKey {
    pub username: String,
    pub tab_name: String,
    pub page: u32,
    pub order: String,
}

/// The three independent data sources of the profile page.
#[derive(Default)]
pub struct ProfilePageState {
    pub profile: FetchSlot<String, Profile>,
    pub top: FetchSlot<(String, String), TopSummary>,
    pub list: FetchSlot<ListKey, HashMap<String, ListPayload>>,
}

#[derive(Default)]
pub struct QuestionListState {
    pub list: FetchSlot<PageQuery, Page<QuestionItem>>,
    /// Loading has lasted past the skeleton delay.
    pub skeleton_visible: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinkField {
    pub value: String,
    pub invalid: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinkDialogState {
    pub visible: bool,
    pub url: LinkField,
    pub name: LinkField,
}

impl Default for LinkDialogState {
    fn default() -> Self {
        Self {
            visible: false,
            url: LinkField {
                value: LINK_URL_PLACEHOLDER.to_string(),
                invalid: false,
            },
            name: LinkField::default(),
        }
    }
}

// Store global application state
pub struct AppState {
    pub route: Route,
    /// Snapshot of the session accessor, refreshed on every change
    /// notification.
    pub session_user: Option<SessionUser>,
    pub profile_page: ProfilePageState,
    pub question_list: QuestionListState,
    pub link_dialog: LinkDialogState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            route: Route::Questions(PageQuery::default()),
            session_user: None,
            profile_page: ProfilePageState::default(),
            question_list: QuestionListState::default(),
            link_dialog: LinkDialogState::default(),
        }
    }
}

// We use thread_local to store our app state
thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

/// Single entry point for UI events: run the reducer, release the borrow,
/// then execute the returned commands.
pub fn dispatch_global_message(msg: Message) {
    let commands = APP_STATE.with(|state| {
        let mut state = state.borrow_mut();
        update(&mut state, msg)
    });
    command_executors::run(commands);
}
