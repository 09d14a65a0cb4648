//! Runs the side effects `update()` asked for.  Called by
//! `dispatch_global_message` once the state borrow has been released, so
//! everything here may read `APP_STATE` or dispatch again.

use gloo_timers::future::TimeoutFuture;

use crate::constants::{QUESTION_PAGE_SIZE, SKELETON_DELAY_MS};
use crate::messages::{Command, Message};
use crate::network::ApiClient;
use crate::session::SESSION;
use crate::state::{dispatch_global_message, APP_STATE};

pub fn run(commands: Vec<Command>) {
    // Several reducers may ask for a render; one pass at the end is enough.
    let mut render_view = false;

    for cmd in commands {
        match cmd {
            Command::RenderActiveView => render_view = true,
            Command::UpdateUI(f) => f(),
            Command::RenderLinkDialog => render_link_dialog(),
            Command::PushHistory(path) => crate::router::push_history(&path),
            Command::ReplaceEditorSelection(text) => crate::editor::replace_selection(&text),
            Command::FocusEditor => crate::editor::focus(),
            fetch => execute_fetch_command(fetch),
        }
    }

    if render_view {
        if let Err(e) = crate::views::render_active_view() {
            error_log!("Failed to render view: {:?}", e);
        }
    }
}

pub fn execute_fetch_command(cmd: Command) {
    match cmd {
        Command::FetchProfile { username, token } => {
            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiClient::fetch_profile_by_username(&username).await;
                if let Err(e) = &result {
                    error_log!("Failed to fetch profile {}: {}", username, e);
                }
                dispatch_global_message(Message::ProfileLoaded { token, result });
            });
        }
        Command::FetchTopSummary { username, tab_name, token } => {
            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiClient::fetch_top_summary(&username, &tab_name).await;
                if let Err(e) = &result {
                    error_log!("Failed to fetch top summary for {}: {}", username, e);
                }
                dispatch_global_message(Message::TopSummaryLoaded { token, result });
            });
        }
        Command::FetchProfileList { query, tab, token } => {
            debug_log!("Executing FetchProfileList ({:?}, page={})", tab, query.page);
            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiClient::fetch_list_by_tab(&query, tab).await;
                if let Err(e) = &result {
                    error_log!("Failed to fetch {} list: {}", tab.slug(), e);
                }
                dispatch_global_message(Message::ProfileListLoaded { token, result });
            });
        }
        Command::FetchQuestions { query, token } => {
            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiClient::fetch_questions(&query, QUESTION_PAGE_SIZE).await;
                if let Err(e) = &result {
                    error_log!("Failed to fetch questions: {}", e);
                }
                dispatch_global_message(Message::QuestionsLoaded { token, result });
            });
        }
        Command::StartSkeletonTimer { token } => {
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(SKELETON_DELAY_MS).await;
                dispatch_global_message(Message::SkeletonDelayElapsed { token });
            });
        }
        other => error_log!("Not a fetch command: {:?}", other),
    }
}

fn render_link_dialog() {
    let result = crate::dom_utils::document().and_then(|document| {
        APP_STATE.with(|state| crate::components::link_tool::render_dialog(&document, &state.borrow().link_dialog))
    });
    if let Err(e) = result {
        error_log!("Failed to render link dialog: {:?}", e);
    }
}

/// Seed the session from the cached copy, then confirm it with
/// `/user/info`.  Listeners on [`SESSION`] see both steps.
pub fn refresh_session_user() {
    if let Some(cached) = crate::storage::load_session_user() {
        SESSION.with(|s| s.set(Some(cached)));
    }
    if crate::storage::load_access_token().is_none() {
        SESSION.with(|s| s.set(None));
        persist_session(None);
        return;
    }
    wasm_bindgen_futures::spawn_local(async move {
        match ApiClient::fetch_logged_user().await {
            Ok(user) => {
                persist_session(Some(&user));
                SESSION.with(|s| s.set(Some(user)));
            }
            Err(crate::error::ApiError::Unauthorized) => {
                persist_session(None);
                SESSION.with(|s| s.set(None));
            }
            // Keep the cached user on transient failures.
            Err(e) => error_log!("Failed to fetch session user: {}", e),
        }
    });
}

fn persist_session(user: Option<&crate::models::SessionUser>) {
    if let Err(e) = crate::storage::save_session_user(user) {
        error_log!("Failed to persist session: {:?}", e);
    }
}
