// src/messages.rs
//
// The events that can occur in the UI, and the side effects reducers ask for.
//
use std::collections::HashMap;

use crate::error::ApiError;
use crate::fetch::RequestToken;
use crate::models::{ListPayload, Page, Profile, QuestionItem, SessionUser, TopSummary};
use crate::network::ListQuery;
use crate::route::{PageQuery, Route};
use crate::tabs::ProfileTab;

#[derive(Debug, Clone)]
pub enum Message {
    // Routing
    /// In-app link followed; `path` may carry a query string.
    Navigate(String),
    /// Location changed outside our control (initial load, back/forward).
    RouteChanged(Route),

    // Session
    SessionChanged(Option<SessionUser>),

    // Profile page
    ProfileLoaded {
        token: RequestToken,
        result: Result<Profile, ApiError>,
    },
    TopSummaryLoaded {
        token: RequestToken,
        result: Result<TopSummary, ApiError>,
    },
    ProfileListLoaded {
        token: RequestToken,
        result: Result<HashMap<String, ListPayload>, ApiError>,
    },
    RetryProfileList,

    // Question list
    QuestionsLoaded {
        token: RequestToken,
        result: Result<Page<QuestionItem>, ApiError>,
    },
    SkeletonDelayElapsed {
        token: RequestToken,
    },

    // Editor link tool
    OpenLinkDialog {
        selection: String,
    },
    LinkUrlChanged(String),
    LinkNameChanged(String),
    FillLinkUserInfo,
    ConfirmLink,
    CloseLinkDialog,
}

/// Side effects returned by `update()`; executed once the state borrow is
/// released.
pub enum Command {
    /// Execute a UI update function after state changes
    UpdateUI(Box<dyn FnOnce() + 'static>),

    /// Re-render the page for the current route.
    RenderActiveView,

    /// Re-render the editor link dialog.
    RenderLinkDialog,

    /// `history.pushState` to `path`.
    PushHistory(String),

    FetchProfile {
        username: String,
        token: RequestToken,
    },
    FetchTopSummary {
        username: String,
        tab_name: String,
        token: RequestToken,
    },
    FetchProfileList {
        query: ListQuery,
        tab: ProfileTab,
        token: RequestToken,
    },
    FetchQuestions {
        query: PageQuery,
        token: RequestToken,
    },

    /// Arm the anti-flicker timer of the question list.
    StartSkeletonTimer {
        token: RequestToken,
    },

    /// Replace the attached editor's selection with `text`.
    ReplaceEditorSelection(String),
    FocusEditor,
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::UpdateUI(_) => write!(f, "UpdateUI(..)"),
            Command::RenderActiveView => write!(f, "RenderActiveView"),
            Command::RenderLinkDialog => write!(f, "RenderLinkDialog"),
            Command::PushHistory(p) => write!(f, "PushHistory({})", p),
            Command::FetchProfile { username, .. } => write!(f, "FetchProfile({})", username),
            Command::FetchTopSummary { username, tab_name, .. } => {
                write!(f, "FetchTopSummary({}, {})", username, tab_name)
            }
            Command::FetchProfileList { query, tab, .. } => {
                write!(f, "FetchProfileList({:?}, {:?})", query, tab)
            }
            Command::FetchQuestions { query, .. } => write!(f, "FetchQuestions({:?})", query),
            Command::StartSkeletonTimer { .. } => write!(f, "StartSkeletonTimer"),
            Command::ReplaceEditorSelection(s) => write!(f, "ReplaceEditorSelection({})", s),
            Command::FocusEditor => write!(f, "FocusEditor"),
        }
    }
}
