//! Constants for the frontend application
//!
//! Centralises string literals (CSS classes, DOM ids, route defaults, page
//! sizes) so they are defined once.

// CSS Class Names
pub const CSS_TAB_BUTTON: &str = "tab-button";
pub const CSS_TAB_BUTTON_ACTIVE: &str = "tab-button active";
pub const CSS_HIDDEN: &str = "hidden";
pub const CSS_VISIBLE: &str = "visible";
pub const CSS_EMPTY_STATE: &str = "empty-state";
pub const CSS_ALERT_WARNING: &str = "alert alert-warning";
pub const CSS_ALERT_DANGER: &str = "alert alert-danger";
pub const CSS_LIST_ITEM: &str = "list-group-item";
pub const CSS_LIST_GROUP: &str = "list-group list-group-flush";
pub const CSS_TEXT_SECONDARY: &str = "text-secondary";
pub const CSS_BTN_PRIMARY: &str = "btn btn-primary";
pub const CSS_BTN_LINK: &str = "btn btn-link";
pub const CSS_BTN_OUTLINE: &str = "btn btn-outline-secondary";
pub const CSS_BTN_OUTLINE_ACTIVE: &str = "btn btn-outline-secondary active";
pub const CSS_INVALID: &str = "is-invalid";

// DOM ids
pub const ID_APP_CONTAINER: &str = "app-container";
pub const ID_PROFILE_CONTAINER: &str = "profile-container";
pub const ID_QUESTIONS_CONTAINER: &str = "questions-container";
pub const ID_LINK_MODAL: &str = "editor-link-modal";
pub const ID_LINK_URL_INPUT: &str = "editor-internet-site";
pub const ID_LINK_NAME_INPUT: &str = "editor-internet-site-name";
pub const ID_PROFILE_NAV: &str = "profile-nav";
pub const ID_NOT_FOUND_CONTAINER: &str = "not-found-container";

// Attributes
pub const ATTR_TYPE: &str = "type";
pub const ATTR_DATA_ROUTE: &str = "data-route";
pub const ATTR_DATA_EDITOR: &str = "data-md-editor";
pub const BUTTON_TYPE_BUTTON: &str = "button";

// Route defaults
pub const DEFAULT_TAB: &str = "overview";
pub const DEFAULT_ORDER: &str = "newest";
pub const DEFAULT_PAGE: u32 = 1;

/// Fixed page size of the profile page lists.
pub const PROFILE_PAGE_SIZE: u32 = 30;
/// Fixed page size of the question list.
pub const QUESTION_PAGE_SIZE: u32 = 20;

/// Account status that does not raise the inline alert.
pub const STATUS_NORMAL: &str = "normal";

// Question list
pub const QUESTION_ORDER_KEYS: [&str; 6] =
    ["newest", "active", "unanswered", "recommend", "frequent", "score"];
pub const LIST_SORT_KEYS: [&str; 2] = ["newest", "score"];
pub const QUESTION_PIN_PINNED: i32 = 2;
pub const QUESTION_STATUS_CLOSED: i32 = 2;
pub const ANSWER_ACCEPTED: i32 = 2;

/// Loading must last this long before the skeleton replaces the list.
pub const SKELETON_DELAY_MS: u32 = 500;

// Editor link tool
pub const LINK_URL_PLACEHOLDER: &str = "https://";
pub const LINK_KEYMAP: &str = "Ctrl-l";

// Paths
pub const PATH_EDIT_PROFILE: &str = "/users/settings/profile";
pub const PATH_QUESTIONS: &str = "/questions";

// localStorage keys
pub const STORAGE_SESSION_USER: &str = "session_user";
pub const STORAGE_ACCESS_TOKEN: &str = "access_token";

/// Prefix every backend route shares.
pub const API_PREFIX: &str = "/answer/api/v1";
