use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{ANSWER_ACCEPTED, STATUS_NORMAL};

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// The signed-in user as far as this UI cares.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    #[serde(default)]
    pub display_name: String,
}

impl SessionUser {
    /// `"Alice (alice)"` – what the link tool inserts as a link name.
    pub fn label(&self) -> String {
        format!("{} ({})", self.display_name, self.username)
    }
}

// ---------------------------------------------------------------------------
// Profile page
// ---------------------------------------------------------------------------

/// Public profile returned by `/personal/user/info`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub avatar: String,
    pub bio: String,
    pub bio_html: String,
    pub website: String,
    pub location: String,
    pub status: String,
    pub status_msg: String,
    pub rank: i64,
    pub answer_count: i64,
    pub question_count: i64,
    /// Unix seconds; `0` when unknown.
    pub created_at: i64,
    pub last_login_date: i64,
}

impl Profile {
    /// Message for the inline account-status alert, if one applies.
    pub fn status_alert(&self) -> Option<&str> {
        if self.status != STATUS_NORMAL && !self.status_msg.is_empty() {
            Some(&self.status_msg)
        } else {
            None
        }
    }

    pub fn created_at(&self) -> Option<i64> {
        (self.created_at > 0).then_some(self.created_at)
    }

    pub fn last_login(&self) -> Option<i64> {
        (self.last_login_date > 0).then_some(self.last_login_date)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionRef {
    pub title: String,
    pub url_title: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopAnswer {
    #[serde(deserialize_with = "string_or_number")]
    pub answer_id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub question_id: String,
    pub question_info: QuestionRef,
    pub vote_count: i64,
    pub accepted: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopQuestion {
    #[serde(deserialize_with = "string_or_number")]
    pub question_id: String,
    pub title: String,
    pub url_title: String,
    pub vote_count: i64,
    pub answer_count: i64,
    #[serde(deserialize_with = "string_or_number")]
    pub accepted_answer_id: String,
}

/// Highlights shown on the overview tab.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopSummary {
    pub answer: Vec<TopAnswer>,
    pub question: Vec<TopQuestion>,
}

// ---------------------------------------------------------------------------
// List records
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserBrief {
    pub username: String,
    pub display_name: String,
    pub avatar: String,
    pub rank: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagBrief {
    pub slug_name: String,
    pub display_name: String,
}

/// A question row; used by the question list and the questions/bookmarks tabs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionItem {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub question_id: String,
    pub title: String,
    pub url_title: String,
    pub pin: i32,
    pub status: i32,
    pub vote_count: i64,
    pub answer_count: i64,
    pub view_count: i64,
    #[serde(deserialize_with = "string_or_number")]
    pub accepted_answer_id: String,
    pub created_at: i64,
    pub operated_at: i64,
    pub operation_type: String,
    pub operator: Option<UserBrief>,
    pub tags: Vec<TagBrief>,
}

impl QuestionItem {
    /// Personal lists key questions by `question_id`, the global list by `id`.
    pub fn key(&self) -> &str {
        if self.id.is_empty() {
            &self.question_id
        } else {
            &self.id
        }
    }

    pub fn has_accepted_answer(&self) -> bool {
        self.accepted_answer_id
            .parse::<u64>()
            .map(|id| id >= 1)
            .unwrap_or(false)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerItem {
    #[serde(deserialize_with = "string_or_number")]
    pub answer_id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub question_id: String,
    pub question_info: QuestionRef,
    pub vote_count: i64,
    pub accepted: i32,
    pub create_time: i64,
}

impl AnswerItem {
    pub fn is_accepted(&self) -> bool {
        self.accepted == ANSWER_ACCEPTED
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReputationItem {
    #[serde(deserialize_with = "string_or_number")]
    pub object_id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub question_id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub answer_id: String,
    pub object_type: String,
    pub title: String,
    pub url_title: String,
    pub reputation: i64,
    pub rank_type: String,
    pub created_at: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentItem {
    #[serde(deserialize_with = "string_or_number")]
    pub comment_id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub question_id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub answer_id: String,
    pub title: String,
    pub url_title: String,
    pub content: String,
    pub created_at: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoteItem {
    #[serde(deserialize_with = "string_or_number")]
    pub object_id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub question_id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub answer_id: String,
    pub object_type: String,
    pub title: String,
    pub url_title: String,
    pub vote_type: String,
    pub created_at: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeAward {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    pub icon: String,
    pub level: i32,
    pub earned_count: i64,
}

/// Generic `{count, list}` page as returned by every paginated endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: u64,
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { count: 0, list: Vec::new() }
    }
}

/// The records of one profile tab.
#[derive(Clone, Debug, PartialEq)]
pub enum TabRecords {
    Questions(Vec<QuestionItem>),
    Answers(Vec<AnswerItem>),
    Reputation(Vec<ReputationItem>),
    Comments(Vec<CommentItem>),
    Votes(Vec<VoteItem>),
    Badges(Vec<BadgeAward>),
    /// Tabs without a list endpoint (overview, unknown names).
    None,
}

impl TabRecords {
    pub fn len(&self) -> usize {
        match self {
            TabRecords::Questions(v) => v.len(),
            TabRecords::Answers(v) => v.len(),
            TabRecords::Reputation(v) => v.len(),
            TabRecords::Comments(v) => v.len(),
            TabRecords::Votes(v) => v.len(),
            TabRecords::Badges(v) => v.len(),
            TabRecords::None => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `{count, list}` for one tab.
#[derive(Clone, Debug, PartialEq)]
pub struct ListPayload {
    pub count: u64,
    pub list: TabRecords,
}

impl ListPayload {
    pub fn empty() -> Self {
        Self { count: 0, list: TabRecords::None }
    }
}

/// Backend envelope wrapping every JSON response.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub msg: String,
    pub data: Option<T>,
}

/// Ids arrive as JSON strings from the Go backend but older endpoints emit
/// plain numbers; accept both, `null` becomes empty.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
        Float(f64),
        Null,
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
        Raw::Null => String::new(),
    })
}
