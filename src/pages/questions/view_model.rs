//! Question list composer.

use crate::components::pagination::PaginationModel;
use crate::constants::{
    PATH_QUESTIONS, QUESTION_ORDER_KEYS, QUESTION_PAGE_SIZE, QUESTION_PIN_PINNED, QUESTION_STATUS_CLOSED,
};
use crate::error::ApiError;
use crate::i18n::t;
use crate::models::{QuestionItem, TagBrief};
use crate::route::{question_path, with_query, PageQuery};
use crate::state::QuestionListState;

/// Order keys shown as buttons; the rest go into the "more" select.
pub const MAX_ORDER_BUTTONS: usize = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct OrderOption {
    pub key: &'static str,
    pub label: String,
    pub href: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QueryGroupModel {
    pub buttons: Vec<OrderOption>,
    pub more: Vec<OrderOption>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionCard {
    pub key: String,
    pub title: String,
    pub href: String,
    pub pinned: bool,
    pub operator: Option<String>,
    pub time_prefix: String,
    pub time: i64,
    pub votes: i64,
    pub answers: i64,
    pub views: i64,
    pub accepted: bool,
    pub tags: Vec<TagBrief>,
}

#[derive(Debug)]
pub struct QuestionListViewModel<'a> {
    pub heading: String,
    pub query_group: QueryGroupModel,
    pub show_skeleton: bool,
    pub cards: Vec<QuestionCard>,
    pub error: Option<&'a ApiError>,
    pub show_empty: bool,
    pub pagination: Option<PaginationModel>,
}

pub fn query_group(
    keys: &[&'static str],
    current: &str,
    pathname: &str,
    max_buttons: usize,
) -> QueryGroupModel {
    let options: Vec<OrderOption> = keys
        .iter()
        .map(|&key| OrderOption {
            key,
            label: t(&format!("question.{}", key)),
            href: with_query(pathname, 1, key),
            active: key == current,
        })
        .collect();
    let split = max_buttons.min(options.len());
    let mut buttons = options;
    let more = buttons.split_off(split);
    QueryGroupModel { buttons, more }
}

pub fn card(item: &QuestionItem, order: &str) -> QuestionCard {
    let mut title = item.title.clone();
    if item.status == QUESTION_STATUS_CLOSED {
        title.push_str(&format!(" [{}]", t("question.closed")));
    }
    let (time_prefix, time) = if order == "active" {
        (t(&format!("question.{}", item.operation_type)), item.operated_at)
    } else {
        (t("question.asked"), item.created_at)
    };
    QuestionCard {
        key: item.key().to_string(),
        title,
        href: question_path(item.key(), &item.url_title),
        pinned: item.pin == QUESTION_PIN_PINNED,
        operator: item.operator.as_ref().map(|u| {
            if u.display_name.is_empty() {
                u.username.clone()
            } else {
                u.display_name.clone()
            }
        }),
        time_prefix,
        time,
        votes: item.vote_count,
        answers: item.answer_count,
        views: item.view_count,
        accepted: item.has_accepted_answer(),
        tags: item.tags.clone(),
    }
}

pub fn compose<'a>(query: &PageQuery, state: &'a QuestionListState) -> QuestionListViewModel<'a> {
    let order = if query.order.is_empty() { QUESTION_ORDER_KEYS[0] } else { query.order.as_str() };

    let page = state.list.data();
    let count = page.map(|p| p.count).unwrap_or(0);
    let loading = state.list.is_loading();
    let error = state.list.state().error();

    let cards = if state.skeleton_visible {
        Vec::new()
    } else {
        page.map(|p| p.list.iter().map(|item| card(item, order)).collect())
            .unwrap_or_default()
    };

    QuestionListViewModel {
        heading: t("question.all_questions"),
        query_group: query_group(&QUESTION_ORDER_KEYS, order, PATH_QUESTIONS, MAX_ORDER_BUTTONS),
        show_skeleton: state.skeleton_visible,
        cards,
        error,
        show_empty: count == 0 && !loading && error.is_none(),
        pagination: (count > 0).then(|| PaginationModel {
            current: query.page,
            total: count,
            page_size: QUESTION_PAGE_SIZE,
            base_path: PATH_QUESTIONS.to_string(),
            order: order.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Page, UserBrief};

    fn item(id: &str) -> QuestionItem {
        QuestionItem {
            id: id.into(),
            title: format!("Question {}", id),
            url_title: format!("question-{}", id),
            created_at: 100,
            operated_at: 200,
            operation_type: "answered".into(),
            ..QuestionItem::default()
        }
    }

    fn loaded(page: Page<QuestionItem>) -> QuestionListState {
        let mut state = QuestionListState::default();
        let mut commands = Vec::new();
        crate::reducers::questions::sync_fetches(&mut state, &PageQuery::default(), &mut commands);
        let token = match &commands[0] {
            crate::messages::Command::FetchQuestions { token, .. } => *token,
            other => panic!("unexpected {:?}", other),
        };
        assert!(state.list.resolve(token, Ok(page)));
        state
    }

    #[test]
    fn order_switch_splits_buttons_and_more() {
        let g = query_group(&QUESTION_ORDER_KEYS, "frequent", "/questions", 4);
        let keys: Vec<_> = g.buttons.iter().map(|o| o.key).collect();
        assert_eq!(keys, vec!["newest", "active", "unanswered", "recommend"]);
        assert_eq!(g.more.len(), 2);
        assert!(g.more.iter().any(|o| o.active && o.key == "frequent"));
        assert_eq!(g.buttons[0].href, "/questions");
        assert_eq!(g.buttons[1].href, "/questions?order=active");

        let g = query_group(&QUESTION_ORDER_KEYS, "newest", "/questions", 9);
        assert_eq!(g.buttons.len(), QUESTION_ORDER_KEYS.len());
        assert!(g.more.is_empty());
    }

    #[test]
    fn card_decorations() {
        let mut q = item("7");
        q.pin = 2;
        q.status = 2;
        q.accepted_answer_id = "12".into();
        q.operator = Some(UserBrief { username: "bob".into(), ..UserBrief::default() });

        let c = card(&q, "newest");
        assert!(c.pinned);
        assert_eq!(c.title, "Question 7 [closed]");
        assert!(c.accepted);
        assert_eq!(c.operator.as_deref(), Some("bob"));
        assert_eq!((c.time_prefix.as_str(), c.time), ("asked", 100));
        assert_eq!(c.href, "/questions/7/question-7");

        let c = card(&q, "active");
        assert_eq!((c.time_prefix.as_str(), c.time), ("answered", 200));
    }

    #[test]
    fn accepted_needs_positive_id() {
        let mut q = item("1");
        q.accepted_answer_id = "0".into();
        assert!(!card(&q, "newest").accepted);
    }

    #[test]
    fn heading_and_pagination() {
        let state = loaded(Page { count: 42, list: vec![item("1")] });
        let vm = compose(&PageQuery::default(), &state);
        assert_eq!(vm.heading, "All Questions");
        let p = vm.pagination.expect("pagination");
        assert_eq!((p.page_size, p.total), (20, 42));
        assert_eq!(p.base_path, "/questions");
    }

    #[test]
    fn query_order_drives_cards_and_switch() {
        let state = loaded(Page { count: 1, list: vec![item("1")] });
        let q = PageQuery { page: 1, order: "active".into() };
        let vm = compose(&q, &state);
        assert!(vm.query_group.buttons.iter().any(|o| o.active && o.key == "active"));
        assert_eq!(vm.cards[0].time, 200);
    }

    #[test]
    fn empty_only_after_loading() {
        let mut state = QuestionListState::default();
        let mut commands = Vec::new();
        crate::reducers::questions::sync_fetches(&mut state, &PageQuery::default(), &mut commands);
        let vm = compose(&PageQuery::default(), &state);
        assert!(!vm.show_empty);

        let state = loaded(Page::default());
        let vm = compose(&PageQuery::default(), &state);
        assert!(vm.show_empty);
        assert!(vm.pagination.is_none());
    }

    #[test]
    fn skeleton_replaces_cards() {
        let mut state = loaded(Page { count: 1, list: vec![item("1")] });
        state.skeleton_visible = true;
        let vm = compose(&PageQuery::default(), &state);
        assert!(vm.show_skeleton);
        assert!(vm.cards.is_empty());
    }
}
