//! Question list reducer.

use crate::messages::{Command, Message};
use crate::route::PageQuery;
use crate::state::{AppState, QuestionListState};

pub fn sync_fetches(ql: &mut QuestionListState, query: &PageQuery, commands: &mut Vec<Command>) {
    if let Some(token) = ql.list.request(query.clone()) {
        ql.skeleton_visible = false;
        commands.push(Command::FetchQuestions {
            query: query.clone(),
            token,
        });
        // A cached page renders at once; only a real wait arms the skeleton.
        if ql.list.is_loading() {
            commands.push(Command::StartSkeletonTimer { token });
        }
    }
}

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    let ql = &mut state.question_list;
    match msg {
        Message::QuestionsLoaded { token, result } => {
            if ql.list.resolve(*token, result.clone()) {
                ql.skeleton_visible = false;
                commands.push(Command::RenderActiveView);
            } else {
                crate::debug_log!("Discarding stale question page");
            }
            true
        }
        Message::SkeletonDelayElapsed { token } => {
            if ql.list.is_current(*token) && ql.list.is_loading() && !ql.skeleton_visible {
                ql.skeleton_visible = true;
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
    use crate::fetch::RequestToken;
    use crate::models::{Page, QuestionItem};

    fn first_token(commands: &[Command]) -> RequestToken {
        commands
            .iter()
            .find_map(|c| match c {
                Command::FetchQuestions { token, .. } => Some(*token),
                _ => None,
            })
            .expect("fetch issued")
    }

    #[test]
    fn skeleton_only_after_delay_while_loading() {
        let mut state = AppState::new();
        let mut commands = Vec::new();
        sync_fetches(&mut state.question_list, &PageQuery::default(), &mut commands);
        assert!(matches!(commands.as_slice(), [Command::FetchQuestions { .. }, Command::StartSkeletonTimer { .. }]));
        let token = first_token(&commands);
        assert!(!state.question_list.skeleton_visible);

        commands.clear();
        update(&mut state, &Message::SkeletonDelayElapsed { token }, &mut commands);
        assert!(state.question_list.skeleton_visible);

        commands.clear();
        let page = Page { count: 1, list: vec![QuestionItem::default()] };
        update(&mut state, &Message::QuestionsLoaded { token, result: Ok(page) }, &mut commands);
        assert!(!state.question_list.skeleton_visible);
        assert_eq!(state.question_list.list.data().map(|p| p.count), Some(1));
    }

    #[test]
    fn fast_response_never_shows_skeleton() {
        let mut state = AppState::new();
        let mut commands = Vec::new();
        sync_fetches(&mut state.question_list, &PageQuery::default(), &mut commands);
        let token = first_token(&commands);
        update(
            &mut state,
            &Message::QuestionsLoaded { token, result: Err(ApiError::Network("offline".into())) },
            &mut commands,
        );
        commands.clear();
        update(&mut state, &Message::SkeletonDelayElapsed { token }, &mut commands);
        assert!(!state.question_list.skeleton_visible);
        assert!(commands.is_empty());
    }

    #[test]
    fn superseded_page_is_dropped() {
        let mut state = AppState::new();
        let mut commands = Vec::new();
        sync_fetches(&mut state.question_list, &PageQuery::default(), &mut commands);
        let old = first_token(&commands);
        commands.clear();
        let second = PageQuery { page: 2, ..PageQuery::default() };
        sync_fetches(&mut state.question_list, &second, &mut commands);

        commands.clear();
        update(
            &mut state,
            &Message::QuestionsLoaded { token: old, result: Ok(Page::default()) },
            &mut commands,
        );
        assert!(commands.is_empty());
        assert!(state.question_list.list.is_loading());
    }
}
