//! Translation lookup.
//!
//! Keys are dotted paths (`personal.edit_profile`).  A built-in English bundle
//! covers every key the UI uses; the host page can overlay a locale with
//! `load_translations_js`, passing i18next-style nested JSON.  Missing keys
//! render as the key itself.

use std::cell::RefCell;
use std::collections::HashMap;

use lazy_static::lazy_static;
use serde_json::Value;

lazy_static! {
    static ref DEFAULT_BUNDLE: HashMap<&'static str, &'static str> = {
        let entries: &[(&str, &str)] = &[
            ("personal.edit_profile", "Edit profile"),
            ("personal.overview", "Overview"),
            ("personal.questions", "Questions"),
            ("personal.answers", "Answers"),
            ("personal.bookmarks", "Bookmarks"),
            ("personal.reputation", "Reputation"),
            ("personal.comments", "Comments"),
            ("personal.votes", "Votes"),
            ("personal.badges", "Badges"),
            ("personal.about_me", "About Me"),
            ("personal.about_me_empty", "// Hello, World !"),
            ("personal.top_answers", "Top Answers"),
            ("personal.top_questions", "Top Questions"),
            ("personal.stats", "Stats"),
            ("personal.joined", "Joined"),
            ("personal.last_login", "Seen"),
            ("personal.comma", ","),
            ("personal.x_reputation", "reputation"),
            ("personal.x_answers", "answers"),
            ("personal.x_questions", "questions"),
            ("personal.x_votes", "votes received"),
            ("personal.x_badges", "badges"),
            ("personal.list_count", "{{count}} {{label}}"),
            ("personal.newest", "Newest"),
            ("personal.score", "Score"),
            ("personal.upvote", "upvote"),
            ("personal.downvote", "downvote"),
            ("personal.accepted", "Accepted"),
            ("personal.earned_times", "x{{count}}"),
            ("personal.load_failed", "Could not load this list."),
            ("personal.retry", "Try again"),
            ("question.all_questions", "All Questions"),
            ("question.closed", "closed"),
            ("question.asked", "asked"),
            ("question.answered", "answered"),
            ("question.modified", "modified"),
            ("question.newest", "Newest"),
            ("question.active", "Active"),
            ("question.unanswered", "Unanswered"),
            ("question.recommend", "Recommend"),
            ("question.frequent", "Frequent"),
            ("question.score", "Score"),
            ("question.more", "More"),
            ("question.votes", "votes"),
            ("question.answers", "answers"),
            ("question.views", "views"),
            ("btns.pinned", "Pinned"),
            ("editor.link.text", "Hyperlink"),
            ("editor.link.add_link", "Add hyperlink"),
            ("editor.link.form.fields.url.label", "URL"),
            ("editor.link.form.fields.name.label", "Name"),
            ("editor.link.fill_user_info", "Fill in my name"),
            ("editor.link.btn_cancel", "Cancel"),
            ("editor.link.btn_confirm", "Add"),
            ("form.optional", "(optional)"),
            ("common.empty", "No content yet."),
            ("common.not_found", "Page not found"),
            ("pagination.prev", "Prev"),
            ("pagination.next", "Next"),
            ("dates.just_now", "just now"),
            ("dates.x_minutes_ago", "{{count}}m ago"),
            ("dates.x_hours_ago", "{{count}}h ago"),
        ];
        entries.iter().copied().collect()
    };
}

thread_local! {
    static OVERRIDES: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
}

/// Translate `key`.
pub fn t(key: &str) -> String {
    OVERRIDES
        .with(|o| o.borrow().get(key).cloned())
        .or_else(|| DEFAULT_BUNDLE.get(key).map(|s| s.to_string()))
        .unwrap_or_else(|| key.to_string())
}

/// Translate `key` and substitute `{{name}}` placeholders.
pub fn t_with(key: &str, vars: &[(&str, &str)]) -> String {
    interpolate(&t(key), vars)
}

pub fn interpolate(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in vars {
        out = out.replace(&format!("{{{{{}}}}}", name), value);
    }
    out
}

/// Overlay a locale bundle.  Nested objects are flattened to dotted keys;
/// non-string leaves are ignored.  Returns the number of keys loaded.
pub fn load_translations(json: &str) -> Result<usize, serde_json::Error> {
    let value: Value = serde_json::from_str(json)?;
    let mut flat = HashMap::new();
    flatten("", &value, &mut flat);
    let n = flat.len();
    OVERRIDES.with(|o| o.borrow_mut().extend(flat));
    Ok(n)
}

/// Drop every overlay, back to the built-in bundle.
#[cfg(test)]
fn reset_translations() {
    OVERRIDES.with(|o| o.borrow_mut().clear());
}

fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{}.{}", prefix, k)
                };
                flatten(&key, v, out);
            }
        }
        Value::String(s) if !prefix.is_empty() => {
            out.insert(prefix.to_string(), s.clone());
        }
        _ => {}
    }
}
