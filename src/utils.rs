//! Utility helpers shared across the WASM frontend.

use chrono::{DateTime, Datelike, Utc};
use unicode_segmentation::UnicodeSegmentation;

use crate::i18n::{t, t_with};

/// Current time in Unix seconds.
pub fn now_secs() -> i64 {
    Utc::now().timestamp()
}

/// Human readable timestamp relative to `now` (both Unix seconds).
///
/// Under a day ago the output is relative ("5m ago"); older timestamps show
/// the date, with the year only when it differs from `now`'s.
pub fn format_time(ts: i64, now: i64) -> String {
    let delta = now - ts;
    if (0..60).contains(&delta) {
        return t("dates.just_now");
    }
    if (60..3_600).contains(&delta) {
        return t_with("dates.x_minutes_ago", &[("count", &(delta / 60).to_string())]);
    }
    if (3_600..86_400).contains(&delta) {
        return t_with("dates.x_hours_ago", &[("count", &(delta / 3_600).to_string())]);
    }

    let (Some(when), Some(now_dt)) = (
        DateTime::<Utc>::from_timestamp(ts, 0),
        DateTime::<Utc>::from_timestamp(now, 0),
    ) else {
        return String::new();
    };
    if when.year() == now_dt.year() {
        when.format("%b %-d at %H:%M").to_string()
    } else {
        when.format("%b %-d, %Y at %H:%M").to_string()
    }
}

/// `"Joined Mar 3, 2021 at 10:00"` style label.
pub fn format_time_with_prefix(prefix: &str, ts: i64, now: i64) -> String {
    let time = format_time(ts, now);
    if prefix.is_empty() {
        time
    } else {
        format!("{} {}", prefix, time)
    }
}

/// Drop markup from a server-rendered HTML fragment, collapsing whitespace.
pub fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                out.push(' ');
            }
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cut `text` to at most `max` user-perceived characters, appending `…` when
/// shortened.  Grapheme aware so emoji and combining marks stay intact.
pub fn excerpt(text: &str, max: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= max {
        return text.to_string();
    }
    let mut out: String = graphemes[..max].concat();
    out.truncate(out.trim_end().len());
    out.push('…');
    out
}

/// First grapheme of a name, upper-cased; used for avatar fallbacks.
pub fn initial(name: &str) -> String {
    name.graphemes(true)
        .next()
        .map(|g| g.to_uppercase())
        .unwrap_or_else(|| "U".to_string())
}

/// Deterministic avatar background hue for `key`.
pub fn avatar_hue(key: &str) -> u32 {
    key.bytes().fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32)) % 360
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000; // 2023-11-14T22:13:20Z

    #[test]
    fn relative_times() {
        assert_eq!(format_time(NOW - 5, NOW), "just now");
        assert_eq!(format_time(NOW - 125, NOW), "2m ago");
        assert_eq!(format_time(NOW - 7_200, NOW), "2h ago");
    }

    #[test]
    fn absolute_times() {
        // 2023-03-01T10:00:00Z
        assert_eq!(format_time(1_677_664_800, NOW), "Mar 1 at 10:00");
        // 2021-03-01T10:00:00Z
        assert_eq!(format_time(1_614_592_800, NOW), "Mar 1, 2021 at 10:00");
    }

    #[test]
    fn prefix() {
        assert_eq!(format_time_with_prefix("Joined", NOW - 1, NOW), "Joined just now");
    }

    #[test]
    fn tags_are_stripped() {
        assert_eq!(strip_tags("<p>Hello <b>world</b></p>\n<p>again</p>"), "Hello world again");
    }

    #[test]
    fn excerpt_respects_graphemes() {
        assert_eq!(excerpt("short", 10), "short");
        assert_eq!(excerpt("hello world", 6), "hello…");
        assert_eq!(excerpt("👍🏽👍🏽👍🏽", 2), "👍🏽👍🏽…");
    }

    #[test]
    fn initials() {
        assert_eq!(initial("alice"), "A");
        assert_eq!(initial(""), "U");
    }

    #[test]
    fn avatar_hue_is_stable() {
        assert_eq!(avatar_hue("alice"), avatar_hue("alice"));
        assert!(avatar_hue("bob") < 360);
        assert_eq!(avatar_hue(""), 0);
    }
}
