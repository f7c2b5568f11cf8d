use crate::domain::due;
use chrono::{DateTime, Duration, NaiveDate, TimeZone};

/// Default length used when truncating task descriptions for previews
pub const DEFAULT_TRUNCATE_LEN: usize = 100;

/// Shortens `text` to at most `max` characters, appending `...` when cut
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Human label for a due date: "Today", "Tomorrow", otherwise e.g. "May 3".
///
/// Days are counted in the time zone of `now`.
pub fn format_due_date<Tz: TimeZone>(due: Option<NaiveDate>, now: DateTime<Tz>) -> Option<String> {
    let due = due?;
    let today = due::today_in(&now);

    let label = if due == today {
        "Today".to_string()
    } else if due == today + Duration::days(1) {
        "Tomorrow".to_string()
    } else {
        due.format("%b %-d").to_string()
    };
    Some(label)
}
