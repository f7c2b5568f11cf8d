//! Calendar predicates over task due dates.
//!
//! Due dates are calendar days without a time of day. Every predicate takes
//! the reference day explicitly; callers derive it from an instant in the
//! time zone the board is viewed in (see [`today_in`]). A missing due date
//! never matches.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone};

/// Number of days ahead a board counts tasks as due soon
pub const BOARD_DUE_SOON_DAYS: i64 = 3;

/// Number of days ahead a single task is badged as due soon
pub const TASK_DUE_SOON_DAYS: i64 = 2;

/// Calendar day of `now` in its own time zone
pub fn today_in<Tz: TimeZone>(now: &DateTime<Tz>) -> NaiveDate {
    now.date_naive()
}

/// Last day of the week containing `today`.
///
/// Weeks run Sunday to Saturday; on a Sunday the week ends on the following
/// Sunday, matching a `7 - day_of_week` offset.
pub fn end_of_week(today: NaiveDate) -> NaiveDate {
    let offset = 7 - i64::from(today.weekday().num_days_from_sunday());
    today + Duration::days(offset)
}

pub fn is_due_today(due: Option<NaiveDate>, today: NaiveDate) -> bool {
    due.is_some_and(|d| d == today)
}

/// Due between today and the end of the current week, both inclusive
pub fn is_due_this_week(due: Option<NaiveDate>, today: NaiveDate) -> bool {
    due.is_some_and(|d| d >= today && d <= end_of_week(today))
}

/// Due strictly before the start of today
pub fn is_overdue(due: Option<NaiveDate>, today: NaiveDate) -> bool {
    due.is_some_and(|d| d < today)
}

/// Due today or within the next `days` days
pub fn is_due_within(due: Option<NaiveDate>, today: NaiveDate, days: i64) -> bool {
    due.is_some_and(|d| (0..=days).contains(&(d - today).num_days()))
}

pub fn is_due_soon(due: Option<NaiveDate>, today: NaiveDate) -> bool {
    is_due_within(due, today, TASK_DUE_SOON_DAYS)
}
