//! Date Formatting
//!
//! Labels for task timestamps and the header date.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

/// 12-hour time with upper-case meridiem, e.g. `3:05 PM`
fn format_time<Tz: TimeZone>(stamp: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    stamp.format("%-I:%M %p").to_string().to_uppercase()
}

/// Label for when a task was added, relative to `now`.
///
/// Calendar days are compared in `now`'s time zone:
/// `Today, 3:05 PM`, `Yesterday, 9:41 AM` or `10/16/26, 7:00 PM`.
pub fn format_date<Tz: TimeZone>(stamp: &DateTime<Utc>, now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    let local = stamp.with_timezone(&now.timezone());
    let time = format_time(&local);

    let day = local.date_naive();
    let today = now.date_naive();

    if day == today {
        format!("Today, {}", time)
    } else if today.pred_opt() == Some(day) {
        format!("Yesterday, {}", time)
    } else {
        format!("{}, {}", local.format("%-m/%-d/%y"), time)
    }
}

/// Header date, e.g. `Sunday, October 18`
pub fn format_header_date<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    now.format("%A, %B %-d").to_string()
}
