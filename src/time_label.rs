//! Date and time labels for the message feeds.
//!
//! All functions are pure. Callers pick the time zone (normally
//! `chrono::Local`) and compute `today` once per render pass, so every
//! label in one pass agrees on where the day boundary is.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

/// Format of the date keys used to group messages (`yyyy-MM-dd`).
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Calendar date of `ts` in the given zone.
pub fn local_date<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    ts.with_timezone(tz).date_naive()
}

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Today's date on the local calendar.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Separator label for a date group: "Today", "Yesterday" or
/// "Monday, March 4".
pub fn date_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if today.pred_opt() == Some(date) {
        "Yesterday".to_string()
    } else {
        date.format("%A, %B %-d").to_string()
    }
}

/// Short 24h clock shown in the gutter of compact rows.
pub fn clock_time<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.with_timezone(tz).format("%H:%M").to_string()
}

/// Long form used in hover hints: "Today at 3:04:05 PM".
pub fn full_time<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz, today: NaiveDate) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let local = ts.with_timezone(tz);
    let date = local.date_naive();
    let day = if date == today {
        "Today".to_string()
    } else if today.pred_opt() == Some(date) {
        "Yesterday".to_string()
    } else {
        local.format("%b %-d, %Y").to_string()
    };
    format!("{} at {}", day, local.format("%-I:%M:%S %p"))
}

/// Coarse "time ago" text for thread summaries.
pub fn time_ago(ts: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let minutes = (*now - *ts).num_minutes().max(0);
    match minutes {
        0 => "less than a minute ago".to_string(),
        1 => "1 minute ago".to_string(),
        2..=59 => format!("{} minutes ago", minutes),
        60..=119 => "about 1 hour ago".to_string(),
        120..=1439 => format!("about {} hours ago", minutes / 60),
        1440..=2879 => "1 day ago".to_string(),
        _ => format!("{} days ago", minutes / 1440),
    }
}
