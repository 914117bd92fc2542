//! Google Calendar deep-link construction.

use chrono::{DateTime, Duration, Utc};

use crate::models::EventWindow;

/// Fixed set length used when the source supplies no end time.
pub const SET_DURATION_HOURS: i64 = 2;

const CALENDAR_BASE: &str = "https://calendar.google.com/calendar/render?action=TEMPLATE";

/// Render URL for a calendar event covering the window. Timestamps are UTC
/// in `YYYYMMDDTHHMMSSZ` form, joined by an encoded `/`.
pub fn event_url(title: &str, window: EventWindow, details: &str) -> String {
    let end = window
        .end
        .unwrap_or_else(|| window.start + Duration::hours(SET_DURATION_HOURS));

    format!(
        "{}&text={}&dates={}%2F{}&details={}",
        CALENDAR_BASE,
        urlencoding::encode(title),
        format_stamp(window.start),
        format_stamp(end),
        urlencoding::encode(details),
    )
}

fn format_stamp(instant: DateTime<Utc>) -> String {
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}
