use chrono::{DateTime, Utc};

/// Format an event start for display, e.g. "Aug 12, 2026 20:00 UTC"
pub fn format_event_date(instant: DateTime<Utc>) -> String {
    instant.format("%b %d, %Y %H:%M UTC").to_string()
}
