//! Upcoming-schedule lookup for the artist API source.
//!
//! The endpoint returns the identifier's upcoming time windows; the
//! earliest one populates the calendar link. Failures here never block the
//! page — the caller logs and leaves the calendar button disabled.

use gloo_net::http::Request;
use serde::Deserialize;

use crate::models::EventWindow;

const SCHEDULE_API_BASE: &str = "/cms/api";

/// One upcoming window as serialized by the endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleWindow {
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
}

/// The earliest parsable window, if any. Unparsable entries are logged
/// and skipped.
pub fn earliest_window(windows: &[ScheduleWindow]) -> Option<EventWindow> {
    windows
        .iter()
        .filter_map(|window| {
            let parsed = EventWindow::from_range(&window.start, window.end.as_deref());
            if parsed.is_none() {
                log::warn!("Skipping unparsable schedule window {:?}", window.start);
            }
            parsed
        })
        .min_by_key(|window| window.start)
}

/// Fetch the identifier's next upcoming window.
pub async fn fetch_next_window(dj_id: &str) -> Result<Option<EventWindow>, String> {
    let url = format!(
        "{}/schedule/{}/upcoming",
        SCHEDULE_API_BASE,
        urlencoding::encode(dj_id)
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Schedule request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("Schedule fetch failed: {}", response.status_text()));
    }

    let windows: Vec<ScheduleWindow> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse schedule: {}", e))?;

    Ok(earliest_window(&windows))
}
