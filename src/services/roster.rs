//! Canonical profile source: the static roster document.
//!
//! The document is either a bare array of records or an object wrapping the
//! array under a `djs` field; anything else logs a warning and reads as an
//! empty roster. Individual malformed entries are skipped, not fatal.

use gloo_net::http::Request;
use serde::Deserialize;

use crate::models::{EventWindow, MixEntry, ProfileRecord, SocialsWire};

/// Roster document path, relative to the host page.
const ROSTER_URL: &str = "/djs.json";

/// One roster entry as serialized in the document. Lenient by design:
/// everything but the identifier may be absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DjRecord {
    #[serde(deserialize_with = "crate::models::flex_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(rename = "artworkUrl", default)]
    pub artwork_url: Option<String>,
    #[serde(default)]
    pub socials: SocialsWire,
    #[serde(rename = "nextEvent", default)]
    pub next_event: Option<String>,
    #[serde(rename = "profileUrl", default)]
    pub profile_url: Option<String>,
    #[serde(default)]
    pub mixes: Vec<MixEntry>,
}

impl DjRecord {
    /// Normalize into the shape the page renders from. An unparsable
    /// `nextEvent` logs and reads as no event (calendar stays disabled).
    pub fn normalize(self) -> ProfileRecord {
        let next_event = self.next_event.as_deref().and_then(|raw| {
            let window = EventWindow::from_start(raw);
            if window.is_none() {
                log::warn!("Unparsable nextEvent {:?} for DJ {:?}", raw, self.id);
            }
            window
        });

        ProfileRecord {
            id: self.id,
            name: self.name,
            bio: self.bio,
            artwork_url: self.artwork_url,
            socials: self.socials.into_links(),
            next_event,
            profile_url: self.profile_url,
            mixes: self.mixes,
        }
    }
}

/// Extract the record list from either document shape.
pub fn parse_roster(doc: &serde_json::Value) -> Vec<DjRecord> {
    let items = if let Some(items) = doc.as_array() {
        items
    } else if let Some(items) = doc.get("djs").and_then(serde_json::Value::as_array) {
        items
    } else {
        log::warn!("Roster document has no top-level array or \"djs\" array");
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match serde_json::from_value(item.clone()) {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!("Skipping malformed roster entry: {}", err);
                None
            }
        })
        .collect()
}

/// The record whose id, compared as a string, equals the requested id.
pub fn find_dj(records: &[DjRecord], dj_id: &str) -> Option<DjRecord> {
    records.iter().find(|record| record.id == dj_id).cloned()
}

/// Fetch and parse the roster document.
pub async fn fetch_roster() -> Result<Vec<DjRecord>, String> {
    let response = Request::get(ROSTER_URL)
        .send()
        .await
        .map_err(|e| format!("Roster request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("Roster fetch failed: {}", response.status_text()));
    }

    let doc: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse roster: {}", e))?;

    Ok(parse_roster(&doc))
}

/// Resolve one profile from the roster. `Ok(None)` when no record matches.
pub async fn load_dj(dj_id: &str) -> Result<Option<ProfileRecord>, String> {
    let records = fetch_roster().await?;
    Ok(find_dj(&records, dj_id).map(DjRecord::normalize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wrapped_document_shape() {
        let doc = json!({"djs": [{"id": "dj1", "name": "Test DJ"}]});
        let records = parse_roster(&doc);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Test DJ");
    }

    #[test]
    fn test_bare_array_shape() {
        let doc = json!([{"id": "dj2", "name": "Other"}]);
        let records = parse_roster(&doc);
        assert_eq!(records.len(), 1);
        assert!(find_dj(&records, "dj2").is_some());
    }

    #[test]
    fn test_unrecognized_shape_reads_empty() {
        assert!(parse_roster(&json!({"residents": []})).is_empty());
        assert!(parse_roster(&json!("nope")).is_empty());
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let doc = json!([
            {"id": "dj1", "name": "Keeps"},
            {"id": "dj2", "mixes": 42},
            "not even an object"
        ]);
        let records = parse_roster(&doc);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "dj1");
    }

    #[test]
    fn test_find_by_numeric_id() {
        let doc = json!([{"id": 7, "name": "Seven"}]);
        let records = parse_roster(&doc);
        assert!(find_dj(&records, "7").is_some());
        assert!(find_dj(&records, "8").is_none());
    }

    #[test]
    fn test_normalize_full_record() {
        let doc = json!([{
            "id": "dj1",
            "name": "Test DJ",
            "bio": "Resident.\nJungle specialist.",
            "artworkUrl": "https://cdn.radio.test/dj1.jpg",
            "socials": {"Instagram": "https://instagram.com/dj1"},
            "nextEvent": "2026-08-12T20:00:00Z",
            "profileUrl": "https://radio.test/dj?id=dj1",
            "mixes": [
                "https://www.mixcloud.com/dj1/spring/",
                {"url": "https://www.mixcloud.com/dj1/summer/", "addedAt": "2026-06-01"}
            ]
        }]);

        let record = parse_roster(&doc).remove(0).normalize();
        assert_eq!(record.socials.len(), 1);
        assert_eq!(record.socials[0].name, "Instagram");
        assert!(record.next_event.is_some());
        assert_eq!(record.mixes.len(), 2);
        assert_eq!(record.mixes[1].added_at.as_deref(), Some("2026-06-01"));
    }

    #[test]
    fn test_normalize_bad_next_event() {
        let doc = json!([{"id": "dj1", "nextEvent": "sometime soon"}]);
        let record = parse_roster(&doc).remove(0).normalize();
        assert_eq!(record.next_event, None);
    }
}
