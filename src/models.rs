//! Normalized profile data model.
//!
//! Every data source (the roster document, the legacy artist API, the mix
//! archive) is normalized into these types at the ingestion boundary, so
//! page code never branches on source shape. Wire-level tolerance lives
//! here: identifiers may arrive as strings or numbers, socials as a list or
//! a map, mixes as bare URLs or tagged objects.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

/// One DJ profile, fully normalized. Read-only for the page session except
/// for the mixes list, which is replaced wholesale on archive refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRecord {
    pub id: String,
    pub name: String,
    pub bio: Option<String>,
    pub artwork_url: Option<String>,
    pub socials: Vec<SocialLink>,
    pub next_event: Option<EventWindow>,
    pub profile_url: Option<String>,
    pub mixes: Vec<MixEntry>,
}

/// A labeled link to a platform profile.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

/// Socials arrive either as a list of `{name, url}` objects or as a
/// `name -> url` map. Both collapse into `Vec<SocialLink>`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SocialsWire {
    List(Vec<SocialLink>),
    Map(BTreeMap<String, String>),
}

impl SocialsWire {
    pub fn into_links(self) -> Vec<SocialLink> {
        match self {
            SocialsWire::List(links) => links,
            SocialsWire::Map(map) => map
                .into_iter()
                .map(|(name, url)| SocialLink { name, url })
                .collect(),
        }
    }
}

impl Default for SocialsWire {
    fn default() -> Self {
        SocialsWire::List(Vec::new())
    }
}

/// One archived mix. The archive may return bare URL strings or
/// `{url, addedAt}` objects; both deserialize into this.
#[derive(Debug, Clone, PartialEq)]
pub struct MixEntry {
    pub url: String,
    pub added_at: Option<String>,
}

impl<'de> Deserialize<'de> for MixEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Tagged {
                url: String,
                #[serde(rename = "addedAt", default)]
                added_at: Option<String>,
            },
            Bare(String),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Tagged { url, added_at } => MixEntry { url, added_at },
            Wire::Bare(url) => MixEntry { url, added_at: None },
        })
    }
}

/// A resolved event window. `end` is only present when the schedule source
/// supplied one; otherwise the calendar link computes it from the fixed
/// set duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventWindow {
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
}

impl EventWindow {
    /// Window from a single event timestamp, e.g. a roster `nextEvent`.
    pub fn from_start(raw: &str) -> Option<Self> {
        parse_timestamp(raw).map(|start| EventWindow { start, end: None })
    }

    /// Window from a start/end pair, e.g. a schedule entry. The start must
    /// parse; an unparsable end degrades to the computed default.
    pub fn from_range(start: &str, end: Option<&str>) -> Option<Self> {
        let start = parse_timestamp(start)?;
        let end = end.and_then(parse_timestamp);
        Some(EventWindow { start, end })
    }
}

/// Parse the timestamp forms the collaborators emit: RFC 3339, a naive
/// ISO-ish datetime, or a bare date. Naive values are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }

    None
}

/// Record identifiers arrive as JSON strings or numbers; all comparisons
/// downstream are string comparisons.
pub fn flex_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mix_entry_shapes() {
        let bare: MixEntry =
            serde_json::from_value(json!("https://www.mixcloud.com/test/show/")).unwrap();
        assert_eq!(bare.url, "https://www.mixcloud.com/test/show/");
        assert_eq!(bare.added_at, None);

        let tagged: MixEntry = serde_json::from_value(json!({
            "url": "https://www.mixcloud.com/test/show/",
            "addedAt": "2024-05-01T12:00:00Z"
        }))
        .unwrap();
        assert_eq!(tagged.url, "https://www.mixcloud.com/test/show/");
        assert_eq!(tagged.added_at.as_deref(), Some("2024-05-01T12:00:00Z"));
    }

    #[test]
    fn test_socials_list_and_map() {
        let list: SocialsWire = serde_json::from_value(json!([
            {"name": "Instagram", "url": "https://instagram.com/test"}
        ]))
        .unwrap();
        let links = list.into_links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].name, "Instagram");

        let map: SocialsWire = serde_json::from_value(json!({
            "Bandcamp": "https://test.bandcamp.com",
            "SoundCloud": "https://soundcloud.com/test"
        }))
        .unwrap();
        let links = map.into_links();
        assert_eq!(links.len(), 2);
        assert!(links.iter().any(|l| l.name == "SoundCloud"));
    }

    #[test]
    fn test_parse_timestamp_forms() {
        assert!(parse_timestamp("2026-08-12T20:00:00Z").is_some());
        assert!(parse_timestamp("2026-08-12T20:00:00+02:00").is_some());
        assert!(parse_timestamp("2026-08-12T20:00:00").is_some());
        assert!(parse_timestamp("2026-08-12 20:00").is_some());
        assert!(parse_timestamp("2026-08-12").is_some());
        assert!(parse_timestamp("next friday").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_event_window_range() {
        let window = EventWindow::from_range(
            "2026-08-12T20:00:00Z",
            Some("2026-08-12T23:00:00Z"),
        )
        .unwrap();
        assert!(window.end.is_some());
        assert!(window.end.unwrap() > window.start);

        // start must parse; a bad end degrades to None
        assert!(EventWindow::from_range("garbage", None).is_none());
        let degraded = EventWindow::from_range("2026-08-12T20:00:00Z", Some("soon")).unwrap();
        assert_eq!(degraded.end, None);
    }

    #[test]
    fn test_flex_id_string_and_number() {
        #[derive(Deserialize)]
        struct Probe {
            #[serde(deserialize_with = "flex_id")]
            id: String,
        }

        let from_text: Probe = serde_json::from_value(json!({"id": "dj1"})).unwrap();
        assert_eq!(from_text.id, "dj1");

        let from_number: Probe = serde_json::from_value(json!({"id": 7})).unwrap();
        assert_eq!(from_number.id, "7");
    }
}
