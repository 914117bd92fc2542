//! Legacy profile source: the remote artist API.
//!
//! The CMS wraps responses unevenly across deployments: the artist object
//! may sit at the top level, under a `data` wrapper (object or one-element
//! array), and/or behind an `attributes` sub-object. An artist only counts
//! as a DJ profile when its tag list carries the required tag; anything
//! else is a clean miss. The response normalizes into the same
//! `ProfileRecord` the roster produces.

use gloo_net::http::Request;
use serde_json::Value;

use crate::models::{EventWindow, MixEntry, ProfileRecord, SocialsWire};
use crate::utils::bio;

const ARTIST_API_BASE: &str = "/cms/api";

/// Tag an artist must carry to be served as a DJ profile.
const REQUIRED_TAG: &str = "dj";

/// Fetch and normalize one artist. `Ok(None)` when the artist does not
/// exist or is not tagged as a DJ.
pub async fn fetch_artist(dj_id: &str) -> Result<Option<ProfileRecord>, String> {
    let url = format!("{}/artists/{}", ARTIST_API_BASE, urlencoding::encode(dj_id));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Artist request failed: {}", e))?;

    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(format!("Artist fetch failed: {}", response.status_text()));
    }

    let doc: Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse artist: {}", e))?;

    Ok(normalize_artist(&doc))
}

/// Unwrap the response envelope and normalize the artist, or None when the
/// envelope is empty or the artist lacks the required tag.
pub fn normalize_artist(doc: &Value) -> Option<ProfileRecord> {
    let node = match doc.get("data") {
        Some(Value::Array(items)) => items.first()?,
        Some(wrapped) => wrapped,
        None => doc,
    };
    let attrs = node.get("attributes").unwrap_or(node);

    if !has_required_tag(attrs) {
        log::warn!("Artist rejected: not tagged {:?}", REQUIRED_TAG);
        return None;
    }

    let id = node
        .get("id")
        .or_else(|| attrs.get("id"))
        .and_then(id_string)?;

    let bio = match attrs.get("bio") {
        Some(Value::String(text)) => Some(text.clone()),
        Some(rich @ Value::Array(_)) => bio::flatten_rich_text(rich),
        _ => None,
    };

    let socials = attrs
        .get("socials")
        .and_then(|value| serde_json::from_value::<SocialsWire>(value.clone()).ok())
        .map(SocialsWire::into_links)
        .unwrap_or_default();

    let mixes = attrs
        .get("mixes")
        .and_then(|value| serde_json::from_value::<Vec<MixEntry>>(value.clone()).ok())
        .unwrap_or_default();

    let next_event = attrs
        .get("nextEvent")
        .and_then(Value::as_str)
        .and_then(EventWindow::from_start);

    Some(ProfileRecord {
        id,
        name: text_field(attrs, "name").unwrap_or_default(),
        bio,
        artwork_url: text_field(attrs, "artworkUrl"),
        socials,
        next_event,
        profile_url: text_field(attrs, "profileUrl"),
        mixes,
    })
}

fn has_required_tag(attrs: &Value) -> bool {
    match attrs.get("tags") {
        Some(Value::Array(tags)) => tags
            .iter()
            .filter_map(Value::as_str)
            .any(|tag| tag.trim().eq_ignore_ascii_case(REQUIRED_TAG)),
        Some(Value::String(tags)) => tags
            .split(',')
            .any(|tag| tag.trim().eq_ignore_ascii_case(REQUIRED_TAG)),
        _ => false,
    }
}

fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn text_field(attrs: &Value, key: &str) -> Option<String> {
    attrs.get(key).and_then(Value::as_str).map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_data_attributes_envelope() {
        let doc = json!({
            "data": {
                "id": 12,
                "attributes": {
                    "name": "Test DJ",
                    "tags": ["resident", "dj"],
                    "artworkUrl": "https://cdn.radio.test/12.jpg"
                }
            }
        });

        let record = normalize_artist(&doc).unwrap();
        assert_eq!(record.id, "12");
        assert_eq!(record.name, "Test DJ");
        assert_eq!(record.artwork_url.as_deref(), Some("https://cdn.radio.test/12.jpg"));
    }

    #[test]
    fn test_array_envelope_takes_first() {
        let doc = json!({
            "data": [
                {"id": "a", "attributes": {"name": "First", "tags": "dj"}},
                {"id": "b", "attributes": {"name": "Second", "tags": "dj"}}
            ]
        });
        assert_eq!(normalize_artist(&doc).unwrap().name, "First");
    }

    #[test]
    fn test_flat_object_without_envelope() {
        let doc = json!({"id": "dj1", "name": "Flat", "tags": ["dj"]});
        assert_eq!(normalize_artist(&doc).unwrap().name, "Flat");
    }

    #[test]
    fn test_required_tag_filter() {
        let untagged = json!({"id": "x", "name": "Painter", "tags": ["visual-artist"]});
        assert_eq!(normalize_artist(&untagged), None);

        let no_tags = json!({"id": "x", "name": "Nobody"});
        assert_eq!(normalize_artist(&no_tags), None);

        let comma_tags = json!({"id": "x", "name": "Comma", "tags": "resident, DJ"});
        assert!(normalize_artist(&comma_tags).is_some());
    }

    #[test]
    fn test_rich_text_bio_flattens() {
        let doc = json!({
            "data": {
                "id": 3,
                "attributes": {
                    "name": "Rich",
                    "tags": ["dj"],
                    "bio": [
                        {"type": "paragraph", "children": [{"type": "text", "text": "One."}]},
                        {"type": "paragraph", "children": [{"type": "text", "text": "Two."}]}
                    ]
                }
            }
        });

        let record = normalize_artist(&doc).unwrap();
        assert_eq!(record.bio.as_deref(), Some("One.\nTwo."));
    }

    #[test]
    fn test_empty_envelope() {
        assert_eq!(normalize_artist(&json!({"data": []})), None);
    }
}
