//! Biography normalization and rendering decisions.
//!
//! A bio arrives as a plain string (possibly already containing markup) or,
//! from the artist API, as a rich-text tree flattened at ingestion. The
//! render decision is made here: markup is sanitized and rendered as-is,
//! plain text becomes one `p` per newline-delimited paragraph.

use std::sync::OnceLock;

use regex::Regex;

pub const NO_BIO_PLACEHOLDER: &str = "No biography available.";

/// Render-ready bio content.
#[derive(Debug, Clone, PartialEq)]
pub enum BioContent {
    /// Sanitized markup, rendered verbatim
    Markup(String),
    /// Plain paragraphs, one element each
    Paragraphs(Vec<String>),
    /// Absent or blank bio; render the placeholder
    Missing,
}

/// Decide how a record's bio renders.
pub fn bio_content(bio: Option<&str>) -> BioContent {
    let text = bio.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return BioContent::Missing;
    }

    if looks_like_markup(text) {
        BioContent::Markup(sanitize_markup(text))
    } else {
        BioContent::Paragraphs(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
        )
    }
}

/// Heuristic: the text carries an HTML-like tag.
pub fn looks_like_markup(text: &str) -> bool {
    static TAG: OnceLock<Regex> = OnceLock::new();
    let pattern = TAG.get_or_init(|| {
        Regex::new(r"</?[a-zA-Z][a-zA-Z0-9-]*(\s[^<>]*)?/?>").expect("valid tag pattern")
    });
    pattern.is_match(text)
}

/// Flatten a rich-text tree (blocks with nested text children) into
/// newline-separated paragraphs, one per block.
pub fn flatten_rich_text(blocks: &serde_json::Value) -> Option<String> {
    let blocks = blocks.as_array()?;
    let mut paragraphs = Vec::new();

    for block in blocks {
        let mut text = String::new();
        collect_text(block, &mut text);
        let text = text.trim();
        if !text.is_empty() {
            paragraphs.push(text.to_string());
        }
    }

    if paragraphs.is_empty() {
        None
    } else {
        Some(paragraphs.join("\n"))
    }
}

fn collect_text(node: &serde_json::Value, out: &mut String) {
    if let Some(text) = node.get("text").and_then(serde_json::Value::as_str) {
        out.push_str(text);
    }
    if let Some(children) = node.get("children").and_then(serde_json::Value::as_array) {
        for child in children {
            collect_text(child, out);
        }
    }
}

/// Sanitize bio markup before it reaches `dangerous_inner_html`.
/// Allows the inline and block tags a biography legitimately uses.
pub fn sanitize_markup(html: &str) -> String {
    use ammonia::Builder;
    use maplit::{hashmap, hashset};

    Builder::default()
        .tags(hashset![
            "h2", "h3", "h4", "p", "br", "strong", "em", "b", "i", "u", "s", "a", "ul", "ol",
            "li", "blockquote", "span",
        ])
        .tag_attributes(hashmap![
            "a" => hashset!["href", "title"],
        ])
        .url_schemes(hashset!["http", "https", "mailto"])
        .link_rel(Some("noopener noreferrer"))
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_and_blank_bios() {
        assert_eq!(bio_content(None), BioContent::Missing);
        assert_eq!(bio_content(Some("")), BioContent::Missing);
        assert_eq!(bio_content(Some("   \n  ")), BioContent::Missing);
    }

    #[test]
    fn test_plain_text_splits_into_paragraphs() {
        let content = bio_content(Some("First paragraph.\nSecond paragraph."));
        assert_eq!(
            content,
            BioContent::Paragraphs(vec![
                "First paragraph.".to_string(),
                "Second paragraph.".to_string()
            ])
        );
    }

    #[test]
    fn test_markup_heuristic() {
        assert!(looks_like_markup("<p>Resident since 2019.</p>"));
        assert!(looks_like_markup("Loves <strong>dubplates</strong>"));
        assert!(looks_like_markup("Line<br/>break"));
        assert!(!looks_like_markup("Plays jungle > everything else"));
        assert!(!looks_like_markup("a < b and b > c"));
    }

    #[test]
    fn test_markup_is_sanitized() {
        let content = bio_content(Some("<p>Hi</p><script>alert(1)</script>"));
        match content {
            BioContent::Markup(html) => {
                assert!(html.contains("<p>Hi</p>"));
                assert!(!html.contains("script"));
            }
            other => panic!("expected markup, got {:?}", other),
        }
    }

    #[test]
    fn test_flatten_rich_text_tree() {
        let blocks = json!([
            {
                "type": "paragraph",
                "children": [
                    {"type": "text", "text": "Started on pirate radio, "},
                    {"type": "link", "children": [{"type": "text", "text": "then clubs"}]},
                    {"type": "text", "text": "."}
                ]
            },
            {
                "type": "paragraph",
                "children": [{"type": "text", "text": "Now a resident."}]
            },
            {
                "type": "paragraph",
                "children": [{"type": "text", "text": "   "}]
            }
        ]);

        let flat = flatten_rich_text(&blocks).unwrap();
        assert_eq!(flat, "Started on pirate radio, then clubs.\nNow a resident.");

        // two blocks, two paragraphs once rendered
        assert_eq!(
            bio_content(Some(flat.as_str())),
            BioContent::Paragraphs(vec![
                "Started on pirate radio, then clubs.".to_string(),
                "Now a resident.".to_string()
            ])
        );
    }

    #[test]
    fn test_flatten_empty_tree() {
        assert_eq!(flatten_rich_text(&json!([])), None);
        assert_eq!(flatten_rich_text(&json!("just a string")), None);
    }
}
