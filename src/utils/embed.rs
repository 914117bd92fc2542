//! Mixcloud share-URL to embed-URL transform.
//!
//! A share URL ending in `/` has the `mixcloud.com/` segment rewritten to
//! `mixcloud.com/embed/` with the light-mode flag appended directly after
//! the trailing slash; any other URL gets `/embed/?light=1` appended. Only
//! results that actually contain the embed segment are playable; anything
//! else gets an inline error note instead of a player.

/// Raw transform from a share-style URL to the embed form.
pub fn share_to_embed(mix_url: &str) -> String {
    if mix_url.ends_with('/') {
        format!(
            "{}light=1",
            mix_url.replacen("mixcloud.com/", "mixcloud.com/embed/", 1)
        )
    } else {
        format!("{}/embed/?light=1", mix_url)
    }
}

/// Embed URL for a mix, or None when the transform does not produce a
/// well-formed embed URL.
pub fn checked_embed_url(mix_url: &str) -> Option<String> {
    let embed = share_to_embed(mix_url);
    if embed.contains("mixcloud.com/embed/") {
        Some(embed)
    } else {
        None
    }
}
