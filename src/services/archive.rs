//! Mix archive persistence client.
//!
//! The archive is an optional collaborator: list is a cache-busted GET,
//! add/remove are form-encoded POSTs carrying the identifier, the mix URL,
//! and the secret collected from the prompt. The secret is validated
//! server-side only; this client never stores or compares it.

use gloo_net::http::Request;

use crate::models::MixEntry;

const ARCHIVE_BASE: &str = "/api/archive";

/// Fetch the archived mix list for an identifier. The `ts` parameter
/// busts intermediary caches so a just-added show appears immediately.
pub async fn fetch_mixes(dj_id: &str) -> Result<Vec<MixEntry>, String> {
    let url = format!(
        "{}/list?id={}&ts={}",
        ARCHIVE_BASE,
        urlencoding::encode(dj_id),
        chrono::Utc::now().timestamp_millis()
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Mix list request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("Mix list fetch failed: {}", response.status_text()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse mix list: {}", e))
}

/// Add a mix to the archive.
pub async fn add_mix(dj_id: &str, mix_url: &str, secret: &str) -> Result<(), String> {
    post_action("add", dj_id, mix_url, secret).await
}

/// Remove a mix from the archive.
pub async fn remove_mix(dj_id: &str, mix_url: &str, secret: &str) -> Result<(), String> {
    post_action("remove", dj_id, mix_url, secret).await
}

async fn post_action(action: &str, dj_id: &str, mix_url: &str, secret: &str) -> Result<(), String> {
    let response = Request::post(&format!("{}/{}", ARCHIVE_BASE, action))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(form_body(dj_id, mix_url, secret))
        .map_err(|e| format!("Failed to build {} request: {}", action, e))?
        .send()
        .await
        .map_err(|e| format!("{} request failed: {}", action, e))?;

    if !response.ok() {
        return Err(format!("{} rejected: {}", action, response.status_text()));
    }

    Ok(())
}

fn form_body(dj_id: &str, mix_url: &str, secret: &str) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("id", dj_id)
        .append_pair("url", mix_url)
        .append_pair("secret", secret)
        .finish()
}
