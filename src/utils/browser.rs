//! Thin wrappers around the browser window APIs the pages use.

/// Open a URL in a new browsing context. `noopener` keeps the new context
/// from reaching back to this page.
pub fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
        {
            log::warn!("Failed to open {}: {:?}", url, err);
        }
    }
}

/// Blocking prompt. Returns None when the user cancels or submits an empty
/// value — callers treat that as an aborted action, not an error.
pub fn prompt(message: &str) -> Option<String> {
    let window = web_sys::window()?;
    window
        .prompt_with_message(message)
        .ok()
        .flatten()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Blocking alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// The current page URL, for calendar event details.
pub fn page_url() -> Option<String> {
    web_sys::window()?.location().href().ok()
}
