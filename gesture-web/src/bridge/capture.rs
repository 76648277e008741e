//! Capture entry points - record the displayed gesture into history

use wasm_bindgen::prelude::*;
use super::detection::with_session;

/// Locale time string ("10:42:07 AM") for a JS timestamp
fn time_text(ms: f64) -> String {
    js_sys::Date::new(&JsValue::from_f64(ms))
        .to_locale_time_string("default")
        .into()
}

/// Capture the current gesture. Returns the history label, or an error
/// message when nothing reliable is on screen.
#[wasm_bindgen]
pub fn capture_gesture() -> Result<String, JsValue> {
    let now = js_sys::Date::now();
    let entry = with_session(|session| session.capture(now))?;

    let label = entry.label(&time_text(entry.captured_at_ms));
    web_sys::console::log_1(&format!("Captured {}", label).into());
    Ok(label)
}

/// History labels, newest first, as a JSON array of strings
#[wasm_bindgen]
pub fn get_history() -> String {
    let labels: Vec<String> = with_session(|session| {
        session
            .history()
            .iter()
            .map(|e| e.label(&time_text(e.captured_at_ms)))
            .collect()
    });
    serde_json::to_string(&labels).unwrap_or_else(|_| "[]".to_string())
}

#[wasm_bindgen]
pub fn clear_history() {
    with_session(|session| session.clear_history());
}
