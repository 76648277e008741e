//! Detection entry points and session storage
//!
//! JS forwards every MediaPipe `onResults` callback here as a flat
//! Float32Array; we classify and hand back a JSON frame report.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;
use crate::hand::{parse_hands, HAND_CONNECTIONS};
use crate::session::SessionState;

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static SESSION: RefCell<SessionState> = RefCell::new(SessionState::new());
}

/// Run `f` with mutable access to the session
pub fn with_session<R>(f: impl FnOnce(&mut SessionState) -> R) -> R {
    SESSION.with(|session_cell| f(&mut session_cell.borrow_mut()))
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

#[wasm_bindgen]
pub fn start_detection() {
    with_session(|session| session.start());
    web_sys::console::log_1(&"Detection started".into());
}

#[wasm_bindgen]
pub fn stop_detection() {
    with_session(|session| session.stop());
    web_sys::console::log_1(&"Detection stopped".into());
}

/// Called from JavaScript with `num_hands * 63` floats
/// (21 landmarks × x, y, z per hand). Returns the frame report as JSON.
#[wasm_bindgen]
pub fn process_hand_landmarks(flat_data: &[f32], num_hands: usize) -> Result<String, JsValue> {
    let hands = parse_hands(flat_data, num_hands).map_err(|err| {
        web_sys::console::warn_1(&err.to_string().into());
        JsValue::from(err)
    })?;

    let report = with_session(|session| {
        let outcome = session.process_frame(&hands);
        session.report(&outcome)
    });

    serde_json::to_string(&report).map_err(|e| JsValue::from_str(&format!("Report encoding failed: {}", e)))
}

#[wasm_bindgen]
pub fn current_gesture_name() -> String {
    with_session(|session| session.display().text().to_string())
}

#[wasm_bindgen]
pub fn current_confidence() -> f32 {
    with_session(|session| session.display().confidence())
}

#[wasm_bindgen]
pub fn current_confidence_text() -> String {
    with_session(|session| session.display().confidence_text())
}

#[wasm_bindgen]
pub fn current_status_class() -> String {
    with_session(|session| session.display().level().status_class().to_string())
}

/// Flat (start, end) index pairs for drawing the hand skeleton
#[wasm_bindgen]
pub fn get_hand_connections() -> Vec<u32> {
    HAND_CONNECTIONS
        .iter()
        .flat_map(|(a, b)| [*a as u32, *b as u32])
        .collect()
}

#[wasm_bindgen]
pub fn on_visibility_change(hidden: bool) {
    if hidden {
        web_sys::console::log_1(&"Page hidden - consider pausing detection".into());
    } else {
        web_sys::console::log_1(&"Page visible - resume detection".into());
    }
}
