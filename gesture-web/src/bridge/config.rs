//! Runtime tuning from JS

use wasm_bindgen::prelude::*;
use super::detection::with_session;
use crate::classifier::ClassifierConfig;

/// Set OK-gesture touch distance and the "Unknown Gesture" confidence
#[wasm_bindgen]
pub fn set_classifier_params(ok_distance: f32, unknown_confidence: f32) {
    let config = ClassifierConfig { ok_distance, unknown_confidence };
    with_session(|session| session.set_classifier_config(config));
    web_sys::console::log_1(
        &format!("Classifier params: ok_distance={}, unknown_confidence={}", ok_distance, unknown_confidence).into()
    );
}

/// Minimum confidence (exclusive) for a capture to be recorded
#[wasm_bindgen]
pub fn set_capture_threshold(threshold: f32) {
    with_session(|session| session.set_capture_threshold(threshold));
}
