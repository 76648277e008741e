//! Gesture Web - static hand gesture recognition for the browser
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! MediaPipe Hands runs in JavaScript and forwards landmarks here; the
//! `hand`, `classifier` and `session` modules are plain Rust and usable
//! without a browser.

pub mod classifier;
pub mod hand;
pub mod session;
mod bridge;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    start_detection, stop_detection, process_hand_landmarks,
    current_gesture_name, current_confidence, current_confidence_text, current_status_class,
    capture_gesture, get_history, clear_history,
    set_classifier_params, set_capture_threshold,
    get_hand_connections, on_visibility_change,
};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Called once MediaPipe Hands is ready on the JS side
#[wasm_bindgen]
pub fn init() {
    console_log!("✅ Gesture classifier initialized ({} rules)", classifier::GestureClassifier::new().rules().len());
}
