//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod capture;
mod config;
mod detection;

pub use detection::{
    start_detection,
    stop_detection,
    process_hand_landmarks,
    current_gesture_name,
    current_confidence,
    current_confidence_text,
    current_status_class,
    get_hand_connections,
    on_visibility_change,
};

pub use capture::{capture_gesture, get_history, clear_history};

pub use config::{set_classifier_params, set_capture_threshold};
