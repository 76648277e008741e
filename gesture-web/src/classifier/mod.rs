//! Classifier module - rule-based static hand gesture classification
//!
//! Feature extraction (fingers-up signature) feeds a prioritized rule list.
//! No learned model, no state between frames.

mod features;
mod model;
mod rules;

pub use features::{
    extract_signature, palm_faces_camera, thumb_index_distance,
    FingerSignature, InvalidPattern, FINGER_BASES, FINGER_TIPS,
};
pub use model::{ClassifierConfig, GestureClassifier, GestureResult};
pub use rules::{
    default_rules, table_rules, GestureRule,
    GESTURE_TABLE, OK_DISTANCE_THRESHOLD, OK_CONFIDENCE, STOP_CONFIDENCE,
    UNKNOWN_GESTURE, UNKNOWN_CONFIDENCE,
};
