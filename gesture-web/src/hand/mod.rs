//! Hand module - MediaPipe hand landmark model
//!
//! Re-exports only. All logic in submodules.

mod error;
mod landmarks;

pub use error::HandDataError;
pub use landmarks::{
    parse_hands,
    Hand,
    Landmark,
    // Constants
    LANDMARK_COUNT, FLOATS_PER_HAND, HAND_CONNECTIONS,
    WRIST,
    THUMB_IP, THUMB_TIP,
    INDEX_PIP, INDEX_TIP,
    MIDDLE_PIP, MIDDLE_TIP,
    RING_PIP, RING_TIP,
    PINKY_PIP, PINKY_TIP,
};
