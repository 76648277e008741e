//! Errors for malformed hand data coming from the detector

use std::fmt;
use wasm_bindgen::JsValue;

/// Reasons a landmark buffer cannot be turned into hands
#[derive(Clone, Debug, PartialEq)]
pub enum HandDataError {
    /// A hand needs exactly 21 landmarks
    WrongLandmarkCount { found: usize },
    /// Flat buffer length does not match `num_hands * 63`
    WrongBufferLength { found: usize, expected: usize },
    /// NaN or infinite coordinate at (hand, landmark)
    NonFiniteCoordinate { hand: usize, landmark: usize },
}

impl fmt::Display for HandDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandDataError::WrongLandmarkCount { found } => {
                write!(f, "Invalid hand data: {} landmarks (expected 21)", found)
            }
            HandDataError::WrongBufferLength { found, expected } => {
                write!(f, "Invalid hand data length: {} (expected {})", found, expected)
            }
            HandDataError::NonFiniteCoordinate { hand, landmark } => {
                write!(f, "Invalid hand data: non-finite coordinate at hand {} landmark {}", hand, landmark)
            }
        }
    }
}

impl std::error::Error for HandDataError {}

impl From<HandDataError> for JsValue {
    fn from(err: HandDataError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
