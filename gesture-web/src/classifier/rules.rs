//! Gesture rules - prioritized list, first match wins
//!
//! Order is the tie-break policy: OK beats everything, Stop beats the
//! plain "Hello" table entry, then the static pattern table.

use super::features::{palm_faces_camera, thumb_index_distance, FingerSignature};
use crate::hand::Hand;

/// Thumb and index tips closer than this count as touching (normalized units)
pub const OK_DISTANCE_THRESHOLD: f32 = 0.05;

pub const OK_CONFIDENCE: f32 = 0.8;
pub const STOP_CONFIDENCE: f32 = 0.8;

pub const UNKNOWN_GESTURE: &str = "Unknown Gesture";
pub const UNKNOWN_CONFIDENCE: f32 = 0.3;

/// Static pattern table: (thumb/index/middle/ring/pinky signature, name, confidence).
/// Patterns are decoded at compile time; a malformed row fails the build.
pub const GESTURE_TABLE: [(FingerSignature, &str, f32); 9] = [
    (pattern("00000"), "Fist", 0.9),
    (pattern("11111"), "Hello", 0.9),
    (pattern("10000"), "Yes/Good (Thumbs Up)", 0.8),
    (pattern("01100"), "Peace", 0.8),
    (pattern("01000"), "Point", 0.7),
    (pattern("10001"), "I Love You", 0.8),
    (pattern("01010"), "Rock On", 0.7),
    (pattern("11000"), "Gun", 0.6),
    (pattern("00001"), "Pinky Promise", 0.6),
];

/// Const decoder for table rows. Only used in const context.
const fn pattern(s: &str) -> FingerSignature {
    let bytes = s.as_bytes();
    assert!(bytes.len() == 5, "finger pattern must have 5 characters");

    let mut fingers = [false; 5];
    let mut i = 0;
    while i < 5 {
        fingers[i] = match bytes[i] {
            b'0' => false,
            b'1' => true,
            _ => panic!("finger pattern must be made of '0' and '1'"),
        };
        i += 1;
    }
    FingerSignature(fingers)
}

/// One entry of the rule list
#[derive(Clone, Debug, PartialEq)]
pub enum GestureRule {
    /// Thumb tip and index tip touching (distance < threshold)
    ThumbIndexTouch {
        threshold: f32,
        name: &'static str,
        confidence: f32,
    },
    /// All fingers up with the palm tilted toward the camera
    OpenPalmFacingCamera {
        name: &'static str,
        confidence: f32,
    },
    /// Exact fingers-up signature
    Pattern {
        signature: FingerSignature,
        name: &'static str,
        confidence: f32,
    },
}

impl GestureRule {
    /// Returns (name, confidence) if this rule fires for the hand
    pub fn matches(&self, hand: &Hand, signature: FingerSignature) -> Option<(&'static str, f32)> {
        match *self {
            GestureRule::ThumbIndexTouch { threshold, name, confidence } => {
                (thumb_index_distance(hand) < threshold).then_some((name, confidence))
            }
            GestureRule::OpenPalmFacingCamera { name, confidence } => {
                (signature == FingerSignature::ALL_EXTENDED && palm_faces_camera(hand))
                    .then_some((name, confidence))
            }
            GestureRule::Pattern { signature: expected, name, confidence } => {
                (signature == expected).then_some((name, confidence))
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GestureRule::ThumbIndexTouch { name, .. }
            | GestureRule::OpenPalmFacingCamera { name, .. }
            | GestureRule::Pattern { name, .. } => *name,
        }
    }
}

/// Pattern rules built from `GESTURE_TABLE`
pub fn table_rules() -> Vec<GestureRule> {
    GESTURE_TABLE
        .iter()
        .map(|&(signature, name, confidence)| GestureRule::Pattern { signature, name, confidence })
        .collect()
}

/// The full default rule list in priority order
pub fn default_rules(ok_distance: f32) -> Vec<GestureRule> {
    let mut rules = vec![
        GestureRule::ThumbIndexTouch {
            threshold: ok_distance,
            name: "OK",
            confidence: OK_CONFIDENCE,
        },
        GestureRule::OpenPalmFacingCamera {
            name: "Stop",
            confidence: STOP_CONFIDENCE,
        },
    ];
    rules.extend(table_rules());
    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_rows_decode_to_their_pattern() {
        let patterns: Vec<String> = GESTURE_TABLE.iter().map(|(sig, _, _)| sig.pattern()).collect();
        assert_eq!(
            patterns,
            ["00000", "11111", "10000", "01100", "01000", "10001", "01010", "11000", "00001"]
        );
        assert_eq!(table_rules().len(), GESTURE_TABLE.len());
    }

    #[test]
    fn test_table_patterns_are_unique() {
        for (i, (a, name, _)) in GESTURE_TABLE.iter().enumerate() {
            assert!(
                GESTURE_TABLE[i + 1..].iter().all(|(b, _, _)| b != a),
                "duplicate pattern for {}",
                name
            );
        }
    }

    #[test]
    fn test_default_rule_order() {
        let names: Vec<_> = default_rules(OK_DISTANCE_THRESHOLD).iter().map(|r| r.name()).collect();
        assert_eq!(&names[..4], &["OK", "Stop", "Fist", "Hello"]);
    }
}
