//! Feature extraction for gesture classification
//!
//! Turns one hand's 21 landmarks into a fingers-up signature plus the two
//! geometric checks the special-case rules need.

use std::fmt;
use std::str::FromStr;

use crate::hand::{
    Hand, WRIST,
    THUMB_IP, THUMB_TIP,
    INDEX_PIP, INDEX_TIP,
    MIDDLE_PIP, MIDDLE_TIP,
    RING_PIP, RING_TIP,
    PINKY_PIP, PINKY_TIP,
};

/// Fingertip landmark per finger (thumb, index, middle, ring, pinky)
pub const FINGER_TIPS: [usize; 5] = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// Base joint compared against each fingertip
pub const FINGER_BASES: [usize; 5] = [THUMB_IP, INDEX_PIP, MIDDLE_PIP, RING_PIP, PINKY_PIP];

/// Which fingers are extended, in order thumb, index, middle, ring, pinky
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FingerSignature(pub [bool; 5]);

impl FingerSignature {
    pub const ALL_EXTENDED: FingerSignature = FingerSignature([true; 5]);

    /// '0'/'1' pattern, e.g. "01100" for peace
    pub fn pattern(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FingerSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for up in self.0 {
            f.write_str(if up { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Pattern string that is not five '0'/'1' characters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidPattern(pub String);

impl fmt::Display for InvalidPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid finger pattern '{}' (expected 5 of '0'/'1')", self.0)
    }
}

impl std::error::Error for InvalidPattern {}

impl FromStr for FingerSignature {
    type Err = InvalidPattern;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 5 {
            return Err(InvalidPattern(s.to_string()));
        }

        let mut fingers = [false; 5];
        for (finger, byte) in fingers.iter_mut().zip(bytes) {
            *finger = match *byte {
                b'0' => false,
                b'1' => true,
                _ => return Err(InvalidPattern(s.to_string())),
            };
        }
        Ok(FingerSignature(fingers))
    }
}

/// Extract the fingers-up signature
///
/// - Thumb moves sideways: up when tip.x > IP joint x. Assumes the
///   canonical (mirrored selfie) orientation; not flipped for the other hand.
/// - Other fingers: up when tip.y < PIP joint y (smaller y = higher on screen)
pub fn extract_signature(hand: &Hand) -> FingerSignature {
    let mut fingers = [false; 5];

    fingers[0] = hand.landmark(FINGER_TIPS[0]).x > hand.landmark(FINGER_BASES[0]).x;

    let fingers_and_joints = fingers.iter_mut().zip(FINGER_TIPS.iter().zip(FINGER_BASES.iter()));
    for (up, (&tip, &base)) in fingers_and_joints.skip(1) {
        *up = hand.landmark(tip).y < hand.landmark(base).y;
    }

    FingerSignature(fingers)
}

/// Thumb tip to index tip distance in the image plane
pub fn thumb_index_distance(hand: &Hand) -> f32 {
    hand.landmark(THUMB_TIP).planar_distance(&hand.landmark(INDEX_TIP))
}

/// Coarse palm orientation: middle fingertip closer to the camera than the wrist
pub fn palm_faces_camera(hand: &Hand) -> bool {
    hand.landmark(MIDDLE_TIP).z < hand.landmark(WRIST).z
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::Landmark;

    /// Hand with every fingertip below its base and the thumb tucked
    fn curled_hand() -> [Landmark; 21] {
        let mut l = [Landmark::new(0.5, 0.5, 0.0); 21];
        l[THUMB_IP] = Landmark::new(0.5, 0.5, 0.0);
        l[THUMB_TIP] = Landmark::new(0.4, 0.5, 0.0);
        for (&tip, &base) in FINGER_TIPS.iter().zip(FINGER_BASES.iter()).skip(1) {
            l[base] = Landmark::new(0.6, 0.4, 0.0);
            l[tip] = Landmark::new(0.6, 0.6, 0.0);
        }
        l
    }

    #[test]
    fn test_curled_hand_has_no_fingers_up() {
        let hand = Hand::from_landmarks(&curled_hand()).unwrap();
        assert_eq!(extract_signature(&hand).pattern(), "00000");
    }

    #[test]
    fn test_thumb_uses_x_axis() {
        let mut l = curled_hand();
        l[THUMB_TIP].x = 0.6;
        // y of the thumb must not matter
        l[THUMB_TIP].y = 0.9;
        let hand = Hand::from_landmarks(&l).unwrap();
        assert_eq!(extract_signature(&hand).pattern(), "10000");
    }

    #[test]
    fn test_raised_index_and_middle() {
        let mut l = curled_hand();
        l[INDEX_TIP].y = 0.2;
        l[MIDDLE_TIP].y = 0.2;
        let hand = Hand::from_landmarks(&l).unwrap();
        let signature = extract_signature(&hand);
        assert_eq!(signature, FingerSignature([false, true, true, false, false]));
    }

    #[test]
    fn test_tip_level_with_base_is_not_extended() {
        let mut l = curled_hand();
        l[PINKY_TIP].y = l[PINKY_PIP].y;
        l[THUMB_TIP].x = l[THUMB_IP].x;
        let hand = Hand::from_landmarks(&l).unwrap();
        assert_eq!(extract_signature(&hand).pattern(), "00000");
    }

    #[test]
    fn test_pattern_parse() {
        assert_eq!("11001".parse::<FingerSignature>(), Ok(FingerSignature([true, true, false, false, true])));
        assert!("1100".parse::<FingerSignature>().is_err());
        assert!("11a01".parse::<FingerSignature>().is_err());
    }

    #[test]
    fn test_palm_orientation_from_depth() {
        let mut l = curled_hand();
        l[WRIST].z = 0.0;
        l[MIDDLE_TIP].z = -0.1;
        assert!(palm_faces_camera(&Hand::from_landmarks(&l).unwrap()));

        l[MIDDLE_TIP].z = 0.0;
        assert!(!palm_faces_camera(&Hand::from_landmarks(&l).unwrap()));
    }

    #[test]
    fn test_thumb_index_distance() {
        let mut l = curled_hand();
        l[THUMB_TIP] = Landmark::new(0.2, 0.2, 0.0);
        l[INDEX_TIP] = Landmark::new(0.2, 0.5, 0.3);
        let hand = Hand::from_landmarks(&l).unwrap();
        assert!((thumb_index_distance(&hand) - 0.3).abs() < 1e-6);
    }
}
