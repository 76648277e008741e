//! Hand landmarks (MediaPipe Hands - 21 per hand)
//!
//! Validated construction from the flat Float32Array the JS detector
//! callback hands us. Everything downstream can index without bounds worries.

use super::HandDataError;

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

pub const LANDMARK_COUNT: usize = 21;

/// x, y, z per landmark
pub const FLOATS_PER_HAND: usize = LANDMARK_COUNT * 3;

/// Skeleton connections for the JS overlay (fingers + palm)
pub const HAND_CONNECTIONS: [(usize, usize); 23] = [
    (WRIST, THUMB_CMC), (THUMB_CMC, THUMB_MCP), (THUMB_MCP, THUMB_IP), (THUMB_IP, THUMB_TIP),
    (WRIST, INDEX_MCP), (INDEX_MCP, INDEX_PIP), (INDEX_PIP, INDEX_DIP), (INDEX_DIP, INDEX_TIP),
    (WRIST, MIDDLE_MCP), (MIDDLE_MCP, MIDDLE_PIP), (MIDDLE_PIP, MIDDLE_DIP), (MIDDLE_DIP, MIDDLE_TIP),
    (WRIST, RING_MCP), (RING_MCP, RING_PIP), (RING_PIP, RING_DIP), (RING_DIP, RING_TIP),
    (WRIST, PINKY_MCP), (PINKY_MCP, PINKY_PIP), (PINKY_PIP, PINKY_DIP), (PINKY_DIP, PINKY_TIP),
    (INDEX_MCP, MIDDLE_MCP), (MIDDLE_MCP, RING_MCP), (RING_MCP, PINKY_MCP),
];

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single hand landmark (normalized coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,  // 0-1 normalized to frame width
    pub y: f32,  // 0-1 normalized to frame height
    pub z: f32,  // Relative depth, smaller = closer to camera
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Distance in the image plane (z ignored)
    pub fn planar_distance(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One detected hand. Always holds exactly 21 landmarks.
#[derive(Clone, Debug, PartialEq)]
pub struct Hand {
    landmarks: [Landmark; LANDMARK_COUNT],
}

impl Hand {
    /// Build a hand from a landmark slice; must be exactly 21 long
    pub fn from_landmarks(landmarks: &[Landmark]) -> Result<Self, HandDataError> {
        let landmarks: [Landmark; LANDMARK_COUNT] = landmarks
            .try_into()
            .map_err(|_| HandDataError::WrongLandmarkCount { found: landmarks.len() })?;

        if let Some(landmark) = landmarks.iter().position(|l| !l.is_finite()) {
            return Err(HandDataError::NonFiniteCoordinate { hand: 0, landmark });
        }

        Ok(Self { landmarks })
    }

    /// Build a hand from 63 floats (x, y, z per landmark)
    pub fn from_flat(data: &[f32]) -> Result<Self, HandDataError> {
        if data.len() != FLOATS_PER_HAND {
            return Err(HandDataError::WrongBufferLength {
                found: data.len(),
                expected: FLOATS_PER_HAND,
            });
        }

        let landmarks: Vec<Landmark> = data
            .chunks_exact(3)
            .map(|c| Landmark::new(c[0], c[1], c[2]))
            .collect();

        Self::from_landmarks(&landmarks)
    }

    pub fn landmark(&self, index: usize) -> Landmark {
        self.landmarks[index]
    }

    pub fn landmarks(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.landmarks
    }
}

/// Split a detector buffer of `num_hands * 63` floats into hands
pub fn parse_hands(flat_data: &[f32], num_hands: usize) -> Result<Vec<Hand>, HandDataError> {
    // An overflowing count can never match a real buffer
    let expected = num_hands.checked_mul(FLOATS_PER_HAND).unwrap_or(usize::MAX);
    if flat_data.len() != expected {
        return Err(HandDataError::WrongBufferLength {
            found: flat_data.len(),
            expected,
        });
    }

    flat_data
        .chunks_exact(FLOATS_PER_HAND)
        .enumerate()
        .map(|(h, chunk)| {
            Hand::from_flat(chunk).map_err(|err| match err {
                HandDataError::NonFiniteCoordinate { landmark, .. } => {
                    HandDataError::NonFiniteCoordinate { hand: h, landmark }
                }
                other => other,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_hand(value: f32) -> Vec<f32> {
        vec![value; FLOATS_PER_HAND]
    }

    #[test]
    fn test_from_landmarks_rejects_short_hand() {
        let landmarks = [Landmark::default(); 20];
        assert_eq!(
            Hand::from_landmarks(&landmarks),
            Err(HandDataError::WrongLandmarkCount { found: 20 })
        );
    }

    #[test]
    fn test_from_flat_reads_xyz_in_order() {
        let mut data = flat_hand(0.5);
        data[THUMB_TIP * 3] = 0.1;
        data[THUMB_TIP * 3 + 1] = 0.2;
        data[THUMB_TIP * 3 + 2] = -0.3;

        let hand = Hand::from_flat(&data).unwrap();
        assert_eq!(hand.landmark(THUMB_TIP), Landmark::new(0.1, 0.2, -0.3));
        assert_eq!(hand.landmark(WRIST), Landmark::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_parse_hands_splits_buffer() {
        let mut data = flat_hand(0.1);
        data.extend(flat_hand(0.9));

        let hands = parse_hands(&data, 2).unwrap();
        assert_eq!(hands.len(), 2);
        assert_eq!(hands[1].landmark(PINKY_TIP).x, 0.9);
    }

    #[test]
    fn test_parse_hands_rejects_wrong_length() {
        let data = flat_hand(0.1);
        assert_eq!(
            parse_hands(&data[..60], 1),
            Err(HandDataError::WrongBufferLength { found: 60, expected: 63 })
        );
        assert_eq!(
            parse_hands(&data, 2),
            Err(HandDataError::WrongBufferLength { found: 63, expected: 126 })
        );
    }

    #[test]
    fn test_parse_hands_rejects_huge_hand_count() {
        assert_eq!(
            parse_hands(&[], usize::MAX / 2),
            Err(HandDataError::WrongBufferLength { found: 0, expected: usize::MAX })
        );
        assert!(parse_hands(&flat_hand(0.1), usize::MAX / FLOATS_PER_HAND + 1).is_err());
    }

    #[test]
    fn test_parse_hands_reports_nan_position() {
        let mut data = flat_hand(0.1);
        data.extend(flat_hand(0.2));
        data[FLOATS_PER_HAND + INDEX_TIP * 3 + 1] = f32::NAN;

        assert_eq!(
            parse_hands(&data, 2),
            Err(HandDataError::NonFiniteCoordinate { hand: 1, landmark: INDEX_TIP })
        );
    }

    #[test]
    fn test_empty_frame_parses_to_no_hands() {
        assert_eq!(parse_hands(&[], 0), Ok(Vec::new()));
    }

    #[test]
    fn test_planar_distance_ignores_depth() {
        let a = Landmark::new(0.0, 0.0, 0.0);
        let b = Landmark::new(0.3, 0.4, 5.0);
        assert!((a.planar_distance(&b) - 0.5).abs() < 1e-6);
    }
}
