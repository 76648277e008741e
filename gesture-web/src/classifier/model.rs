//! Rule-based gesture classifier
//!
//! Stateless: each call depends only on the hand passed in. Never fails;
//! anything the rules don't cover becomes "Unknown Gesture".

use serde::Serialize;

use super::features::{extract_signature, FingerSignature};
use super::rules::{default_rules, GestureRule, OK_DISTANCE_THRESHOLD, UNKNOWN_CONFIDENCE, UNKNOWN_GESTURE};
use crate::hand::Hand;

/// Named gesture with its rule confidence
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GestureResult {
    pub name: &'static str,
    pub confidence: f32,
}

impl GestureResult {
    pub fn new(name: &'static str, confidence: f32) -> Self {
        Self { name, confidence }
    }
}

/// Tunable classifier constants
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifierConfig {
    /// Thumb-index tip distance below which the hand reads as "OK"
    pub ok_distance: f32,
    /// Confidence reported for "Unknown Gesture"
    pub unknown_confidence: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            ok_distance: OK_DISTANCE_THRESHOLD,
            unknown_confidence: UNKNOWN_CONFIDENCE,
        }
    }
}

/// Prioritized rule list plus the fallback
#[derive(Clone, Debug)]
pub struct GestureClassifier {
    rules: Vec<GestureRule>,
    fallback: GestureResult,
}

impl GestureClassifier {
    pub fn new() -> Self {
        Self::with_config(ClassifierConfig::default())
    }

    pub fn with_config(config: ClassifierConfig) -> Self {
        Self {
            rules: default_rules(config.ok_distance),
            fallback: GestureResult::new(UNKNOWN_GESTURE, config.unknown_confidence),
        }
    }

    /// Swap in a custom rule list (still first-match-wins)
    pub fn with_rules(rules: Vec<GestureRule>, unknown_confidence: f32) -> Self {
        Self {
            rules,
            fallback: GestureResult::new(UNKNOWN_GESTURE, unknown_confidence),
        }
    }

    pub fn rules(&self) -> &[GestureRule] {
        &self.rules
    }

    /// Classify a hand
    pub fn classify(&self, hand: &Hand) -> GestureResult {
        self.classify_with_signature(hand, extract_signature(hand))
    }

    /// Classify when the signature has already been extracted
    pub fn classify_with_signature(&self, hand: &Hand, signature: FingerSignature) -> GestureResult {
        self.rules
            .iter()
            .find_map(|rule| rule.matches(hand, signature))
            .map(|(name, confidence)| GestureResult::new(name, confidence))
            .unwrap_or(self.fallback)
    }
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new()
    }
}
