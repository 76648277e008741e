//! Detection session - owns the lifecycle flag, current display and history
//!
//! Frames go in as already-parsed hands; nothing here knows about the DOM,
//! the camera or the detector callback.

use std::fmt;

use serde::Serialize;
use wasm_bindgen::JsValue;

use super::display::{ConfidenceLevel, DisplayStatus};
use super::history::{GestureHistory, HistoryEntry, HISTORY_CAPACITY};
use crate::classifier::{ClassifierConfig, GestureClassifier, GestureResult};
use crate::hand::Hand;

/// Captures need a confidence strictly above this
pub const CAPTURE_THRESHOLD: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionConfig {
    pub capture_threshold: f32,
    pub history_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            capture_threshold: CAPTURE_THRESHOLD,
            history_capacity: HISTORY_CAPACITY,
        }
    }
}

/// Why a capture was refused
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CaptureError {
    /// Nothing on screen is a gesture above the capture threshold
    NoReliableGesture,
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::NoReliableGesture => {
                f.write_str("No reliable gesture detected. Please try again.")
            }
        }
    }
}

impl std::error::Error for CaptureError {}

impl From<CaptureError> for JsValue {
    fn from(err: CaptureError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Result of feeding one frame to the session
#[derive(Clone, Debug, PartialEq)]
pub enum FrameOutcome {
    /// Detection is stopped; frame ignored
    Inactive,
    NoHand,
    /// One result per hand, in detector order
    Classified(Vec<GestureResult>),
}

/// Per-frame summary handed back to JS
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameReport {
    pub status: &'static str,
    pub confidence: f32,
    pub confidence_text: String,
    pub level: ConfidenceLevel,
    /// Result panel CSS class, background and text colour for `level`
    pub status_class: &'static str,
    pub background: &'static str,
    pub text_color: &'static str,
    pub hands: Vec<GestureResult>,
}

pub struct SessionState {
    classifier: GestureClassifier,
    config: SessionConfig,
    detecting: bool,
    display: DisplayStatus,
    history: GestureHistory,
}

impl SessionState {
    pub fn new() -> Self {
        Self::with_config(ClassifierConfig::default(), SessionConfig::default())
    }

    pub fn with_config(classifier: ClassifierConfig, config: SessionConfig) -> Self {
        Self {
            classifier: GestureClassifier::with_config(classifier),
            config,
            detecting: false,
            display: DisplayStatus::Ready,
            history: GestureHistory::with_capacity(config.history_capacity),
        }
    }

    pub fn start(&mut self) {
        self.detecting = true;
        self.display = DisplayStatus::Detecting;
    }

    pub fn stop(&mut self) {
        self.detecting = false;
        self.display = DisplayStatus::Stopped;
    }

    pub fn is_detecting(&self) -> bool {
        self.detecting
    }

    pub fn display(&self) -> DisplayStatus {
        self.display
    }

    pub fn history(&self) -> &GestureHistory {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Rebuild the classifier with new constants (rule list is reset to default)
    pub fn set_classifier_config(&mut self, config: ClassifierConfig) {
        self.classifier = GestureClassifier::with_config(config);
    }

    pub fn set_capture_threshold(&mut self, threshold: f32) {
        self.config.capture_threshold = threshold;
    }

    /// Classify every hand; the first one drives the display
    pub fn process_frame(&mut self, hands: &[Hand]) -> FrameOutcome {
        if !self.detecting {
            return FrameOutcome::Inactive;
        }

        let results: Vec<GestureResult> = hands.iter().map(|h| self.classifier.classify(h)).collect();

        match results.first() {
            Some(first) => {
                self.display = DisplayStatus::Gesture(*first);
                FrameOutcome::Classified(results)
            }
            None => {
                self.display = DisplayStatus::NoHand;
                FrameOutcome::NoHand
            }
        }
    }

    /// Summary of the current display plus the per-hand results of `outcome`
    pub fn report(&self, outcome: &FrameOutcome) -> FrameReport {
        let hands = match outcome {
            FrameOutcome::Classified(results) => results.clone(),
            _ => Vec::new(),
        };

        let level = self.display.level();
        let (background, text_color) = level.colors();

        FrameReport {
            status: self.display.text(),
            confidence: self.display.confidence(),
            confidence_text: self.display.confidence_text(),
            level,
            status_class: level.status_class(),
            background,
            text_color,
            hands,
        }
    }

    /// Record the displayed gesture if it is reliable enough
    pub fn capture(&mut self, captured_at_ms: f64) -> Result<HistoryEntry, CaptureError> {
        let result = self
            .display
            .gesture()
            .filter(|g| g.confidence > self.config.capture_threshold)
            .ok_or(CaptureError::NoReliableGesture)?;

        let entry = HistoryEntry::new(result, captured_at_ms);
        self.history.push(entry.clone());
        Ok(entry)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
