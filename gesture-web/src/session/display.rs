//! What the page shows for the current frame
//!
//! The DOM work happens in JS; this decides the text, confidence line and
//! status class so the thresholds live in one place.

use serde::Serialize;

use crate::classifier::GestureResult;

/// Above this the result shows green
pub const CONFIDENT_THRESHOLD: f32 = 0.7;
/// Above this (and not confident) the result shows orange
pub const TENTATIVE_THRESHOLD: f32 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    Confident,
    Tentative,
    Low,
}

impl ConfidenceLevel {
    pub fn from_confidence(confidence: f32) -> Self {
        if confidence > CONFIDENT_THRESHOLD {
            ConfidenceLevel::Confident
        } else if confidence > TENTATIVE_THRESHOLD {
            ConfidenceLevel::Tentative
        } else {
            ConfidenceLevel::Low
        }
    }

    /// CSS status class used by the page
    pub fn status_class(&self) -> &'static str {
        match self {
            ConfidenceLevel::Confident => "status-ready",
            ConfidenceLevel::Tentative => "status-detecting",
            ConfidenceLevel::Low => "status-error",
        }
    }

    /// (background, text colour) for the result panel
    pub fn colors(&self) -> (&'static str, &'static str) {
        match self {
            ConfidenceLevel::Confident => ("linear-gradient(135deg, #4CAF50, #45a049)", "white"),
            ConfidenceLevel::Tentative => ("linear-gradient(135deg, #FF9800, #F57C00)", "white"),
            ConfidenceLevel::Low => ("linear-gradient(135deg, #ff9a9e 0%, #fecfef 100%)", "#333"),
        }
    }
}

/// Current content of the result panel
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DisplayStatus {
    #[default]
    Ready,
    Detecting,
    Stopped,
    NoHand,
    Gesture(GestureResult),
}

impl DisplayStatus {
    pub fn text(&self) -> &'static str {
        match self {
            DisplayStatus::Ready => "Ready to detect...",
            DisplayStatus::Detecting => "Detecting...",
            DisplayStatus::Stopped => "Stopped",
            DisplayStatus::NoHand => "No hand detected",
            DisplayStatus::Gesture(result) => result.name,
        }
    }

    /// Status messages carry no confidence
    pub fn confidence(&self) -> f32 {
        match self {
            DisplayStatus::Gesture(result) => result.confidence,
            _ => 0.0,
        }
    }

    pub fn gesture(&self) -> Option<GestureResult> {
        match self {
            DisplayStatus::Gesture(result) => Some(*result),
            _ => None,
        }
    }

    /// "Confidence: 80.0%", or empty when there is nothing to show
    pub fn confidence_text(&self) -> String {
        let confidence = self.confidence();
        if confidence > 0.0 {
            format!("Confidence: {:.1}%", confidence * 100.0)
        } else {
            String::new()
        }
    }

    pub fn level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_confidence(self.confidence())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_thresholds() {
        assert_eq!(ConfidenceLevel::from_confidence(0.9), ConfidenceLevel::Confident);
        assert_eq!(ConfidenceLevel::from_confidence(0.8), ConfidenceLevel::Confident);
        assert_eq!(ConfidenceLevel::from_confidence(0.7), ConfidenceLevel::Tentative);
        assert_eq!(ConfidenceLevel::from_confidence(0.6), ConfidenceLevel::Tentative);
        assert_eq!(ConfidenceLevel::from_confidence(0.3), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::from_confidence(0.0), ConfidenceLevel::Low);
    }

    #[test]
    fn test_status_texts() {
        assert_eq!(DisplayStatus::default().text(), "Ready to detect...");
        assert_eq!(DisplayStatus::NoHand.confidence_text(), "");
        assert_eq!(DisplayStatus::NoHand.level(), ConfidenceLevel::Low);

        let peace = DisplayStatus::Gesture(GestureResult::new("Peace", 0.8));
        assert_eq!(peace.text(), "Peace");
        assert_eq!(peace.confidence_text(), "Confidence: 80.0%");
        assert_eq!(peace.level().status_class(), "status-ready");
    }
}
