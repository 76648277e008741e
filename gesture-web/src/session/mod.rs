//! Session module - detection lifecycle, display status and capture history
//!
//! Re-exports only. All logic in submodules.

mod display;
mod history;
mod state;

pub use display::{ConfidenceLevel, DisplayStatus, CONFIDENT_THRESHOLD, TENTATIVE_THRESHOLD};
pub use history::{GestureHistory, HistoryEntry, HISTORY_CAPACITY};
pub use state::{
    CaptureError, FrameOutcome, FrameReport, SessionConfig, SessionState,
    CAPTURE_THRESHOLD,
};
