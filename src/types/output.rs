//! Output structures handed back to the shells

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Category, GateState, ReasonCode};

/// Output of one gate tap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TapOutput {
    /// Tap timestamp as fed to the gate (milliseconds)
    pub timestamp_ms: u64,
    /// Whether the tap landed inside the trigger zone
    pub in_zone: bool,
    /// Qualifying taps counted toward unlock after this tap (0 after unlock)
    pub count: u8,
    /// Gate state after this tap
    pub state: GateState,
    /// Whether this tap unlocked the operator view
    pub unlocked: bool,
    /// Reason for the outcome
    pub reason: ReasonCode,
}

impl TapOutput {
    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let color = self.state.color_code();
        let reset = GateState::color_reset();

        format!(
            "{}taps={} | state={} | {}{}",
            color,
            self.count,
            self.state,
            self.reason.code(),
            reset
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "taps={} | state={} | reason={}",
            self.count,
            self.state,
            self.reason.code()
        )
    }
}

/// Output of one submitted vote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteOutcome {
    /// When the vote was recorded
    pub timestamp: DateTime<Utc>,
    /// Category the vote landed in
    pub category: Category,
    /// Numeric rating written to the record
    pub rating: i64,
    /// Session tally for this category after the vote
    pub session_count: u64,
    /// Whether the record reached durable storage
    pub persisted: bool,
}

impl VoteOutcome {
    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "category={} | rating={} | session={} | persisted={}",
            self.category.label().to_lowercase(),
            self.rating,
            self.session_count,
            self.persisted
        )
    }
}
