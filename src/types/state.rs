//! Gate and view state definitions

use serde::{Deserialize, Serialize};

/// Admin-gate state as seen from the outside
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GateState {
    /// No qualifying tap in flight
    Idle,
    /// One or two qualifying taps inside the rolling window
    Armed,
    /// Third qualifying tap landed, operator view opened (transient)
    Unlocked,
}

impl GateState {
    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            GateState::Idle => "\x1b[90m",     // Gray
            GateState::Armed => "\x1b[33m",    // Yellow
            GateState::Unlocked => "\x1b[32m", // Green
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }
}

impl std::fmt::Display for GateState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GateState::Idle => "IDLE",
            GateState::Armed => "ARMED",
            GateState::Unlocked => "UNLOCKED",
        };
        write!(f, "{}", name)
    }
}

/// Which of the two views is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    /// Public vote view
    Vote,
    /// Hidden operator view with the aggregate matrix
    Admin,
}

impl std::fmt::Display for ViewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ViewState::Vote => "vote",
            ViewState::Admin => "admin",
        };
        write!(f, "{}", name)
    }
}
