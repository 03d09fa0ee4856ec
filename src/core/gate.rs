//! Admin gate: disguised triple-tap state machine
//!
//! State transitions:
//! - IDLE → ARMED(1): qualifying tap
//! - ARMED(n) → ARMED(n+1): next qualifying tap within the timeout
//! - ARMED(2) → UNLOCKED → IDLE: third qualifying tap within the timeout
//! - ARMED(n) → ARMED(1): qualifying tap after the timeout lapsed
//!
//! Taps outside the trigger zone are ignored entirely. This is a
//! convenience gesture against accidental discovery, not a security
//! boundary.

use crate::types::{GateState, ReasonCode, TapOutput};
use crate::{TAPS_REQUIRED, TAP_TIMEOUT_MS, TRIGGER_ZONE_PX};

/// Gate configuration: trigger zone geometry and tap window
#[derive(Debug, Clone, Copy)]
pub struct GateConfig {
    /// Viewport width in pixels (the zone anchors to the right edge)
    pub viewport_width: f64,
    /// Viewport height in pixels
    pub viewport_height: f64,
    /// Side of the square trigger zone in the top-right corner
    pub zone_px: f64,
    /// Maximum gap between consecutive qualifying taps (milliseconds)
    pub timeout_ms: u64,
    /// Qualifying taps required to unlock
    pub taps_required: u8,
}

impl GateConfig {
    /// Config with the fixed policy constants for a given viewport
    pub fn for_viewport(width: f64, height: f64) -> Self {
        Self {
            viewport_width: width,
            viewport_height: height,
            zone_px: TRIGGER_ZONE_PX,
            timeout_ms: TAP_TIMEOUT_MS,
            taps_required: TAPS_REQUIRED,
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        // Landscape tablet, the usual kiosk hardware
        Self::for_viewport(1280.0, 800.0)
    }
}

/// Admin-gate state machine
#[derive(Debug)]
pub struct AdminGate {
    config: GateConfig,
    /// Qualifying taps inside the rolling window
    count: u8,
    /// Timestamp of the previous qualifying tap
    last_tap_ms: Option<u64>,
    /// Taps processed (qualifying or not)
    tap_count: u64,
}

impl Default for AdminGate {
    fn default() -> Self {
        Self::new(GateConfig::default())
    }
}

impl AdminGate {
    /// Create a gate in IDLE
    pub fn new(config: GateConfig) -> Self {
        Self {
            config,
            count: 0,
            last_tap_ms: None,
            tap_count: 0,
        }
    }

    /// Feed one pointer event; returns the resulting gate output
    ///
    /// `timestamp_ms` is supplied by the caller so the gate stays clock-free
    /// and deterministic under test.
    pub fn on_tap(&mut self, x: f64, y: f64, timestamp_ms: u64) -> TapOutput {
        self.tap_count += 1;

        if !self.in_zone(x, y) {
            return TapOutput {
                timestamp_ms,
                in_zone: false,
                count: self.count,
                state: self.state(),
                unlocked: false,
                reason: ReasonCode::G001_TAP_OUTSIDE_ZONE,
            };
        }

        let within_window = self
            .last_tap_ms
            .map(|last| timestamp_ms.saturating_sub(last) < self.config.timeout_ms)
            .unwrap_or(false);
        self.last_tap_ms = Some(timestamp_ms);

        if !within_window {
            // This tap becomes the new first tap, count restarts at 1 not 0
            self.count = 1;
            return TapOutput {
                timestamp_ms,
                in_zone: true,
                count: self.count,
                state: GateState::Armed,
                unlocked: false,
                reason: ReasonCode::G002_WINDOW_RESTARTED,
            };
        }

        self.count += 1;
        if self.count >= self.config.taps_required {
            self.count = 0;
            return TapOutput {
                timestamp_ms,
                in_zone: true,
                count: self.count,
                state: GateState::Unlocked,
                unlocked: true,
                reason: ReasonCode::G003_UNLOCKED,
            };
        }

        TapOutput {
            timestamp_ms,
            in_zone: true,
            count: self.count,
            state: GateState::Armed,
            unlocked: false,
            reason: ReasonCode::G002_COUNT_ADVANCED,
        }
    }

    /// Update the viewport the trigger zone anchors to
    pub fn resize(&mut self, width: f64, height: f64) {
        self.config.viewport_width = width;
        self.config.viewport_height = height;
    }

    /// Current state derived from the running count
    pub fn state(&self) -> GateState {
        if self.count == 0 {
            GateState::Idle
        } else {
            GateState::Armed
        }
    }

    /// Qualifying taps inside the current window
    pub fn count(&self) -> u8 {
        self.count
    }

    /// Taps processed since creation (qualifying or not)
    pub fn tap_count(&self) -> u64 {
        self.tap_count
    }

    /// Active configuration
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Drop any in-flight tap sequence
    pub fn reset(&mut self) {
        self.count = 0;
        self.last_tap_ms = None;
    }

    fn in_zone(&self, x: f64, y: f64) -> bool {
        x > self.config.viewport_width - self.config.zone_px && y < self.config.zone_px
    }
}

// =============================================================================
// TESTS
// =============================================================================
