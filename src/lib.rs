//! Tapvote: feedback kiosk core engine
//!
//! Turns a stream of single-tap satisfaction votes into durable records,
//! cross-tabulates them into a category × age-bracket matrix, and gates the
//! hidden operator view behind a disguised triple-tap gesture.

pub mod core;
pub mod types;

// =============================================================================
// ADMIN GATE [C]
// =============================================================================

/// Maximum gap between consecutive qualifying taps (milliseconds)
pub const TAP_TIMEOUT_MS: u64 = 700;

/// Qualifying taps required to unlock the operator view
pub const TAPS_REQUIRED: u8 = 3;

/// Side of the square trigger zone anchored to the top-right corner (pixels)
pub const TRIGGER_ZONE_PX: f64 = 150.0;

// =============================================================================
// PERSISTENCE [C]
// =============================================================================

/// Storage key for the persisted feedback sequence
pub const STORAGE_KEY: &str = "satisfaction-feedbacks";

// =============================================================================
// OPERATOR VIEW [C]
// =============================================================================

/// Number of recent votes listed in the operator view
pub const RECENT_VOTES_SHOWN: usize = 20;

/// Suggested filename for the exported session report
pub const EXPORT_FILENAME: &str = "resultats-satisfaction.txt";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
