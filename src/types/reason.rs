//! Reason codes for gate decisions and store recovery

use serde::{Deserialize, Serialize};

/// Reason codes attached to gate outputs and store log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum ReasonCode {
    // =========================================================================
    // G001: Tap classification
    // =========================================================================
    /// Tap landed outside the trigger zone, ignored
    G001_TAP_OUTSIDE_ZONE,

    // =========================================================================
    // G002: Tap window
    // =========================================================================
    /// Gap exceeded the timeout, this tap restarts the count at 1
    G002_WINDOW_RESTARTED,
    /// Tap within the timeout, count advanced
    G002_COUNT_ADVANCED,

    // =========================================================================
    // G003: Unlock
    // =========================================================================
    /// Required tap count reached, operator view unlocked
    G003_UNLOCKED,

    // =========================================================================
    // S001: Store recovery
    // =========================================================================
    /// No blob under the storage key, starting empty
    S001_STORE_EMPTY,
    /// Persisted blob was not a JSON array, treated as empty
    S001_BLOB_MALFORMED,
    /// One entry failed to decode and was skipped
    S001_ENTRY_SKIPPED,

    // =========================================================================
    // S002: Persistence
    // =========================================================================
    /// Write to durable storage failed, in-memory sequence kept
    S002_PERSIST_FAILED,
}

impl ReasonCode {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::G001_TAP_OUTSIDE_ZONE => "G001_TAP_OUTSIDE_ZONE",
            Self::G002_WINDOW_RESTARTED => "G002_WINDOW_RESTARTED",
            Self::G002_COUNT_ADVANCED => "G002_COUNT_ADVANCED",
            Self::G003_UNLOCKED => "G003_UNLOCKED",
            Self::S001_STORE_EMPTY => "S001_STORE_EMPTY",
            Self::S001_BLOB_MALFORMED => "S001_BLOB_MALFORMED",
            Self::S001_ENTRY_SKIPPED => "S001_ENTRY_SKIPPED",
            Self::S002_PERSIST_FAILED => "S002_PERSIST_FAILED",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::G001_TAP_OUTSIDE_ZONE => "Tap outside trigger zone",
            Self::G002_WINDOW_RESTARTED => "Tap window lapsed, count restarted",
            Self::G002_COUNT_ADVANCED => "Tap within window, count advanced",
            Self::G003_UNLOCKED => "Operator view unlocked",
            Self::S001_STORE_EMPTY => "No persisted feedback yet",
            Self::S001_BLOB_MALFORMED => "Persisted blob unreadable, starting empty",
            Self::S001_ENTRY_SKIPPED => "Malformed entry skipped",
            Self::S002_PERSIST_FAILED => "Persistence failed, history may lag",
        }
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}
