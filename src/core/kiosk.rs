//! Kiosk orchestrator: one vote path shared by every shell
//!
//! vote → category → session tally → durable append; taps feed the gate,
//! which flips the active view to the operator screen on unlock.

use tracing::warn;

use crate::core::aggregate::{compute_matrix, compute_totals};
use crate::core::gate::{AdminGate, GateConfig};
use crate::core::mapper::{category_of, rating_of};
use crate::core::session::SessionTally;
use crate::core::store::{FeedbackStore, Storage};
use crate::types::{
    AgeBracket, AggregateMatrix, Category, CategoryTotals, FeedbackRecord, TapOutput, ViewState,
    VoteOutcome,
};

/// The assembled kiosk core
#[derive(Debug)]
pub struct Kiosk<S: Storage> {
    store: FeedbackStore<S>,
    tally: SessionTally,
    gate: AdminGate,
    view: ViewState,
}

impl<S: Storage> Kiosk<S> {
    /// Assemble a kiosk over injected storage
    pub fn new(storage: S, gate_config: GateConfig) -> Self {
        Self {
            store: FeedbackStore::new(storage),
            tally: SessionTally::new(),
            gate: AdminGate::new(gate_config),
            view: ViewState::Vote,
        }
    }

    /// Record a vote submitted as a category token
    ///
    /// The age bracket is a required typed parameter: the shells enforce
    /// selection before calling in.
    pub fn submit_vote(&mut self, category: Category, age: AgeBracket) -> VoteOutcome {
        self.record(rating_of(category), age)
    }

    /// Record a vote submitted as a raw numeric rating
    pub fn submit_rating(&mut self, rating: i64, age: AgeBracket) -> VoteOutcome {
        self.record(rating, age)
    }

    fn record(&mut self, rating: i64, age: AgeBracket) -> VoteOutcome {
        let category = category_of(rating);
        self.tally.increment(category);

        let record = FeedbackRecord::new(rating, age);
        let timestamp = record.created_at;
        let persisted = match self.store.append(record) {
            Ok(()) => true,
            Err(e) => {
                // Session stays consistent even when history is lost
                warn!(error = %e, "vote counted for the session only");
                false
            }
        };

        VoteOutcome {
            timestamp,
            category,
            rating,
            session_count: self.tally.count(category),
            persisted,
        }
    }

    /// Feed one pointer event to the admin gate
    ///
    /// On unlock the active view switches to the operator screen.
    pub fn on_tap(&mut self, x: f64, y: f64, timestamp_ms: u64) -> TapOutput {
        let output = self.gate.on_tap(x, y, timestamp_ms);
        if output.unlocked {
            self.view = ViewState::Admin;
        }
        output
    }

    /// Full category × age-bracket matrix over the current records
    pub fn matrix(&self) -> AggregateMatrix {
        compute_matrix(self.store.records())
    }

    /// Historical per-category totals over the current records
    pub fn totals(&self) -> CategoryTotals {
        compute_totals(self.store.records())
    }

    /// Votes cast this session
    pub fn session(&self) -> CategoryTotals {
        self.tally.snapshot()
    }

    /// The `n` most recent records, newest first
    pub fn recent(&self, n: usize) -> &[FeedbackRecord] {
        let records = self.store.records();
        &records[..records.len().min(n)]
    }

    /// Records held by the store
    pub fn record_count(&self) -> usize {
        self.store.len()
    }

    /// Active view
    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Leave the operator view ("Retour au vote")
    pub fn back_to_vote(&mut self) {
        self.view = ViewState::Vote;
    }

    /// Operator reset: session tally only, persisted history untouched
    pub fn reset_session(&mut self) {
        self.tally.reset();
    }

    /// Update the viewport the gate's trigger zone anchors to
    pub fn resize(&mut self, width: f64, height: f64) {
        self.gate.resize(width, height);
    }
}

// =============================================================================
// TESTS
// =============================================================================
