//! Session vote counter
//!
//! Transient tally of votes cast since startup (or the last operator
//! reset). Independent of the persisted store: resetting it never touches
//! history.

use crate::types::{Category, CategoryTotals};

/// In-memory per-session tally
#[derive(Debug, Default)]
pub struct SessionTally {
    counts: CategoryTotals,
}

impl SessionTally {
    /// Create a zeroed tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one vote for a category
    pub fn increment(&mut self, category: Category) {
        self.counts.increment(category);
    }

    /// Zero all four categories
    pub fn reset(&mut self) {
        self.counts = CategoryTotals::default();
    }

    /// Current counts
    pub fn snapshot(&self) -> CategoryTotals {
        self.counts
    }

    /// Count for one category
    pub fn count(&self, category: Category) -> u64 {
        self.counts.get(category)
    }

    /// Votes this session across all categories
    pub fn total(&self) -> u64 {
        self.counts.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_and_snapshot() {
        let mut tally = SessionTally::new();
        tally.increment(Category::Excellent);
        tally.increment(Category::Excellent);
        tally.increment(Category::Moyen);

        let snapshot = tally.snapshot();
        assert_eq!(snapshot.excellent, 2);
        assert_eq!(snapshot.moyen, 1);
        assert_eq!(snapshot.bien, 0);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_reset_zeroes_all_categories() {
        let mut tally = SessionTally::new();
        for category in Category::ALL {
            tally.increment(category);
        }

        tally.reset();
        assert_eq!(tally.total(), 0);
        assert_eq!(tally.snapshot(), CategoryTotals::default());
    }
}
