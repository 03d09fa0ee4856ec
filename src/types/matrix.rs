//! Aggregate count structures
//!
//! The matrix is always fully populated: all 4 × 6 cells exist and default
//! to zero. It is a pure projection of the record sequence, never persisted.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::types::{AgeBracket, Category};

/// Full category × age-bracket cross-tabulation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateMatrix {
    cells: [[u64; 6]; 4],
}

impl AggregateMatrix {
    /// Create a zeroed matrix
    pub fn new() -> Self {
        Self::default()
    }

    /// Count in one cell
    pub fn get(&self, category: Category, age: AgeBracket) -> u64 {
        self.cells[category.index()][age.index()]
    }

    /// Increment one cell by 1
    pub fn increment(&mut self, category: Category, age: AgeBracket) {
        self.cells[category.index()][age.index()] += 1;
    }

    /// Row sum for one category across all brackets
    pub fn category_total(&self, category: Category) -> u64 {
        self.cells[category.index()].iter().sum()
    }

    /// Sum of all 24 cells
    pub fn total(&self) -> u64 {
        Category::ALL
            .iter()
            .map(|c| self.category_total(*c))
            .sum()
    }

    /// True when no record has landed in any cell
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

// Serialized as nested maps keyed by the public tokens:
// {"excellent": {"-15": 0, ...}, "bien": {...}, ...}
impl Serialize for AggregateMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut outer = serializer.serialize_map(Some(Category::ALL.len()))?;
        for category in Category::ALL {
            let mut row = std::collections::BTreeMap::new();
            for age in AgeBracket::ALL {
                row.insert(age.label(), self.get(category, age));
            }
            outer.serialize_entry(&category, &row)?;
        }
        outer.end()
    }
}

/// Per-category counts, used for the session tally and historical row sums
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub excellent: u64,
    pub bien: u64,
    pub moyen: u64,
    pub insuffisant: u64,
}

impl CategoryTotals {
    /// Count for one category
    pub fn get(&self, category: Category) -> u64 {
        match category {
            Category::Excellent => self.excellent,
            Category::Bien => self.bien,
            Category::Moyen => self.moyen,
            Category::Insuffisant => self.insuffisant,
        }
    }

    /// Increment one category by 1
    pub fn increment(&mut self, category: Category) {
        match category {
            Category::Excellent => self.excellent += 1,
            Category::Bien => self.bien += 1,
            Category::Moyen => self.moyen += 1,
            Category::Insuffisant => self.insuffisant += 1,
        }
    }

    /// Sum over the four categories
    pub fn total(&self) -> u64 {
        self.excellent + self.bien + self.moyen + self.insuffisant
    }
}
