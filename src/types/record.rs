//! Durable feedback record model
//!
//! The persisted blob is a plain JSON array of these, newest first:
//! `[{"rating": 5, "age": "20-24", "createdAt": "2024-05-01T10:00:00Z"}, ...]`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::mapper::category_of;
use crate::types::{AgeBracket, Category};

/// A single recorded vote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Raw numeric rating as submitted (nominally 1..=5)
    pub rating: i64,
    /// Respondent age bracket, always one of the six canonical values
    pub age: AgeBracket,
    /// When the vote was recorded (ISO-8601)
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl FeedbackRecord {
    /// Create a record stamped with the current time
    pub fn new(rating: i64, age: AgeBracket) -> Self {
        Self {
            rating,
            age,
            created_at: Utc::now(),
        }
    }

    /// Create a record with an explicit timestamp
    pub fn at(rating: i64, age: AgeBracket, created_at: DateTime<Utc>) -> Self {
        Self {
            rating,
            age,
            created_at,
        }
    }

    /// Derived satisfaction category for this record
    pub fn category(&self) -> Category {
        category_of(self.rating)
    }
}
