//! Rating ↔ category mapping
//!
//! A clamped four-bucket step function over all integers: anything at or
//! above 5 is Excellent, anything at or below 2 is Insuffisant. Total, pure,
//! no errors.

use crate::types::Category;

/// Map a raw numeric rating to its satisfaction category
pub fn category_of(rating: i64) -> Category {
    if rating >= 5 {
        Category::Excellent
    } else if rating == 4 {
        Category::Bien
    } else if rating == 3 {
        Category::Moyen
    } else {
        Category::Insuffisant
    }
}

/// Canonical rating written when a shell submits a category token
pub fn rating_of(category: Category) -> i64 {
    match category {
        Category::Excellent => 5,
        Category::Bien => 4,
        Category::Moyen => 3,
        Category::Insuffisant => 2,
    }
}
