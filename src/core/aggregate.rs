//! Aggregation: records → category × age-bracket matrix
//!
//! Pure projections over a record snapshot, recomputed on demand. O(n) in
//! record count; every well-formed record lands in exactly one cell.

use crate::types::{AggregateMatrix, CategoryTotals, FeedbackRecord};

/// Cross-tabulate records into the full 4 × 6 matrix
pub fn compute_matrix(records: &[FeedbackRecord]) -> AggregateMatrix {
    let mut matrix = AggregateMatrix::new();
    for record in records {
        matrix.increment(record.category(), record.age);
    }
    matrix
}

/// Per-category row sums, independent of age
pub fn compute_totals(records: &[FeedbackRecord]) -> CategoryTotals {
    let mut totals = CategoryTotals::default();
    for record in records {
        totals.increment(record.category());
    }
    totals
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AgeBracket, Category};

    fn record(rating: i64, age: AgeBracket) -> FeedbackRecord {
        FeedbackRecord::new(rating, age)
    }

    #[test]
    fn test_two_record_scenario() {
        let records = vec![
            record(5, AgeBracket::From20To24),
            record(2, AgeBracket::Over60),
        ];

        let matrix = compute_matrix(&records);

        assert_eq!(matrix.get(Category::Excellent, AgeBracket::From20To24), 1);
        assert_eq!(matrix.get(Category::Insuffisant, AgeBracket::Over60), 1);
        assert_eq!(matrix.total(), 2, "all other 22 cells must stay zero");
    }

    #[test]
    fn test_every_record_lands_in_exactly_one_cell() {
        let mut records = Vec::new();
        for (i, age) in AgeBracket::ALL.iter().cycle().take(37).enumerate() {
            records.push(record((i % 7) as i64, *age));
        }

        let matrix = compute_matrix(&records);
        assert_eq!(matrix.total(), records.len() as u64);
    }

    #[test]
    fn test_row_sum_consistency() {
        let records = vec![
            record(5, AgeBracket::Under15),
            record(5, AgeBracket::Over60),
            record(4, AgeBracket::From15To19),
            record(1, AgeBracket::From25To39),
            record(0, AgeBracket::From25To39),
        ];

        let matrix = compute_matrix(&records);
        let totals = compute_totals(&records);

        for category in Category::ALL {
            assert_eq!(
                totals.get(category),
                matrix.category_total(category),
                "row sums must agree for {}",
                category
            );
        }
    }

    #[test]
    fn test_empty_records_yield_empty_matrix() {
        let matrix = compute_matrix(&[]);
        assert!(matrix.is_empty());
        assert_eq!(compute_totals(&[]).total(), 0);
    }

    #[test]
    fn test_out_of_domain_ratings_clamp_into_edge_buckets() {
        let records = vec![
            record(9, AgeBracket::From20To24),
            record(-3, AgeBracket::From20To24),
        ];

        let matrix = compute_matrix(&records);
        assert_eq!(matrix.get(Category::Excellent, AgeBracket::From20To24), 1);
        assert_eq!(matrix.get(Category::Insuffisant, AgeBracket::From20To24), 1);
    }
}
