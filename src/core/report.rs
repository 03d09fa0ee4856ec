//! Plain-text rendering for export and the terminal operator view

use crate::types::{AggregateMatrix, CategoryTotals, Category, FeedbackRecord};

/// Session report handed to the shell for file delivery
///
/// Format is fixed: header line, then one `<Label>: <count>` line per
/// category in canonical order.
pub fn session_report(totals: &CategoryTotals) -> String {
    format!(
        "Résultats (compteur smileys):\n\
         Excellent: {}\n\
         Bien: {}\n\
         Moyen: {}\n\
         Insuffisant: {}",
        totals.excellent, totals.bien, totals.moyen, totals.insuffisant
    )
}

/// Age × category table for the terminal operator view
pub fn matrix_table(matrix: &AggregateMatrix) -> String {
    use crate::types::AgeBracket;

    let mut out = String::new();

    out.push_str(&format!("{:<13}", "Tranche d'âge"));
    for category in Category::ALL {
        out.push_str(&format!(" | {}", category.label()));
    }
    out.push('\n');

    let width = 13 + Category::ALL
        .iter()
        .map(|c| c.label().len() + 3)
        .sum::<usize>();
    out.push_str(&"-".repeat(width));
    out.push('\n');

    for age in AgeBracket::ALL {
        out.push_str(&format!("{:<13}", age.label()));
        for category in Category::ALL {
            out.push_str(&format!(
                " | {:>w$}",
                matrix.get(category, age),
                w = category.label().len()
            ));
        }
        out.push('\n');
    }

    out
}

/// "Derniers votes" list: one line per record, newest first
pub fn recent_list(records: &[FeedbackRecord]) -> String {
    if records.is_empty() {
        return "Aucun vote enregistré.".to_string();
    }

    records
        .iter()
        .map(|r| {
            format!(
                "{} — {} — {}",
                r.created_at.format("%Y-%m-%d %H:%M:%S"),
                r.age,
                r.category().label().to_lowercase()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// TESTS
// =============================================================================
