//! Satisfaction category definitions

use serde::{Deserialize, Serialize};

/// The four satisfaction categories, best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Rating 5 and above
    Excellent,
    /// Rating 4
    Bien,
    /// Rating 3
    Moyen,
    /// Rating 2 and below
    Insuffisant,
}

impl Category {
    /// Canonical display order
    pub const ALL: [Category; 4] = [
        Category::Excellent,
        Category::Bien,
        Category::Moyen,
        Category::Insuffisant,
    ];

    /// Position in the canonical order
    pub fn index(&self) -> usize {
        match self {
            Category::Excellent => 0,
            Category::Bien => 1,
            Category::Moyen => 2,
            Category::Insuffisant => 3,
        }
    }

    /// Human-facing label (report and operator view)
    pub fn label(&self) -> &'static str {
        match self {
            Category::Excellent => "Excellent",
            Category::Bien => "Bien",
            Category::Moyen => "Moyen",
            Category::Insuffisant => "Insuffisant",
        }
    }

    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            Category::Excellent => "\x1b[32m",        // Green
            Category::Bien => "\x1b[33m",             // Yellow
            Category::Moyen => "\x1b[38;5;208m",      // Orange
            Category::Insuffisant => "\x1b[31m",      // Red
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }

    /// Get smiley for category
    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Excellent => "😀",
            Category::Bien => "🙂",
            Category::Moyen => "😐",
            Category::Insuffisant => "🙁",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "excellent" => Ok(Category::Excellent),
            "bien" => Ok(Category::Bien),
            "moyen" => Ok(Category::Moyen),
            "insuffisant" => Ok(Category::Insuffisant),
            other => Err(format!("unknown category: {}", other)),
        }
    }
}
