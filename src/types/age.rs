//! Respondent age brackets

use serde::{Deserialize, Serialize};

/// The six fixed age brackets a respondent can belong to
///
/// Serialized with the range labels the persisted blob uses ("-15", "60+", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    #[serde(rename = "-15")]
    Under15,
    #[serde(rename = "15-19")]
    From15To19,
    #[serde(rename = "20-24")]
    From20To24,
    #[serde(rename = "25-39")]
    From25To39,
    #[serde(rename = "40-59")]
    From40To59,
    #[serde(rename = "60+")]
    Over60,
}

impl AgeBracket {
    /// Canonical display order
    pub const ALL: [AgeBracket; 6] = [
        AgeBracket::Under15,
        AgeBracket::From15To19,
        AgeBracket::From20To24,
        AgeBracket::From25To39,
        AgeBracket::From40To59,
        AgeBracket::Over60,
    ];

    /// Position in the canonical order
    pub fn index(&self) -> usize {
        match self {
            AgeBracket::Under15 => 0,
            AgeBracket::From15To19 => 1,
            AgeBracket::From20To24 => 2,
            AgeBracket::From25To39 => 3,
            AgeBracket::From40To59 => 4,
            AgeBracket::Over60 => 5,
        }
    }

    /// Range label, identical to the persisted token
    pub fn label(&self) -> &'static str {
        match self {
            AgeBracket::Under15 => "-15",
            AgeBracket::From15To19 => "15-19",
            AgeBracket::From20To24 => "20-24",
            AgeBracket::From25To39 => "25-39",
            AgeBracket::From40To59 => "40-59",
            AgeBracket::Over60 => "60+",
        }
    }
}

impl std::fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for AgeBracket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-15" => Ok(AgeBracket::Under15),
            "15-19" => Ok(AgeBracket::From15To19),
            "20-24" => Ok(AgeBracket::From20To24),
            "25-39" => Ok(AgeBracket::From25To39),
            "40-59" => Ok(AgeBracket::From40To59),
            "60+" => Ok(AgeBracket::Over60),
            other => Err(format!("unknown age bracket: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let labels: Vec<&str> = AgeBracket::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels, ["-15", "15-19", "20-24", "25-39", "40-59", "60+"]);
    }

    #[test]
    fn test_serde_round_trip_uses_range_labels() {
        for bracket in AgeBracket::ALL {
            let json = serde_json::to_string(&bracket).unwrap();
            assert_eq!(json, format!("\"{}\"", bracket.label()));
            let back: AgeBracket = serde_json::from_str(&json).unwrap();
            assert_eq!(back, bracket);
        }
    }

    #[test]
    fn test_unknown_bracket_rejected() {
        assert!(serde_json::from_str::<AgeBracket>("\"30-35\"").is_err());
        assert!("30-35".parse::<AgeBracket>().is_err());
    }
}
