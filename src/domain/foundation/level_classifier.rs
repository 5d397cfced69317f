//! Level Classifier - maps a 0-10 force score to an ordinal level.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Score used when neither a score nor a level is available.
pub const DEFAULT_FORCE_SCORE: f64 = 5.0;

/// Discrete intensity level of a competitive force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForceLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl ForceLevel {
    /// Parses a level label.
    ///
    /// Case-insensitive; `very_low`, `very low` and `very-low` are equivalent.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c })
            .collect();

        match normalized.as_str() {
            "very_low" => Some(ForceLevel::VeryLow),
            "low" => Some(ForceLevel::Low),
            "medium" | "moderate" => Some(ForceLevel::Medium),
            "high" => Some(ForceLevel::High),
            "very_high" => Some(ForceLevel::VeryHigh),
            _ => None,
        }
    }

    /// Wire label of this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            ForceLevel::VeryLow => "very_low",
            ForceLevel::Low => "low",
            ForceLevel::Medium => "medium",
            ForceLevel::High => "high",
            ForceLevel::VeryHigh => "very_high",
        }
    }

    /// True for `low` and `very_low`.
    pub fn is_low(&self) -> bool {
        matches!(self, ForceLevel::VeryLow | ForceLevel::Low)
    }

    /// True for `high` and `very_high`.
    pub fn is_high(&self) -> bool {
        matches!(self, ForceLevel::High | ForceLevel::VeryHigh)
    }
}

impl fmt::Display for ForceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ForceLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ForceLevel::parse(s).ok_or_else(|| {
            ValidationError::invalid_format("level", format!("unknown force level '{}'", s))
        })
    }
}

/// Classifier for force scores.
pub struct LevelClassifier;

impl LevelClassifier {
    /// Classifies a score with fixed thresholds.
    ///
    /// `<=2` very low, `<=4` low, `<=6` medium, `<=8` high, anything else very high.
    /// Out-of-range scores are not corrected.
    pub fn classify(score: f64) -> ForceLevel {
        if score <= 2.0 {
            ForceLevel::VeryLow
        } else if score <= 4.0 {
            ForceLevel::Low
        } else if score <= 6.0 {
            ForceLevel::Medium
        } else if score <= 8.0 {
            ForceLevel::High
        } else {
            ForceLevel::VeryHigh
        }
    }

    /// Resolves the level for a force.
    ///
    /// An attached level wins and the score is not re-evaluated. With neither
    /// present the default score of 5 applies.
    pub fn resolve(score: Option<f64>, level: Option<ForceLevel>) -> ForceLevel {
        match (level, score) {
            (Some(level), _) => level,
            (None, Some(score)) => Self::classify(score),
            (None, None) => Self::classify(DEFAULT_FORCE_SCORE),
        }
    }
}
