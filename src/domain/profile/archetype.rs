//! Strategy archetype and technology role.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Percentage;

/// Intensity at or above which a strategy is digital-first.
pub const DIGITAL_FIRST_THRESHOLD: u8 = 70;

/// Intensity at or above which a strategy is hybrid.
pub const HYBRID_THRESHOLD: u8 = 30;

/// How technology-centric a strategy is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Traditional,
    Hybrid,
    DigitalFirst,
}

impl Archetype {
    /// Classifies a digital-intensity score.
    pub fn from_intensity(intensity: Percentage) -> Self {
        match intensity.value() {
            v if v >= DIGITAL_FIRST_THRESHOLD => Archetype::DigitalFirst,
            v if v >= HYBRID_THRESHOLD => Archetype::Hybrid,
            _ => Archetype::Traditional,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Traditional => "traditional",
            Archetype::Hybrid => "hybrid",
            Archetype::DigitalFirst => "digital_first",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role technology plays in the plan, when the profile can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechnologyRole {
    /// Technology is what the business sells.
    CoreProduct,
    /// Technology supports how the business operates.
    OperationalTool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archetype_thresholds() {
        assert_eq!(Archetype::from_intensity(Percentage::new(0)), Archetype::Traditional);
        assert_eq!(Archetype::from_intensity(Percentage::new(29)), Archetype::Traditional);
        assert_eq!(Archetype::from_intensity(Percentage::new(30)), Archetype::Hybrid);
        assert_eq!(Archetype::from_intensity(Percentage::new(69)), Archetype::Hybrid);
        assert_eq!(Archetype::from_intensity(Percentage::new(70)), Archetype::DigitalFirst);
        assert_eq!(Archetype::from_intensity(Percentage::HUNDRED), Archetype::DigitalFirst);
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(Archetype::DigitalFirst).unwrap(),
            "digital_first"
        );
        assert_eq!(
            serde_json::to_value(TechnologyRole::OperationalTool).unwrap(),
            "operational_tool"
        );
        assert_eq!(Archetype::Hybrid.to_string(), "hybrid");
    }
}
