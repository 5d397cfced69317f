//! Workstream categories and the per-archetype effort table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::Percentage;

use super::archetype::Archetype;

/// Workstream categories a downstream planner allocates effort across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkstreamCategory {
    TechnologySystems,
    PhysicalInfrastructure,
    Operations,
    MarketingSales,
}

const HYBRID_EFFORT: &[(WorkstreamCategory, Percentage)] = &[
    (WorkstreamCategory::TechnologySystems, Percentage::new(35)),
    (WorkstreamCategory::PhysicalInfrastructure, Percentage::new(20)),
    (WorkstreamCategory::Operations, Percentage::new(25)),
    (WorkstreamCategory::MarketingSales, Percentage::new(15)),
];

const DIGITAL_FIRST_EFFORT: &[(WorkstreamCategory, Percentage)] = &[
    (WorkstreamCategory::TechnologySystems, Percentage::new(50)),
    (WorkstreamCategory::PhysicalInfrastructure, Percentage::new(10)),
    (WorkstreamCategory::Operations, Percentage::new(15)),
    (WorkstreamCategory::MarketingSales, Percentage::new(20)),
];

/// Fixed effort allocation for an archetype.
///
/// Traditional strategies get no override.
pub fn effort_table(archetype: Archetype) -> &'static [(WorkstreamCategory, Percentage)] {
    match archetype {
        Archetype::Traditional => &[],
        Archetype::Hybrid => HYBRID_EFFORT,
        Archetype::DigitalFirst => DIGITAL_FIRST_EFFORT,
    }
}

/// The effort table as a map.
pub fn effort_adjustments(archetype: Archetype) -> BTreeMap<WorkstreamCategory, Percentage> {
    effort_table(archetype).iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traditional_has_no_override() {
        assert!(effort_adjustments(Archetype::Traditional).is_empty());
    }

    #[test]
    fn hybrid_table() {
        let table = effort_adjustments(Archetype::Hybrid);
        assert_eq!(table[&WorkstreamCategory::TechnologySystems].value(), 35);
        assert_eq!(table[&WorkstreamCategory::PhysicalInfrastructure].value(), 20);
        assert_eq!(table[&WorkstreamCategory::Operations].value(), 25);
        assert_eq!(table[&WorkstreamCategory::MarketingSales].value(), 15);
    }

    #[test]
    fn digital_first_table() {
        let table = effort_adjustments(Archetype::DigitalFirst);
        assert_eq!(table[&WorkstreamCategory::TechnologySystems].value(), 50);
        assert_eq!(table[&WorkstreamCategory::PhysicalInfrastructure].value(), 10);
        assert_eq!(table[&WorkstreamCategory::Operations].value(), 15);
        assert_eq!(table[&WorkstreamCategory::MarketingSales].value(), 20);
    }

    #[test]
    fn table_serializes_with_category_keys() {
        let json = serde_json::to_value(effort_adjustments(Archetype::Hybrid)).unwrap();
        assert_eq!(json["technology_systems"], 35);
        assert_eq!(json["marketing_sales"], 15);
    }
}
