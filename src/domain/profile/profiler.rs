//! Strategy profiler - aggregates signals into a strategy profile.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::domain::foundation::Percentage;
use crate::domain::signals::{StrategySignals, AMBIGUOUS_SIGNAL_THRESHOLD};

use super::archetype::{Archetype, TechnologyRole, DIGITAL_FIRST_THRESHOLD};
use super::workstream::{effort_adjustments, WorkstreamCategory};

/// Intensity the profiler gate requires alongside ambiguous mentions.
pub const PROFILER_INTENSITY_THRESHOLD: u8 = DIGITAL_FIRST_THRESHOLD;

/// Revenue plus resource signals the profiler gate requires.
pub const PROFILER_MONETIZATION_THRESHOLD: usize = 2;

/// Channel plus customer-tech signals the profiler gate requires.
pub const PROFILER_REACH_THRESHOLD: usize = 2;

/// Summary of how technology-centric a strategy is and what that implies
/// for workstream planning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyProfile {
    pub digital_intensity: Percentage,
    pub archetype: Archetype,
    pub needs_platform: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technology_role_override: Option<TechnologyRole>,
    pub recommended_categories: BTreeSet<WorkstreamCategory>,
    pub effort_adjustments: BTreeMap<WorkstreamCategory, Percentage>,
}

/// Builds strategy profiles from extracted signals.
pub struct StrategyProfiler;

impl StrategyProfiler {
    /// Profiles a set of signals.
    pub fn profile(signals: &StrategySignals) -> StrategyProfile {
        let digital_intensity = signals.digital_intensity;
        let archetype = Archetype::from_intensity(digital_intensity);

        StrategyProfile {
            digital_intensity,
            archetype,
            needs_platform: Self::needs_platform(signals),
            technology_role_override: Self::technology_role(archetype, signals),
            recommended_categories: Self::recommended_categories(signals),
            effort_adjustments: effort_adjustments(archetype),
        }
    }

    /// The profiler's platform gate.
    ///
    /// Stricter than the extractor's: ambiguous mentions only count when
    /// intensity is digital-first level and both monetization and reach
    /// signals converge. Evaluated on its own, never from the extractor's
    /// answer.
    pub fn needs_platform(signals: &StrategySignals) -> bool {
        if !signals.platform_needs.is_empty() {
            return true;
        }

        let monetization = signals.tech_revenue.len() + signals.tech_resources.len();
        let reach = signals.digital_channels.len() + signals.customer_tech.len();

        signals.platform_ambiguous_signals.len() >= AMBIGUOUS_SIGNAL_THRESHOLD
            && signals.digital_intensity.value() >= PROFILER_INTENSITY_THRESHOLD
            && monetization >= PROFILER_MONETIZATION_THRESHOLD
            && reach >= PROFILER_REACH_THRESHOLD
    }

    /// Role override, or `None` to leave it to a business-type classifier.
    pub fn technology_role(
        archetype: Archetype,
        signals: &StrategySignals,
    ) -> Option<TechnologyRole> {
        match archetype {
            Archetype::DigitalFirst => Some(TechnologyRole::CoreProduct),
            Archetype::Hybrid if !signals.platform_needs.is_empty() => {
                Some(TechnologyRole::OperationalTool)
            }
            _ => None,
        }
    }

    pub fn recommended_categories(signals: &StrategySignals) -> BTreeSet<WorkstreamCategory> {
        let mut categories = BTreeSet::new();

        if !signals.platform_needs.is_empty() {
            categories.insert(WorkstreamCategory::TechnologySystems);
        }
        if !signals.digital_channels.is_empty() {
            categories.insert(WorkstreamCategory::MarketingSales);
            categories.insert(WorkstreamCategory::TechnologySystems);
        }
        if !signals.customer_tech.is_empty() {
            categories.insert(WorkstreamCategory::TechnologySystems);
        }

        categories
    }
}
