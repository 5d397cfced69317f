//! Signal extractor - buckets insight snippets into strategic signals.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;
use crate::domain::framework::{BusinessContext, Insight};

use super::keywords::{
    CHANNEL_CATEGORY, CUSTOMER_RELATIONSHIP_CATEGORY, CUSTOMER_TECH_PATTERN,
    DIGITAL_CHANNEL_PATTERN, DIGITAL_VALUE_PATTERN, RESOURCE_CATEGORY, REVENUE_CATEGORY,
    TECH_RESOURCE_PATTERN, TECH_REVENUE_PATTERN, VALUE_CATEGORY,
};
use super::platform_intent::{classify_platform_intent, PlatformIntent};

/// Ambiguous platform mentions needed before they count as evidence.
pub const AMBIGUOUS_SIGNAL_THRESHOLD: usize = 2;

/// Intensity the extractor gate requires alongside ambiguous mentions.
pub const EXTRACTOR_INTENSITY_THRESHOLD: u8 = 60;

/// Corroborating tech signals the extractor gate requires.
pub const EXTRACTOR_CORROBORATION_THRESHOLD: usize = 3;

/// Strategic signals extracted from a batch of insights.
///
/// The three platform buckets are mutually exclusive per insight; the other
/// dimensions are independent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategySignals {
    pub platform_needs: Vec<String>,
    pub platform_operational_signals: Vec<String>,
    pub platform_ambiguous_signals: Vec<String>,
    pub digital_channels: Vec<String>,
    pub digital_value_props: Vec<String>,
    pub tech_revenue: Vec<String>,
    pub tech_resources: Vec<String>,
    pub customer_tech: Vec<String>,
    pub digital_intensity: Percentage,
    /// Insights dropped because they had no usable content.
    pub skipped_insights: usize,
}

impl StrategySignals {
    /// True when enough ambiguous platform mentions accumulated to count.
    pub fn has_ambiguous_cluster(&self) -> bool {
        self.platform_ambiguous_signals.len() >= AMBIGUOUS_SIGNAL_THRESHOLD
    }

    /// Presence-gated weighted sum of the buckets, capped at 100.
    pub fn compute_digital_intensity(&self) -> Percentage {
        INTENSITY_WEIGHTS
            .iter()
            .filter(|weight| (weight.applies)(self))
            .fold(Percentage::ZERO, |total, weight| {
                total.saturating_add(weight.points)
            })
    }
}

struct IntensityWeight {
    applies: fn(&StrategySignals) -> bool,
    points: u8,
}

const INTENSITY_WEIGHTS: &[IntensityWeight] = &[
    IntensityWeight {
        applies: |s| !s.platform_needs.is_empty(),
        points: 25,
    },
    IntensityWeight {
        applies: StrategySignals::has_ambiguous_cluster,
        points: 10,
    },
    IntensityWeight {
        applies: |s| !s.platform_operational_signals.is_empty(),
        points: 5,
    },
    IntensityWeight {
        applies: |s| !s.digital_channels.is_empty(),
        points: 20,
    },
    IntensityWeight {
        applies: |s| !s.digital_value_props.is_empty(),
        points: 15,
    },
    IntensityWeight {
        applies: |s| !s.tech_revenue.is_empty(),
        points: 15,
    },
    IntensityWeight {
        applies: |s| !s.tech_resources.is_empty(),
        points: 15,
    },
    IntensityWeight {
        applies: |s| !s.customer_tech.is_empty(),
        points: 10,
    },
];

/// A category-gated keyword dimension.
struct SignalDimension {
    category: &'static str,
    pattern: &'static Lazy<Regex>,
    bucket: fn(&mut StrategySignals) -> &mut Vec<String>,
}

static SIGNAL_DIMENSIONS: &[SignalDimension] = &[
    SignalDimension {
        category: CHANNEL_CATEGORY,
        pattern: &DIGITAL_CHANNEL_PATTERN,
        bucket: |s| &mut s.digital_channels,
    },
    SignalDimension {
        category: VALUE_CATEGORY,
        pattern: &DIGITAL_VALUE_PATTERN,
        bucket: |s| &mut s.digital_value_props,
    },
    SignalDimension {
        category: REVENUE_CATEGORY,
        pattern: &TECH_REVENUE_PATTERN,
        bucket: |s| &mut s.tech_revenue,
    },
    SignalDimension {
        category: RESOURCE_CATEGORY,
        pattern: &TECH_RESOURCE_PATTERN,
        bucket: |s| &mut s.tech_resources,
    },
    SignalDimension {
        category: CUSTOMER_RELATIONSHIP_CATEGORY,
        pattern: &CUSTOMER_TECH_PATTERN,
        bucket: |s| &mut s.customer_tech,
    },
];

/// Extracts strategic signals from insight snippets.
///
/// Pure and stateless: the same insights and context always produce the
/// same signals.
pub struct SignalExtractor;

impl SignalExtractor {
    /// Buckets each insight, skipping malformed ones.
    pub fn extract(insights: &[Insight], context: Option<&BusinessContext>) -> StrategySignals {
        let mut signals = StrategySignals::default();

        for insight in insights {
            let Some(content) = insight.content() else {
                signals.skipped_insights += 1;
                continue;
            };

            let text = content.to_lowercase();
            let category = insight.normalized_category();

            if let Some(intent) = classify_platform_intent(&text, context) {
                let bucket = match intent {
                    PlatformIntent::Product => &mut signals.platform_needs,
                    PlatformIntent::Operational => &mut signals.platform_operational_signals,
                    PlatformIntent::Ambiguous => &mut signals.platform_ambiguous_signals,
                };
                bucket.push(content.to_string());
            }

            for dimension in SIGNAL_DIMENSIONS {
                if category.contains(dimension.category) && dimension.pattern.is_match(&text) {
                    (dimension.bucket)(&mut signals).push(content.to_string());
                }
            }
        }

        if signals.skipped_insights > 0 {
            tracing::debug!(
                skipped = signals.skipped_insights,
                total = insights.len(),
                "Skipped malformed insights"
            );
        }

        signals.digital_intensity = signals.compute_digital_intensity();
        signals
    }

    /// The extractor's platform gate.
    ///
    /// Strong product evidence decides on its own; otherwise it takes a
    /// cluster of ambiguous mentions backed by intensity and corroborating
    /// tech signals.
    pub fn needs_platform(signals: &StrategySignals) -> bool {
        if !signals.platform_needs.is_empty() {
            return true;
        }

        let corroboration = signals.tech_revenue.len()
            + signals.tech_resources.len()
            + signals.customer_tech.len()
            + signals.digital_channels.len();

        signals.has_ambiguous_cluster()
            && signals.digital_intensity.value() >= EXTRACTOR_INTENSITY_THRESHOLD
            && corroboration >= EXTRACTOR_CORROBORATION_THRESHOLD
    }
}
