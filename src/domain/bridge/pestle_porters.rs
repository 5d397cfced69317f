//! PESTLE → Porter's bridge - environmental factors as competitive-force evidence.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::framework::{Magnitude, PestleFactor, PestleOutput};

use super::keywords::{
    matches_any, BUYER_POWER_KEYWORDS, GROWTH_KEYWORDS, REGULATORY_BARRIER_KEYWORDS,
    SUBSTITUTE_ENABLER_KEYWORDS, SUPPLIER_POWER_KEYWORDS,
};

static GROWTH_RATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?\s?%").expect("growth rate pattern is valid"));

/// Direction in which a factor moves a force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerDirection {
    Increases,
    Decreases,
}

impl PowerDirection {
    /// Opportunity framing reads as reduced power, anything else as increased.
    fn from_factor(factor: &PestleFactor) -> Self {
        if factor.is_opportunity() {
            PowerDirection::Decreases
        } else {
            PowerDirection::Increases
        }
    }
}

/// Kind of substitute a technological factor enables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstituteType {
    DigitalChannel,
}

/// A legal factor acting as a barrier to entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegulatoryBarrier {
    pub factor: String,
    pub severity: Magnitude,
    pub interpretation: String,
}

/// An economic factor that shifts buyer power.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyerPowerIndicator {
    pub factor: String,
    pub direction: PowerDirection,
    pub rationale: String,
}

/// An economic factor describing market growth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthSignal {
    pub factor: String,
    /// Percentage quoted in the factor's evidence, e.g. `"12%"`.
    pub growth_rate: Option<String>,
    pub implication: String,
}

/// A technological factor enabling substitute offerings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstituteEnabler {
    pub factor: String,
    pub substitute_type: SubstituteType,
    pub interpretation: String,
}

/// A political factor that shifts supplier power.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierPowerFactor {
    pub factor: String,
    pub direction: PowerDirection,
    pub rationale: String,
}

/// PESTLE evidence reorganized along Porter's forces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeEnhancement {
    pub regulatory_barriers: Vec<RegulatoryBarrier>,
    pub buyer_power_indicators: Vec<BuyerPowerIndicator>,
    pub substitute_enablers: Vec<SubstituteEnabler>,
    pub supplier_power_factors: Vec<SupplierPowerFactor>,
    pub growth_signals: Vec<GrowthSignal>,
    pub pestle_scope: Option<String>,
    pub pestle_confidence: Option<String>,
}

impl BridgeEnhancement {
    /// Total number of bridge entries across all lists.
    pub fn entry_count(&self) -> usize {
        self.regulatory_barriers.len()
            + self.buyer_power_indicators.len()
            + self.substitute_enablers.len()
            + self.supplier_power_factors.len()
            + self.growth_signals.len()
    }
}

/// Transformer from PESTLE output to competitive-force evidence.
pub struct PestlePortersBridge;

impl PestlePortersBridge {
    /// Runs every category rule over the PESTLE factors.
    ///
    /// Each rule emits at most one entry per factor. Rules are independent, so
    /// an economic factor may appear both as a buyer-power indicator and as a
    /// growth signal.
    pub fn transform(pestle: &PestleOutput) -> BridgeEnhancement {
        let factors = &pestle.factors;

        BridgeEnhancement {
            regulatory_barriers: matching(&factors.legal, REGULATORY_BARRIER_KEYWORDS)
                .map(Self::regulatory_barrier)
                .collect(),
            buyer_power_indicators: matching(&factors.economic, BUYER_POWER_KEYWORDS)
                .map(Self::buyer_power_indicator)
                .collect(),
            substitute_enablers: matching(&factors.technological, SUBSTITUTE_ENABLER_KEYWORDS)
                .map(Self::substitute_enabler)
                .collect(),
            supplier_power_factors: matching(&factors.political, SUPPLIER_POWER_KEYWORDS)
                .map(Self::supplier_power_factor)
                .collect(),
            growth_signals: matching(&factors.economic, GROWTH_KEYWORDS)
                .map(Self::growth_signal)
                .collect(),
            pestle_scope: pestle.scope.clone(),
            pestle_confidence: pestle.confidence_level.clone(),
        }
    }

    fn regulatory_barrier(factor: &PestleFactor) -> RegulatoryBarrier {
        RegulatoryBarrier {
            factor: factor.factor.clone(),
            severity: factor.magnitude.unwrap_or_default(),
            interpretation: format!(
                "{} acts as a barrier to entry, raising the cost and time for new competitors",
                factor.factor
            ),
        }
    }

    fn buyer_power_indicator(factor: &PestleFactor) -> BuyerPowerIndicator {
        let direction = PowerDirection::from_factor(factor);
        let rationale = match direction {
            PowerDirection::Decreases => "Stronger purchasing capacity reduces buyer price sensitivity",
            PowerDirection::Increases => "Constrained purchasing capacity heightens buyer price sensitivity",
        };
        BuyerPowerIndicator {
            factor: factor.factor.clone(),
            direction,
            rationale: rationale.to_string(),
        }
    }

    fn growth_signal(factor: &PestleFactor) -> GrowthSignal {
        let implication = if factor.is_opportunity() {
            "Market growth attracts new entrants, may reduce rivalry"
        } else {
            "Stagnant market intensifies rivalry"
        };
        GrowthSignal {
            factor: factor.factor.clone(),
            growth_rate: factor.evidence.as_deref().and_then(extract_growth_rate),
            implication: implication.to_string(),
        }
    }

    fn substitute_enabler(factor: &PestleFactor) -> SubstituteEnabler {
        SubstituteEnabler {
            factor: factor.factor.clone(),
            substitute_type: SubstituteType::DigitalChannel,
            interpretation: format!(
                "{} enables digital alternatives that raise the threat of substitutes",
                factor.factor
            ),
        }
    }

    fn supplier_power_factor(factor: &PestleFactor) -> SupplierPowerFactor {
        let direction = PowerDirection::from_factor(factor);
        let rationale = match direction {
            PowerDirection::Decreases => "Easier sourcing widens supplier options",
            PowerDirection::Increases => "Trade friction narrows supplier options",
        };
        SupplierPowerFactor {
            factor: factor.factor.clone(),
            direction,
            rationale: rationale.to_string(),
        }
    }
}

fn matching<'a>(
    factors: &'a [PestleFactor],
    keywords: &'static [&'static str],
) -> impl Iterator<Item = &'a PestleFactor> {
    factors
        .iter()
        .filter(move |factor| matches_any(&factor.factor, keywords))
}

/// Pulls the first `<digits>%` figure out of evidence text.
fn extract_growth_rate(evidence: &str) -> Option<String> {
    GROWTH_RATE_PATTERN
        .find(evidence)
        .map(|m| m.as_str().replace(' ', ""))
}
