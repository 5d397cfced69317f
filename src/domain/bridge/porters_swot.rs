//! Porter's → SWOT bridge - force levels and PESTLE findings as SWOT items.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ForceLevel;
use crate::domain::framework::{
    ForceAssessment, Magnitude, PestleFinding, PestleOutput, PorterForce, PortersOutput,
};

use super::derived_item::{DerivedItem, SourceAnalysis};

/// Maximum derived opportunities and threats kept after assembly.
pub const MAX_DERIVED_ITEMS: usize = 5;

/// Maximum PESTLE opportunities (and, separately, threats) carried over.
pub const MAX_PESTLE_FINDINGS: usize = 2;

/// Priority assigned to items carried over from PESTLE.
pub const PESTLE_ITEM_PRIORITY: u8 = 3;

/// Attractiveness score used when the analysis reports none.
pub const DEFAULT_ATTRACTIVENESS_SCORE: f64 = 5.0;

/// Assessment used when the analysis reports none.
pub const DEFAULT_ASSESSMENT: &str = "moderate";

/// Which SWOT quadrant a rule feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quadrant {
    Opportunity,
    Threat,
}

/// One force → SWOT derivation rule.
struct ForceRule {
    force: PorterForce,
    applies: fn(&ForceLevel) -> bool,
    quadrant: Quadrant,
    item: &'static str,
    description: &'static str,
    magnitude: Magnitude,
    priority: u8,
    priority_rationale: &'static str,
}

// High buyer power and low supplier power have no rule. The asymmetry is
// deliberate until product decides whether those should produce items.
const FORCE_RULES: &[ForceRule] = &[
    ForceRule {
        force: PorterForce::ThreatOfNewEntrants,
        applies: ForceLevel::is_low,
        quadrant: Quadrant::Opportunity,
        item: "Protected market position",
        description: "High entry barriers shield the business from new competitors",
        magnitude: Magnitude::High,
        priority: 1,
        priority_rationale: "Entry barriers determine how long a position can be defended",
    },
    ForceRule {
        force: PorterForce::ThreatOfNewEntrants,
        applies: ForceLevel::is_high,
        quadrant: Quadrant::Threat,
        item: "Vulnerable to new competitors",
        description: "Low entry barriers let new competitors enter quickly",
        magnitude: Magnitude::High,
        priority: 1,
        priority_rationale: "Easy entry erodes share before the business is established",
    },
    ForceRule {
        force: PorterForce::BuyerPower,
        applies: ForceLevel::is_low,
        quadrant: Quadrant::Opportunity,
        item: "Premium pricing sustainable",
        description: "Weak buyer bargaining power supports premium pricing",
        magnitude: Magnitude::Medium,
        priority: 2,
        priority_rationale: "Pricing headroom improves margins but does not decide survival",
    },
    ForceRule {
        force: PorterForce::CompetitiveRivalry,
        applies: ForceLevel::is_low,
        quadrant: Quadrant::Opportunity,
        item: "First-mover opportunity",
        description: "Low rivalry leaves room to establish the category position first",
        magnitude: Magnitude::High,
        priority: 1,
        priority_rationale: "First-mover windows close as rivals arrive",
    },
    ForceRule {
        force: PorterForce::SupplierPower,
        applies: ForceLevel::is_high,
        quadrant: Quadrant::Threat,
        item: "Supplier dependency risk",
        description: "Concentrated suppliers can dictate price and availability",
        magnitude: Magnitude::Medium,
        priority: 2,
        priority_rationale: "Supplier leverage squeezes margins and can disrupt supply",
    },
];

/// Market attractiveness summary passed through from Porter's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketContext {
    pub attractiveness_score: f64,
    pub assessment: String,
    pub rationale: Option<String>,
}

impl Default for MarketContext {
    fn default() -> Self {
        Self {
            attractiveness_score: DEFAULT_ATTRACTIVENESS_SCORE,
            assessment: DEFAULT_ASSESSMENT.to_string(),
            rationale: None,
        }
    }
}

/// SWOT items derived from Porter's forces and PESTLE findings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwotEnhancement {
    /// At most five, in the order derived (forces first, then PESTLE).
    pub derived_opportunities: Vec<DerivedItem>,
    /// At most five, in the order derived (forces first, then PESTLE).
    pub derived_threats: Vec<DerivedItem>,
    pub pestle_factors_used: Vec<String>,
    pub porter_forces_used: Vec<String>,
    pub competitors_identified: Vec<String>,
    pub market_context: MarketContext,
}

/// Transformer from Porter's (plus PESTLE) output to SWOT items.
pub struct PortersSwotBridge;

impl PortersSwotBridge {
    /// Derives SWOT opportunities and threats.
    ///
    /// # Algorithm
    /// 1. Each force rule fires on the force's resolved level
    /// 2. Up to two PESTLE opportunities and two threats are appended at priority 3
    /// 3. Both lists are truncated to five items, keeping insertion order
    ///
    /// # Edge Cases
    /// - Missing forces produce no items
    /// - Missing PESTLE output contributes nothing
    pub fn transform(porters: &PortersOutput, pestle: Option<&PestleOutput>) -> SwotEnhancement {
        let mut enhancement = SwotEnhancement {
            competitors_identified: porters.competitors_identified.clone(),
            market_context: Self::market_context(porters),
            ..Default::default()
        };

        for rule in FORCE_RULES {
            let Some(assessment) = porters.forces.get(rule.force) else {
                continue;
            };
            if !(rule.applies)(&assessment.level()) {
                continue;
            }

            let item = Self::force_item(rule, assessment);
            match rule.quadrant {
                Quadrant::Opportunity => enhancement.derived_opportunities.push(item),
                Quadrant::Threat => enhancement.derived_threats.push(item),
            }
            push_unique(&mut enhancement.porter_forces_used, rule.force.key());
        }

        if let Some(pestle) = pestle {
            for finding in pestle.opportunities.iter().take(MAX_PESTLE_FINDINGS) {
                enhancement
                    .derived_opportunities
                    .push(Self::pestle_item(finding, "opportunity"));
                push_unique(&mut enhancement.pestle_factors_used, &finding.text);
            }
            for finding in pestle.threats.iter().take(MAX_PESTLE_FINDINGS) {
                enhancement
                    .derived_threats
                    .push(Self::pestle_item(finding, "threat"));
                push_unique(&mut enhancement.pestle_factors_used, &finding.text);
            }
        }

        enhancement.derived_opportunities.truncate(MAX_DERIVED_ITEMS);
        enhancement.derived_threats.truncate(MAX_DERIVED_ITEMS);
        enhancement
    }

    fn force_item(rule: &ForceRule, assessment: &ForceAssessment) -> DerivedItem {
        DerivedItem {
            item: rule.item.to_string(),
            description: rule.description.to_string(),
            magnitude: rule.magnitude,
            source_analysis: SourceAnalysis::Porters,
            source_reference: force_reference(rule.force, assessment),
            priority: rule.priority,
            priority_rationale: rule.priority_rationale.to_string(),
        }
    }

    fn pestle_item(finding: &PestleFinding, kind: &str) -> DerivedItem {
        DerivedItem {
            item: finding.text.clone(),
            description: finding
                .description
                .clone()
                .unwrap_or_else(|| finding.text.clone()),
            magnitude: finding.magnitude.unwrap_or_default(),
            source_analysis: SourceAnalysis::Pestle,
            source_reference: format!("PESTLE {}: {}", kind, finding.text),
            priority: PESTLE_ITEM_PRIORITY,
            priority_rationale: "Macro-environmental factor carried over from PESTLE".to_string(),
        }
    }

    fn market_context(porters: &PortersOutput) -> MarketContext {
        let Some(overall) = &porters.overall_attractiveness else {
            return MarketContext::default();
        };
        MarketContext {
            attractiveness_score: overall.score.unwrap_or(DEFAULT_ATTRACTIVENESS_SCORE),
            assessment: overall
                .assessment
                .clone()
                .unwrap_or_else(|| DEFAULT_ASSESSMENT.to_string()),
            rationale: overall.rationale.clone(),
        }
    }
}

/// `"<Force name>: <score>/10 (<level>)"`, or `"<Force name>: <level>"` when
/// only a level was supplied.
fn force_reference(force: PorterForce, assessment: &ForceAssessment) -> String {
    match assessment.score_label() {
        Some(score) => format!("{}: {}/10 ({})", force.display_name(), score, assessment.level()),
        None => format!("{}: {}", force.display_name(), assessment.level()),
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|existing| existing == value) {
        list.push(value.to_string());
    }
}
