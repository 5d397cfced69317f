//! Porter's Five Forces output - force assessments and market context.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::domain::foundation::{ForceLevel, LevelClassifier, ValidationError, DEFAULT_FORCE_SCORE};

use super::lenient;

/// The five competitive forces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PorterForce {
    ThreatOfNewEntrants,
    BuyerPower,
    CompetitiveRivalry,
    SupplierPower,
    ThreatOfSubstitutes,
}

impl PorterForce {
    /// All forces in framework order.
    pub const ALL: [PorterForce; 5] = [
        PorterForce::ThreatOfNewEntrants,
        PorterForce::BuyerPower,
        PorterForce::CompetitiveRivalry,
        PorterForce::SupplierPower,
        PorterForce::ThreatOfSubstitutes,
    ];

    /// Canonical key, recorded in `porterForcesUsed`.
    pub fn key(&self) -> &'static str {
        match self {
            PorterForce::ThreatOfNewEntrants => "threatOfNewEntrants",
            PorterForce::BuyerPower => "buyerPower",
            PorterForce::CompetitiveRivalry => "competitiveRivalry",
            PorterForce::SupplierPower => "supplierPower",
            PorterForce::ThreatOfSubstitutes => "threatOfSubstitutes",
        }
    }

    /// Keys accepted on input, canonical key first.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            PorterForce::ThreatOfNewEntrants => &["threatOfNewEntrants", "threat_of_new_entrants"],
            PorterForce::BuyerPower => &[
                "buyerPower",
                "bargainingPowerOfBuyers",
                "buyer_power",
                "bargaining_power_of_buyers",
            ],
            PorterForce::CompetitiveRivalry => &["competitiveRivalry", "rivalry", "competitive_rivalry"],
            PorterForce::SupplierPower => &[
                "supplierPower",
                "bargainingPowerOfSuppliers",
                "supplier_power",
                "bargaining_power_of_suppliers",
            ],
            PorterForce::ThreatOfSubstitutes => &["threatOfSubstitutes", "threat_of_substitutes"],
        }
    }

    /// Human-readable name used in provenance strings.
    pub fn display_name(&self) -> &'static str {
        match self {
            PorterForce::ThreatOfNewEntrants => "Threat of New Entrants",
            PorterForce::BuyerPower => "Buyer Power",
            PorterForce::CompetitiveRivalry => "Competitive Rivalry",
            PorterForce::SupplierPower => "Supplier Power",
            PorterForce::ThreatOfSubstitutes => "Threat of Substitutes",
        }
    }
}

impl fmt::Display for PorterForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Assessment of a single force.
///
/// The level is resolved at construction and a stored score always
/// classifies to it. An explicit level wins over a contradicting score; that
/// score is set aside in `overridden_score` and not used for provenance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct ForceAssessment {
    score: Option<f64>,
    level: ForceLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    overridden_score: Option<f64>,
}

impl ForceAssessment {
    /// Builds an assessment from a bare score.
    pub fn from_score(score: f64) -> Self {
        Self {
            score: Some(score),
            level: LevelClassifier::classify(score),
            overridden_score: None,
        }
    }

    /// Builds an assessment from a score, rejecting values outside 0-10.
    pub fn try_from_score(score: f64) -> Result<Self, ValidationError> {
        if !(0.0..=10.0).contains(&score) {
            return Err(ValidationError::out_of_range("score", 0.0, 10.0, score));
        }
        Ok(Self::from_score(score))
    }

    /// Builds an assessment from whichever of score and level are present.
    pub fn new(score: Option<f64>, level: Option<ForceLevel>) -> Self {
        let score = match (score, level) {
            (None, None) => Some(DEFAULT_FORCE_SCORE),
            (score, _) => score,
        };
        let level = LevelClassifier::resolve(score, level);
        match score {
            Some(score) if LevelClassifier::classify(score) != level => Self {
                score: None,
                level,
                overridden_score: Some(score),
            },
            score => Self {
                score,
                level,
                overridden_score: None,
            },
        }
    }

    /// Reads an assessment from a number, a numeric or level string, or an
    /// object carrying `score` and/or `level`.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(_) => Self::new(lenient::number(value), None),
            Value::String(raw) => match lenient::number(value) {
                Some(score) => Self::new(Some(score), None),
                None => Self::new(None, ForceLevel::parse(raw)),
            },
            Value::Object(_) => {
                let score = lenient::field(value, &["score", "value", "rating"])
                    .and_then(lenient::number);
                let level = lenient::text(value, &["level", "intensity"])
                    .and_then(|raw| ForceLevel::parse(&raw));
                Self::new(score, level)
            }
            _ => Self::default(),
        }
    }

    /// The numeric score, when one was supplied.
    pub fn score(&self) -> Option<f64> {
        self.score
    }

    /// The resolved level.
    pub fn level(&self) -> ForceLevel {
        self.level
    }

    /// A supplied score that contradicted the explicit level.
    pub fn overridden_score(&self) -> Option<f64> {
        self.overridden_score
    }

    /// Formats the score the way a JSON number would print (`4`, `4.5`).
    pub fn score_label(&self) -> Option<String> {
        self.score.map(|score| {
            if score.fract() == 0.0 && score.abs() < 1e15 {
                format!("{}", score as i64)
            } else {
                format!("{}", score)
            }
        })
    }
}

impl From<Value> for ForceAssessment {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

impl Default for ForceAssessment {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// The five forces as supplied; a force missing from the input is `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortersForces {
    pub threat_of_new_entrants: Option<ForceAssessment>,
    pub buyer_power: Option<ForceAssessment>,
    pub competitive_rivalry: Option<ForceAssessment>,
    pub supplier_power: Option<ForceAssessment>,
    pub threat_of_substitutes: Option<ForceAssessment>,
}

impl PortersForces {
    /// Returns the assessment for one force.
    pub fn get(&self, force: PorterForce) -> Option<&ForceAssessment> {
        match force {
            PorterForce::ThreatOfNewEntrants => self.threat_of_new_entrants.as_ref(),
            PorterForce::BuyerPower => self.buyer_power.as_ref(),
            PorterForce::CompetitiveRivalry => self.competitive_rivalry.as_ref(),
            PorterForce::SupplierPower => self.supplier_power.as_ref(),
            PorterForce::ThreatOfSubstitutes => self.threat_of_substitutes.as_ref(),
        }
    }

    /// Sets the assessment for one force.
    pub fn set(&mut self, force: PorterForce, assessment: ForceAssessment) {
        let slot = match force {
            PorterForce::ThreatOfNewEntrants => &mut self.threat_of_new_entrants,
            PorterForce::BuyerPower => &mut self.buyer_power,
            PorterForce::CompetitiveRivalry => &mut self.competitive_rivalry,
            PorterForce::SupplierPower => &mut self.supplier_power,
            PorterForce::ThreatOfSubstitutes => &mut self.threat_of_substitutes,
        };
        *slot = Some(assessment);
    }

    /// Iterates the forces that were supplied.
    pub fn present(&self) -> impl Iterator<Item = (PorterForce, &ForceAssessment)> {
        PorterForce::ALL
            .into_iter()
            .filter_map(move |force| self.get(force).map(|a| (force, a)))
    }
}

/// Overall market attractiveness as reported by the analysis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverallAttractiveness {
    pub score: Option<f64>,
    pub assessment: Option<String>,
    pub rationale: Option<String>,
}

impl OverallAttractiveness {
    fn from_value(value: &Value) -> Self {
        if let Some(score) = lenient::number(value) {
            return Self {
                score: Some(score),
                ..Default::default()
            };
        }
        Self {
            score: lenient::field(value, &["score", "attractivenessScore"]).and_then(lenient::number),
            assessment: lenient::text(value, &["assessment", "level", "summary"]),
            rationale: lenient::text(value, &["rationale", "reasoning", "description"]),
        }
    }
}

/// Structured Porter's Five Forces output.
///
/// Deserializes from any JSON value; unknown shapes yield an empty output.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct PortersOutput {
    pub forces: PortersForces,
    pub overall_attractiveness: Option<OverallAttractiveness>,
    pub competitors_identified: Vec<String>,
}

impl PortersOutput {
    /// Reads a Porter's output by structural presence checks.
    ///
    /// Forces are looked up under `forces`, falling back to the root object.
    pub fn from_value(value: &Value) -> Self {
        let force_root = lenient::field(value, &["forces"])
            .filter(|v| v.is_object())
            .unwrap_or(value);

        let mut forces = PortersForces::default();
        for force in PorterForce::ALL {
            if let Some(raw) = lenient::field(force_root, force.aliases()) {
                forces.set(force, ForceAssessment::from_value(raw));
            }
        }

        let competitors_identified = lenient::array(value, &["competitorsIdentified", "competitors_identified", "competitors"])
            .iter()
            .filter_map(|entry| {
                entry
                    .as_str()
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .or_else(|| lenient::text(entry, &["name", "competitor"]))
            })
            .collect();

        Self {
            forces,
            overall_attractiveness: lenient::field(value, &["overallAttractiveness", "overall_attractiveness"])
                .map(OverallAttractiveness::from_value),
            competitors_identified,
        }
    }
}

impl From<Value> for PortersOutput {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_number_is_classified() {
        let assessment = ForceAssessment::from_value(&json!(7));
        assert_eq!(assessment.score(), Some(7.0));
        assert_eq!(assessment.level(), ForceLevel::High);
        assert_eq!(assessment.overridden_score(), None);
    }

    #[test]
    fn object_with_level_keeps_level() {
        let assessment = ForceAssessment::from_value(&json!({ "score": 4, "level": "low" }));
        assert_eq!(assessment.score(), Some(4.0));
        assert_eq!(assessment.level(), ForceLevel::Low);
    }

    #[test]
    fn contradicting_score_is_set_aside_for_explicit_level() {
        let assessment = ForceAssessment::from_value(&json!({ "score": 9, "level": "low" }));
        assert_eq!(assessment.level(), ForceLevel::Low);
        assert_eq!(assessment.score(), None);
        assert_eq!(assessment.score_label(), None);
        assert_eq!(assessment.overridden_score(), Some(9.0));
    }

    #[test]
    fn deserialize_goes_through_the_lenient_reader() {
        let assessment: ForceAssessment =
            serde_json::from_value(json!({ "score": 9, "level": "low" })).unwrap();
        assert_eq!(assessment.score(), None);
        assert_eq!(assessment.level(), ForceLevel::Low);
    }

    #[test]
    fn unknown_level_falls_back_to_score() {
        let assessment = ForceAssessment::from_value(&json!({ "score": 1, "level": "tiny" }));
        assert_eq!(assessment.level(), ForceLevel::VeryLow);
    }

    #[test]
    fn empty_object_defaults_to_medium_five() {
        let assessment = ForceAssessment::from_value(&json!({}));
        assert_eq!(assessment.score(), Some(5.0));
        assert_eq!(assessment.level(), ForceLevel::Medium);
    }

    #[test]
    fn level_only_leaves_score_unset() {
        let assessment = ForceAssessment::from_value(&json!("very high"));
        assert_eq!(assessment.score(), None);
        assert_eq!(assessment.level(), ForceLevel::VeryHigh);
        assert_eq!(assessment.overridden_score(), None);
    }

    #[test]
    fn numeric_string_is_a_score() {
        let assessment = ForceAssessment::from_value(&json!("3"));
        assert_eq!(assessment.level(), ForceLevel::Low);
    }

    #[test]
    fn try_from_score_rejects_out_of_range() {
        assert!(ForceAssessment::try_from_score(11.0).is_err());
        assert!(ForceAssessment::try_from_score(-0.1).is_err());
        assert!(ForceAssessment::try_from_score(10.0).is_ok());
    }

    #[test]
    fn score_label_prints_like_json() {
        assert_eq!(ForceAssessment::from_score(4.0).score_label().as_deref(), Some("4"));
        assert_eq!(ForceAssessment::from_score(6.5).score_label().as_deref(), Some("6.5"));
        assert_eq!(ForceAssessment::new(None, Some(ForceLevel::Low)).score_label(), None);
    }

    #[test]
    fn parses_forces_with_aliases() {
        let porters = PortersOutput::from_value(&json!({
            "forces": {
                "threatOfNewEntrants": { "score": 4, "level": "low" },
                "bargainingPowerOfBuyers": 2,
                "competitiveRivalry": { "score": 8 },
                "bargainingPowerOfSuppliers": { "level": "very_high" }
            },
            "overallAttractiveness": { "score": 7, "assessment": "attractive", "rationale": "Growing demand" },
            "competitorsIdentified": ["Acme", { "name": "Globex" }, 3]
        }));

        assert_eq!(porters.forces.get(PorterForce::ThreatOfNewEntrants).unwrap().level(), ForceLevel::Low);
        assert_eq!(porters.forces.get(PorterForce::BuyerPower).unwrap().level(), ForceLevel::VeryLow);
        assert_eq!(porters.forces.get(PorterForce::CompetitiveRivalry).unwrap().level(), ForceLevel::High);
        assert_eq!(porters.forces.get(PorterForce::SupplierPower).unwrap().level(), ForceLevel::VeryHigh);
        assert!(porters.forces.get(PorterForce::ThreatOfSubstitutes).is_none());
        assert_eq!(porters.forces.present().count(), 4);

        let overall = porters.overall_attractiveness.unwrap();
        assert_eq!(overall.score, Some(7.0));
        assert_eq!(overall.assessment.as_deref(), Some("attractive"));
        assert_eq!(porters.competitors_identified, vec!["Acme", "Globex"]);
    }

    #[test]
    fn numeric_overall_attractiveness_is_a_score() {
        let porters = PortersOutput::from_value(&json!({ "overallAttractiveness": 3 }));
        assert_eq!(porters.overall_attractiveness.unwrap().score, Some(3.0));
    }

    #[test]
    fn empty_and_null_inputs_yield_defaults() {
        assert_eq!(PortersOutput::from_value(&json!({})), PortersOutput::default());
        assert_eq!(PortersOutput::from_value(&Value::Null), PortersOutput::default());

        let porters: PortersOutput = serde_json::from_str(r#"{"forces": []}"#).unwrap();
        assert_eq!(porters.forces.present().count(), 0);
    }
}
