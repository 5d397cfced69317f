//! PESTLE framework output - macro-environmental factors by category.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::lenient;

/// The six PESTLE categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PestleCategory {
    Political,
    Economic,
    Social,
    Technological,
    Legal,
    Environmental,
}

impl PestleCategory {
    /// All categories in framework order.
    pub const ALL: [PestleCategory; 6] = [
        PestleCategory::Political,
        PestleCategory::Economic,
        PestleCategory::Social,
        PestleCategory::Technological,
        PestleCategory::Legal,
        PestleCategory::Environmental,
    ];

    /// JSON key used for this category in the `factors` object.
    pub fn key(&self) -> &'static str {
        match self {
            PestleCategory::Political => "political",
            PestleCategory::Economic => "economic",
            PestleCategory::Social => "social",
            PestleCategory::Technological => "technological",
            PestleCategory::Legal => "legal",
            PestleCategory::Environmental => "environmental",
        }
    }
}

impl fmt::Display for PestleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Whether a factor is framed as an opportunity or a threat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    Opportunity,
    Threat,
}

impl Impact {
    /// Parses an impact label, ignoring case and surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "opportunity" | "positive" => Some(Impact::Opportunity),
            "threat" | "negative" | "risk" => Some(Impact::Threat),
            _ => None,
        }
    }
}

/// Strength of a factor or derived item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Magnitude {
    Low,
    #[default]
    Medium,
    High,
}

impl Magnitude {
    /// Parses a magnitude label, ignoring case and surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "low" => Some(Magnitude::Low),
            "medium" | "moderate" => Some(Magnitude::Medium),
            "high" => Some(Magnitude::High),
            _ => None,
        }
    }
}

/// One PESTLE entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PestleFactor {
    pub factor: String,
    pub impact: Option<Impact>,
    pub magnitude: Option<Magnitude>,
    pub evidence: Option<String>,
}

impl PestleFactor {
    /// Creates a factor with only its text set.
    pub fn new(factor: impl Into<String>) -> Self {
        Self {
            factor: factor.into(),
            impact: None,
            magnitude: None,
            evidence: None,
        }
    }

    /// Sets the impact framing.
    pub fn with_impact(mut self, impact: Impact) -> Self {
        self.impact = Some(impact);
        self
    }

    /// Sets the magnitude.
    pub fn with_magnitude(mut self, magnitude: Magnitude) -> Self {
        self.magnitude = Some(magnitude);
        self
    }

    /// Sets the supporting evidence text.
    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = Some(evidence.into());
        self
    }

    /// Reads a factor from JSON. A bare string is taken as the factor text.
    ///
    /// Returns `None` when no identifying text can be found.
    pub fn from_value(value: &Value) -> Option<Self> {
        if let Some(raw) = value.as_str() {
            let factor = raw.trim();
            return (!factor.is_empty()).then(|| Self::new(factor));
        }

        let factor = lenient::text(value, &["factor", "name", "title", "description"])?;
        Some(Self {
            factor,
            impact: lenient::text(value, &["impact", "type"]).and_then(|s| Impact::parse(&s)),
            magnitude: lenient::text(value, &["magnitude", "severity"])
                .and_then(|s| Magnitude::parse(&s)),
            evidence: lenient::text(value, &["evidence", "rationale"]),
        })
    }

    /// True when the factor is framed as an opportunity.
    pub fn is_opportunity(&self) -> bool {
        self.impact == Some(Impact::Opportunity)
    }
}

/// A top-level opportunity or threat listed by the PESTLE analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PestleFinding {
    pub text: String,
    pub description: Option<String>,
    pub magnitude: Option<Magnitude>,
}

impl PestleFinding {
    /// Creates a finding with only its identifying text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            description: None,
            magnitude: None,
        }
    }

    /// Reads a finding from a string or an object.
    pub fn from_value(value: &Value) -> Option<Self> {
        if let Some(raw) = value.as_str() {
            let text = raw.trim();
            return (!text.is_empty()).then(|| Self::new(text));
        }

        let text = lenient::text(
            value,
            &["factor", "opportunity", "threat", "item", "title", "description"],
        )?;
        let description = lenient::text(value, &["description", "evidence", "rationale"])
            .filter(|d| *d != text);
        Some(Self {
            text,
            description,
            magnitude: lenient::text(value, &["magnitude", "severity"])
                .and_then(|s| Magnitude::parse(&s)),
        })
    }
}

/// PESTLE factors grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PestleFactors {
    pub political: Vec<PestleFactor>,
    pub economic: Vec<PestleFactor>,
    pub social: Vec<PestleFactor>,
    pub technological: Vec<PestleFactor>,
    pub legal: Vec<PestleFactor>,
    pub environmental: Vec<PestleFactor>,
}

impl PestleFactors {
    /// Returns the factors for one category.
    pub fn category(&self, category: PestleCategory) -> &[PestleFactor] {
        match category {
            PestleCategory::Political => &self.political,
            PestleCategory::Economic => &self.economic,
            PestleCategory::Social => &self.social,
            PestleCategory::Technological => &self.technological,
            PestleCategory::Legal => &self.legal,
            PestleCategory::Environmental => &self.environmental,
        }
    }

    fn category_mut(&mut self, category: PestleCategory) -> &mut Vec<PestleFactor> {
        match category {
            PestleCategory::Political => &mut self.political,
            PestleCategory::Economic => &mut self.economic,
            PestleCategory::Social => &mut self.social,
            PestleCategory::Technological => &mut self.technological,
            PestleCategory::Legal => &mut self.legal,
            PestleCategory::Environmental => &mut self.environmental,
        }
    }

    /// Total number of factors across all categories.
    pub fn len(&self) -> usize {
        PestleCategory::ALL
            .iter()
            .map(|c| self.category(*c).len())
            .sum()
    }

    /// True when no category holds a factor.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Structured PESTLE output as produced by the analysis collaborator.
///
/// Deserializes from any JSON value; unknown shapes yield an empty output.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct PestleOutput {
    pub scope: Option<String>,
    pub confidence_level: Option<String>,
    pub factors: PestleFactors,
    pub opportunities: Vec<PestleFinding>,
    pub threats: Vec<PestleFinding>,
}

impl PestleOutput {
    /// Reads a PESTLE output by structural presence checks.
    ///
    /// Factor arrays are looked up under `factors`, falling back to the root
    /// object. Entries without identifying text are dropped.
    pub fn from_value(value: &Value) -> Self {
        let factor_root = lenient::field(value, &["factors"])
            .filter(|v| v.is_object())
            .unwrap_or(value);

        let mut factors = PestleFactors::default();
        for category in PestleCategory::ALL {
            *factors.category_mut(category) = lenient::array(factor_root, &[category.key()])
                .iter()
                .filter_map(PestleFactor::from_value)
                .collect();
        }

        Self {
            scope: lenient::field(value, &["scope"]).and_then(lenient::scalar_text),
            confidence_level: lenient::field(value, &["confidenceLevel", "confidence_level", "confidence"])
                .and_then(lenient::scalar_text),
            factors,
            opportunities: lenient::array(value, &["opportunities"])
                .iter()
                .filter_map(PestleFinding::from_value)
                .collect(),
            threats: lenient::array(value, &["threats"])
                .iter()
                .filter_map(PestleFinding::from_value)
                .collect(),
        }
    }
}

impl From<Value> for PestleOutput {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_nested_factor_groups() {
        let pestle = PestleOutput::from_value(&json!({
            "scope": "UAE retail",
            "confidenceLevel": "high",
            "factors": {
                "legal": [
                    { "factor": "DED retail license required", "impact": "threat", "magnitude": "high" }
                ],
                "economic": [
                    { "factor": "Rising disposable income", "impact": "opportunity", "evidence": "Up 6% YoY" }
                ]
            }
        }));

        assert_eq!(pestle.scope.as_deref(), Some("UAE retail"));
        assert_eq!(pestle.confidence_level.as_deref(), Some("high"));
        assert_eq!(pestle.factors.legal.len(), 1);
        assert_eq!(pestle.factors.legal[0].magnitude, Some(Magnitude::High));
        assert_eq!(pestle.factors.economic[0].evidence.as_deref(), Some("Up 6% YoY"));
        assert!(pestle.factors.economic[0].is_opportunity());
        assert!(pestle.factors.political.is_empty());
        assert_eq!(pestle.factors.len(), 2);
    }

    #[test]
    fn empty_object_yields_empty_output() {
        let pestle = PestleOutput::from_value(&json!({}));
        assert_eq!(pestle, PestleOutput::default());
        assert!(pestle.factors.is_empty());
    }

    #[test]
    fn non_object_input_yields_empty_output() {
        assert_eq!(PestleOutput::from_value(&Value::Null), PestleOutput::default());
        assert_eq!(PestleOutput::from_value(&json!("oops")), PestleOutput::default());
    }

    #[test]
    fn malformed_factor_entries_are_dropped() {
        let pestle = PestleOutput::from_value(&json!({
            "factors": {
                "legal": [
                    42,
                    { "impact": "threat" },
                    "Data protection regulation",
                    { "factor": "Permit backlog", "magnitude": "extreme" }
                ]
            }
        }));

        assert_eq!(pestle.factors.legal.len(), 2);
        assert_eq!(pestle.factors.legal[0].factor, "Data protection regulation");
        assert_eq!(pestle.factors.legal[1].magnitude, None);
    }

    #[test]
    fn factor_groups_fall_back_to_root() {
        let pestle = PestleOutput::from_value(&json!({
            "technological": [{ "factor": "E-commerce adoption" }]
        }));
        assert_eq!(pestle.factors.technological.len(), 1);
    }

    #[test]
    fn findings_accept_strings_and_objects() {
        let pestle = PestleOutput::from_value(&json!({
            "opportunities": ["Tourism rebound", { "opportunity": "Government SME grants", "description": "Grants cover 30% of capex" }],
            "threats": [{ "threat": "Rising rents", "magnitude": "high" }, {}]
        }));

        assert_eq!(pestle.opportunities.len(), 2);
        assert_eq!(pestle.opportunities[1].text, "Government SME grants");
        assert_eq!(
            pestle.opportunities[1].description.as_deref(),
            Some("Grants cover 30% of capex")
        );
        assert_eq!(pestle.threats.len(), 1);
        assert_eq!(pestle.threats[0].magnitude, Some(Magnitude::High));
    }

    #[test]
    fn numeric_confidence_is_carried_as_text() {
        let pestle = PestleOutput::from_value(&json!({ "confidenceLevel": 0.8 }));
        assert_eq!(pestle.confidence_level.as_deref(), Some("0.8"));
    }

    #[test]
    fn deserializes_through_serde_without_failing() {
        let pestle: PestleOutput = serde_json::from_str(r#"{"factors": {"legal": "nope"}}"#).unwrap();
        assert!(pestle.factors.legal.is_empty());

        let pestle: PestleOutput = serde_json::from_str("null").unwrap();
        assert_eq!(pestle, PestleOutput::default());
    }

    #[test]
    fn impact_and_magnitude_parse_leniently() {
        assert_eq!(Impact::parse(" Opportunity "), Some(Impact::Opportunity));
        assert_eq!(Impact::parse("neutral"), None);
        assert_eq!(Magnitude::parse("HIGH"), Some(Magnitude::High));
        assert_eq!(Magnitude::default(), Magnitude::Medium);
    }
}
