//! Business context hint supplied alongside insights.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient;

/// Organization scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessScale {
    Smb,
    MidMarket,
    Enterprise,
}

impl BusinessScale {
    /// Parses a scale label.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "smb" => Some(BusinessScale::Smb),
            "mid_market" => Some(BusinessScale::MidMarket),
            "enterprise" => Some(BusinessScale::Enterprise),
            _ => None,
        }
    }
}

/// Optional description of the business behind the analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct BusinessContext {
    pub name: Option<String>,
    pub business_type: Option<String>,
    pub scale: Option<BusinessScale>,
    pub description: Option<String>,
    pub industry: Option<String>,
    pub initiative_type: Option<String>,
    pub keywords: Vec<String>,
}

impl BusinessContext {
    /// Creates a context with a business type and initiative type.
    pub fn new(business_type: impl Into<String>, initiative_type: impl Into<String>) -> Self {
        Self {
            business_type: Some(business_type.into()),
            initiative_type: Some(initiative_type.into()),
            ..Default::default()
        }
    }

    /// Reads a context by structural presence checks.
    pub fn from_value(value: &Value) -> Self {
        Self {
            name: lenient::text(value, &["name"]),
            business_type: lenient::text(value, &["type", "businessType", "business_type"]),
            scale: lenient::text(value, &["scale"]).and_then(|s| BusinessScale::parse(&s)),
            description: lenient::text(value, &["description"]),
            industry: lenient::text(value, &["industry"]),
            initiative_type: lenient::text(value, &["initiativeType", "initiative_type"]),
            keywords: lenient::array(value, &["keywords"])
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
        }
    }

    /// Lower-cased classification tags (`type` and `initiativeType`).
    pub fn tags(&self) -> Vec<String> {
        [&self.business_type, &self.initiative_type]
            .into_iter()
            .flatten()
            .map(|tag| tag.to_lowercase())
            .collect()
    }
}

impl From<Value> for BusinessContext {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}
