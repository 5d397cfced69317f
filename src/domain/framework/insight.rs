//! Insight - the atomic text unit consumed by the signal extractor.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient;

/// A qualitative finding from a completed framework, tagged with the block or
/// category it came from.
///
/// Deserialization never fails: an entry without string `content` is kept
/// as a malformed insight so the extractor can skip it and count it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Insight {
    content: Option<String>,
    category: String,
}

impl Insight {
    /// Creates a well-formed insight.
    pub fn new(content: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            category: category.into(),
        }
    }

    /// Reads an insight from JSON by presence check.
    pub fn from_value(value: &Value) -> Self {
        Self {
            content: lenient::field(value, &["content"])
                .and_then(Value::as_str)
                .map(str::to_string),
            category: lenient::text(value, &["category", "block", "source"]).unwrap_or_default(),
        }
    }

    /// The insight text, or `None` for a malformed insight.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.trim().is_empty())
    }

    /// The raw category tag.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// True when the insight carries usable content.
    pub fn is_well_formed(&self) -> bool {
        self.content().is_some()
    }

    /// Category normalized for gate checks: lower-cased, `_` and `-` read as spaces.
    pub fn normalized_category(&self) -> String {
        self.category
            .to_lowercase()
            .chars()
            .map(|c| if c == '_' || c == '-' { ' ' } else { c })
            .collect()
    }
}

impl From<Value> for Insight {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_content_and_category() {
        let insight = Insight::from_value(&json!({
            "content": "Sell through an online marketplace",
            "category": "Channels"
        }));
        assert_eq!(insight.content(), Some("Sell through an online marketplace"));
        assert_eq!(insight.category(), "Channels");
        assert!(insight.is_well_formed());
    }

    #[test]
    fn non_string_content_is_malformed() {
        let insight = Insight::from_value(&json!({ "content": 12, "category": "channels" }));
        assert!(!insight.is_well_formed());

        let insight = Insight::from_value(&json!({ "category": "channels" }));
        assert!(!insight.is_well_formed());

        let insight = Insight::from_value(&json!("just text"));
        assert!(!insight.is_well_formed());
    }

    #[test]
    fn blank_content_is_malformed() {
        let insight = Insight::new("   ", "value_propositions");
        assert_eq!(insight.content(), None);
    }

    #[test]
    fn missing_category_is_empty() {
        let insight = Insight::from_value(&json!({ "content": "Build a SaaS product" }));
        assert_eq!(insight.category(), "");
    }

    #[test]
    fn normalized_category_reads_separators_as_spaces() {
        let insight = Insight::new("x", "Customer_Relationships");
        assert_eq!(insight.normalized_category(), "customer relationships");

        let insight = Insight::new("x", "key-resources");
        assert_eq!(insight.normalized_category(), "key resources");
    }

    #[test]
    fn insight_list_deserializes_with_malformed_entries() {
        let insights: Vec<Insight> =
            serde_json::from_str(r#"[{"content": "ok", "category": "revenue"}, {"content": null}, 5]"#)
                .unwrap();
        assert_eq!(insights.len(), 3);
        assert_eq!(insights.iter().filter(|i| i.is_well_formed()).count(), 1);
    }
}
