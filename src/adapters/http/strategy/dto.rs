//! HTTP DTOs for strategy inference endpoints.
//!
//! Request bodies are read as leniently as the framework outputs they carry:
//! any JSON value is accepted and missing or mistyped members become
//! defaults. Responses reuse the domain types, which already serialize as
//! camelCase.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::framework::lenient;
use crate::domain::framework::{BusinessContext, Insight, PestleOutput, PortersOutput};

pub use crate::application::handlers::{AnalyzeStrategyResult, ExtractSignalsResult};
pub use crate::domain::bridge::{BridgeEnhancement, SwotEnhancement};
pub use crate::domain::profile::StrategyProfile;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request body for the Porter's → SWOT bridge.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Value")]
pub struct PortersSwotRequest {
    pub porters: PortersOutput,
    pub pestle: Option<PestleOutput>,
}

impl From<Value> for PortersSwotRequest {
    fn from(value: Value) -> Self {
        Self {
            porters: lenient::object(&value, &["porters", "portersOutput", "porters_output"])
                .map(PortersOutput::from_value)
                .unwrap_or_default(),
            pestle: optional_pestle(&value),
        }
    }
}

/// Request body for signal extraction and profiling.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Value")]
pub struct InsightsRequest {
    pub insights: Vec<Insight>,
    pub business_context: Option<BusinessContext>,
}

impl From<Value> for InsightsRequest {
    fn from(value: Value) -> Self {
        Self {
            insights: insights(&value),
            business_context: business_context(&value),
        }
    }
}

/// Request body for the full pipeline.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Value")]
pub struct AnalyzeRequest {
    pub pestle: Option<PestleOutput>,
    pub porters: Option<PortersOutput>,
    pub insights: Vec<Insight>,
    pub business_context: Option<BusinessContext>,
}

impl From<Value> for AnalyzeRequest {
    fn from(value: Value) -> Self {
        Self {
            pestle: optional_pestle(&value),
            porters: lenient::object(
                &value,
                &["porters", "portersOutput", "porters_output"],
            )
            .map(PortersOutput::from_value),
            insights: insights(&value),
            business_context: business_context(&value),
        }
    }
}

fn optional_pestle(value: &Value) -> Option<PestleOutput> {
    lenient::object(value, &["pestle", "pestleOutput", "pestle_output"])
        .map(PestleOutput::from_value)
}

fn insights(value: &Value) -> Vec<Insight> {
    lenient::array(value, &["insights"])
        .iter()
        .map(Insight::from_value)
        .collect()
}

fn business_context(value: &Value) -> Option<BusinessContext> {
    lenient::object(value, &["businessContext", "business_context", "context"])
        .map(BusinessContext::from_value)
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Liveness response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub components: usize,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn porters_swot_request_reads_both_outputs() {
        let request: PortersSwotRequest = serde_json::from_value(json!({
            "porters": {"forces": {"supplierPower": 8}},
            "pestle": {"opportunities": ["Tourism rebound"]}
        }))
        .unwrap();

        assert!(request.porters.forces.supplier_power.is_some());
        assert_eq!(request.pestle.unwrap().opportunities.len(), 1);
    }

    #[test]
    fn porters_swot_request_without_pestle() {
        let request: PortersSwotRequest =
            serde_json::from_value(json!({"porters": {}, "pestle": null})).unwrap();

        assert!(request.pestle.is_none());
    }

    #[test]
    fn porters_alias_lookup_skips_non_objects_in_both_requests() {
        let body = json!({
            "porters": "n/a",
            "portersOutput": {"forces": {"supplierPower": 8}}
        });

        let swot: PortersSwotRequest = serde_json::from_value(body.clone()).unwrap();
        let analyze: AnalyzeRequest = serde_json::from_value(body).unwrap();

        assert!(swot.porters.forces.supplier_power.is_some());
        assert_eq!(analyze.porters, Some(swot.porters));
    }

    #[test]
    fn insights_request_tolerates_wrong_types() {
        let request: InsightsRequest = serde_json::from_value(json!({
            "insights": "not a list",
            "businessContext": 7
        }))
        .unwrap();

        assert!(request.insights.is_empty());
        assert!(request.business_context.is_none());
    }

    #[test]
    fn insights_request_reads_context() {
        let request: InsightsRequest = serde_json::from_value(json!({
            "insights": [{"content": "Online store", "category": "channels"}, 3],
            "businessContext": {"type": "consulting_agency", "initiativeType": "service_launch"}
        }))
        .unwrap();

        assert_eq!(request.insights.len(), 2);
        assert!(!request.insights[1].is_well_formed());
        assert_eq!(
            request.business_context.unwrap().tags(),
            vec!["consulting_agency".to_string(), "service_launch".to_string()]
        );
    }

    #[test]
    fn analyze_request_treats_everything_as_optional() {
        let request: AnalyzeRequest = serde_json::from_value(json!([])).unwrap();

        assert!(request.pestle.is_none());
        assert!(request.porters.is_none());
        assert!(request.insights.is_empty());
        assert!(request.business_context.is_none());
    }

    #[test]
    fn error_response_omits_empty_details() {
        let json = serde_json::to_value(ErrorResponse::bad_request("Invalid JSON")).unwrap();
        assert_eq!(json["code"], "BAD_REQUEST");
        assert!(json.get("details").is_none());
    }
}
