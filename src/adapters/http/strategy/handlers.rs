//! HTTP handlers for strategy inference endpoints.
//!
//! These handlers connect Axum routes to the application layer command
//! handlers. Any syntactically valid JSON body is accepted; only bodies that
//! cannot be read as JSON at all are rejected.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use serde_json::json;

use crate::application::handlers::{
    AnalyzeStrategyCommand, AnalyzeStrategyHandler, BuildStrategyProfileCommand,
    BuildStrategyProfileHandler, ExtractSignalsCommand, ExtractSignalsHandler,
    TransformPestleToPortersCommand, TransformPestleToPortersHandler,
    TransformPortersToSwotCommand, TransformPortersToSwotHandler,
};
use crate::config::FeatureFlags;
use crate::domain::framework::PestleOutput;

use super::dto::{
    AnalyzeRequest, AnalyzeStrategyResult, BridgeEnhancement, ErrorResponse,
    ExtractSignalsResult, HealthResponse, InsightsRequest, PortersSwotRequest, StrategyProfile,
    SwotEnhancement,
};

/// Inference components reported by the health endpoint.
pub const INFERENCE_COMPONENTS: usize = 4;

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Strategy API error that implements IntoResponse.
#[derive(Debug)]
pub enum StrategyApiError {
    BadRequest(ErrorResponse),
    NotFound(ErrorResponse),
}

impl StrategyApiError {
    /// Maps a body rejection to a 400, with the reason only when verbose.
    pub fn from_rejection(rejection: JsonRejection, features: &FeatureFlags) -> Self {
        tracing::warn!(
            status = %rejection.status(),
            reason = %rejection.body_text(),
            "Rejected request body"
        );

        let error = ErrorResponse::bad_request("Request body must be valid JSON");
        let error = if features.verbose_errors {
            error.with_details(json!({ "reason": rejection.body_text() }))
        } else {
            error
        };
        StrategyApiError::BadRequest(error)
    }
}

impl IntoResponse for StrategyApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            StrategyApiError::BadRequest(error) => (StatusCode::BAD_REQUEST, error),
            StrategyApiError::NotFound(error) => (StatusCode::NOT_FOUND, error),
        };
        (status, Json(error)).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for strategy endpoints.
#[derive(Debug, Clone, Default)]
pub struct StrategyAppState {
    pub features: FeatureFlags,
}

impl StrategyAppState {
    pub fn new(features: FeatureFlags) -> Self {
        Self { features }
    }

    pub fn pestle_porters_handler(&self) -> TransformPestleToPortersHandler {
        TransformPestleToPortersHandler::new()
    }

    pub fn porters_swot_handler(&self) -> TransformPortersToSwotHandler {
        TransformPortersToSwotHandler::new()
    }

    pub fn extract_signals_handler(&self) -> ExtractSignalsHandler {
        ExtractSignalsHandler::new()
    }

    pub fn build_profile_handler(&self) -> BuildStrategyProfileHandler {
        BuildStrategyProfileHandler::new()
    }

    pub fn analyze_handler(&self) -> AnalyzeStrategyHandler {
        AnalyzeStrategyHandler::new()
    }

    fn accept<T>(&self, payload: Result<Json<T>, JsonRejection>) -> Result<T, StrategyApiError> {
        payload
            .map(|Json(body)| body)
            .map_err(|rejection| StrategyApiError::from_rejection(rejection, &self.features))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        components: INFERENCE_COMPONENTS,
    })
}

/// POST /api/strategy/bridges/pestle-porters
///
/// Reorganizes PESTLE factors as Porter's-force evidence.
pub async fn transform_pestle_to_porters(
    State(state): State<StrategyAppState>,
    payload: Result<Json<PestleOutput>, JsonRejection>,
) -> Result<Json<BridgeEnhancement>, StrategyApiError> {
    let pestle = state.accept(payload)?;

    let result = state
        .pestle_porters_handler()
        .handle(TransformPestleToPortersCommand { pestle });

    Ok(Json(result))
}

/// POST /api/strategy/bridges/porters-swot
///
/// Derives SWOT opportunities and threats from Porter's forces.
pub async fn transform_porters_to_swot(
    State(state): State<StrategyAppState>,
    payload: Result<Json<PortersSwotRequest>, JsonRejection>,
) -> Result<Json<SwotEnhancement>, StrategyApiError> {
    let request = state.accept(payload)?;

    let result = state.porters_swot_handler().handle(TransformPortersToSwotCommand {
        porters: request.porters,
        pestle: request.pestle,
    });

    Ok(Json(result))
}

/// POST /api/strategy/signals
///
/// Extracts strategic signals and the extractor's platform gate.
pub async fn extract_signals(
    State(state): State<StrategyAppState>,
    payload: Result<Json<InsightsRequest>, JsonRejection>,
) -> Result<Json<ExtractSignalsResult>, StrategyApiError> {
    let request = state.accept(payload)?;

    let result = state.extract_signals_handler().handle(ExtractSignalsCommand {
        insights: request.insights,
        business_context: request.business_context,
    });

    Ok(Json(result))
}

/// POST /api/strategy/profile
///
/// Builds a strategy profile from insight snippets.
pub async fn build_strategy_profile(
    State(state): State<StrategyAppState>,
    payload: Result<Json<InsightsRequest>, JsonRejection>,
) -> Result<Json<StrategyProfile>, StrategyApiError> {
    let request = state.accept(payload)?;

    let result = state.build_profile_handler().handle(BuildStrategyProfileCommand {
        insights: request.insights,
        business_context: request.business_context,
    });

    Ok(Json(result))
}

/// POST /api/strategy/analyze
///
/// Runs both bridges, extraction and profiling in one call.
pub async fn analyze_strategy(
    State(state): State<StrategyAppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeStrategyResult>, StrategyApiError> {
    let request = state.accept(payload)?;

    let result = state.analyze_handler().handle(AnalyzeStrategyCommand {
        pestle: request.pestle,
        porters: request.porters,
        insights: request.insights,
        business_context: request.business_context,
    });

    Ok(Json(result))
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> StrategyApiError {
    StrategyApiError::NotFound(ErrorResponse::not_found(format!(
        "No route for {}",
        uri.path()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    #[tokio::test]
    async fn health_reports_four_components() {
        let Json(response) = health().await;
        assert_eq!(response.status, "healthy");
        assert_eq!(response.components, 4);
    }

    #[tokio::test]
    async fn api_error_renders_status_and_body() {
        let response =
            StrategyApiError::BadRequest(ErrorResponse::bad_request("nope")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "BAD_REQUEST");
        assert_eq!(body["message"], "nope");
    }

    #[tokio::test]
    async fn pestle_porters_handler_accepts_empty_object() {
        let state = StrategyAppState::default();

        let Json(result) = transform_pestle_to_porters(
            State(state),
            Ok(Json(PestleOutput::default())),
        )
        .await
        .unwrap();

        assert_eq!(result.entry_count(), 0);
    }
}
