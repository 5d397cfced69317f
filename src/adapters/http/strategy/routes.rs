//! HTTP routes for strategy inference endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    analyze_strategy, build_strategy_profile, extract_signals, health, not_found,
    transform_pestle_to_porters, transform_porters_to_swot, StrategyAppState,
};

/// Creates the strategy router with all routes.
///
/// The pipeline endpoint is only mounted when the feature flag allows it.
pub fn strategy_routes(state: StrategyAppState) -> Router {
    let mut router = Router::new()
        // GET /health
        .route("/health", get(health))
        // POST /api/strategy/bridges/pestle-porters
        .route(
            "/api/strategy/bridges/pestle-porters",
            post(transform_pestle_to_porters),
        )
        // POST /api/strategy/bridges/porters-swot
        .route(
            "/api/strategy/bridges/porters-swot",
            post(transform_porters_to_swot),
        )
        // POST /api/strategy/signals
        .route("/api/strategy/signals", post(extract_signals))
        // POST /api/strategy/profile
        .route("/api/strategy/profile", post(build_strategy_profile));

    if state.features.expose_pipeline_endpoint {
        // POST /api/strategy/analyze
        router = router.route("/api/strategy/analyze", post(analyze_strategy));
    }

    router.fallback(not_found).with_state(state)
}
