//! HTTP adapters - REST API implementations.
//!
//! `router` assembles the strategy routes with the cross-cutting layers
//! (timeout, CORS, request tracing) configured in [`AppConfig`].

pub mod strategy;

use axum::Router;
use http::{header, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{AppConfig, ServerConfig};

// Re-export key types for convenience
pub use strategy::{strategy_routes, ErrorResponse, StrategyApiError, StrategyAppState};

/// Builds the full application router.
pub fn router(config: &AppConfig) -> Router {
    let state = StrategyAppState::new(config.features.clone());

    let app = strategy_routes(state)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server));

    if config.features.enable_tracing {
        app.layer(TraceLayer::new_for_http())
    } else {
        app
    }
}

/// Allows the configured origins, or any origin when none are configured.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
