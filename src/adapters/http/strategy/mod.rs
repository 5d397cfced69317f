//! Strategy HTTP adapter module.
//!
//! Provides REST API endpoints for the bridges, signal extraction,
//! profiling and the combined pipeline.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{StrategyApiError, StrategyAppState};
pub use routes::strategy_routes;
