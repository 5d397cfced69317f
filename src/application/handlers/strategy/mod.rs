//! Strategy inference handlers.
//!
//! Synchronous command handlers over the pure inference core. Each one logs
//! a per-stage summary; none of them fail.

mod analyze_strategy;
mod build_strategy_profile;
mod extract_signals;
mod transform_pestle_to_porters;
mod transform_porters_to_swot;

pub use analyze_strategy::{AnalyzeStrategyCommand, AnalyzeStrategyHandler, AnalyzeStrategyResult};
pub use build_strategy_profile::{
    BuildStrategyProfileCommand, BuildStrategyProfileHandler, BuildStrategyProfileResult,
};
pub use extract_signals::{ExtractSignalsCommand, ExtractSignalsHandler, ExtractSignalsResult};
pub use transform_pestle_to_porters::{
    TransformPestleToPortersCommand, TransformPestleToPortersHandler,
    TransformPestleToPortersResult,
};
pub use transform_porters_to_swot::{
    TransformPortersToSwotCommand, TransformPortersToSwotHandler, TransformPortersToSwotResult,
};
