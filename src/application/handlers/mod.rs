//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod strategy;

pub use strategy::{
    AnalyzeStrategyCommand, AnalyzeStrategyHandler, AnalyzeStrategyResult,
    BuildStrategyProfileCommand, BuildStrategyProfileHandler, BuildStrategyProfileResult,
    ExtractSignalsCommand, ExtractSignalsHandler, ExtractSignalsResult,
    TransformPestleToPortersCommand, TransformPestleToPortersHandler,
    TransformPestleToPortersResult, TransformPortersToSwotCommand, TransformPortersToSwotHandler,
    TransformPortersToSwotResult,
};
