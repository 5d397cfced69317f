//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations for the HTTP adapter. The
//! inference core has no ports: every handler is a pure computation.

pub mod handlers;

pub use handlers::{
    AnalyzeStrategyCommand, AnalyzeStrategyHandler, AnalyzeStrategyResult,
    BuildStrategyProfileCommand, BuildStrategyProfileHandler, ExtractSignalsCommand,
    ExtractSignalsHandler, ExtractSignalsResult, TransformPestleToPortersCommand,
    TransformPestleToPortersHandler, TransformPortersToSwotCommand, TransformPortersToSwotHandler,
};
