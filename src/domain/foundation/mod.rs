//! Foundation module - Shared domain primitives.
//!
//! Value objects, the force level classifier and error types that form the
//! vocabulary shared by the bridge, signal and profile modules.

mod errors;
mod level_classifier;
mod percentage;

pub use errors::ValidationError;
pub use level_classifier::{ForceLevel, LevelClassifier, DEFAULT_FORCE_SCORE};
pub use percentage::Percentage;
