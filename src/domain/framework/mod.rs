//! Framework module - lenient input model for framework outputs.
//!
//! Framework outputs arrive as loosely-typed JSON from an AI-analysis
//! collaborator. Each type here reads its JSON by structural presence checks
//! and substitutes explicit defaults for anything absent or mistyped, so
//! parsing never fails.
//!
//! # Components
//!
//! - `PestleOutput` - factors by category plus top-level opportunities/threats
//! - `PortersOutput` - five force assessments, attractiveness, competitors
//! - `Insight` - a content/category snippet for signal extraction
//! - `BusinessContext` - optional hint used to disambiguate platform intent

mod business_context;
mod insight;
pub(crate) mod lenient;
mod pestle;
mod porters;

pub use business_context::{BusinessContext, BusinessScale};
pub use insight::Insight;
pub use pestle::{
    Impact, Magnitude, PestleCategory, PestleFactor, PestleFactors, PestleFinding, PestleOutput,
};
pub use porters::{
    ForceAssessment, OverallAttractiveness, PorterForce, PortersForces, PortersOutput,
};
