//! Domain layer containing the inference core.
//!
//! Every operation here is a pure, synchronous function over in-memory
//! values. None of them fail: malformed input degrades to empty results.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (percentage, force levels, errors)
//! - `framework` - Lenient input model for PESTLE, Porter's, insights, context
//! - `bridge` - PESTLE → Porter's and Porter's → SWOT transforms
//! - `signals` - Signal extraction and platform intent disambiguation
//! - `profile` - Strategy profile aggregation

pub mod bridge;
pub mod foundation;
pub mod framework;
pub mod profile;
pub mod signals;
