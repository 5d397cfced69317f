//! Profile module - strategy profile derived from extracted signals.
//!
//! # Components
//!
//! - `StrategyProfiler` - archetype, platform gate, role hint, categories
//! - `StrategyProfile` - the aggregated result
//! - `Archetype` / `TechnologyRole` - coarse classifications
//! - `WorkstreamCategory` - keys of the fixed effort-adjustment table

mod archetype;
mod profiler;
mod workstream;

pub use archetype::{Archetype, TechnologyRole, DIGITAL_FIRST_THRESHOLD, HYBRID_THRESHOLD};
pub use profiler::{
    StrategyProfile, StrategyProfiler, PROFILER_INTENSITY_THRESHOLD,
    PROFILER_MONETIZATION_THRESHOLD, PROFILER_REACH_THRESHOLD,
};
pub use workstream::{effort_adjustments, effort_table, WorkstreamCategory};
