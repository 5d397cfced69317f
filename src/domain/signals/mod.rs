//! Signals module - strategic signal extraction from insight snippets.
//!
//! Insights are tested against category-gated keyword dimensions, and any
//! platform mention is disambiguated into product, operational or ambiguous
//! intent by an ordered predicate chain.
//!
//! # Components
//!
//! - `SignalExtractor` - buckets insights and computes digital intensity
//! - `StrategySignals` - the bucketed result
//! - `PlatformIntent` - outcome of the platform sub-classifier
//! - `keywords` - keyword tables and the patterns compiled from them

mod extractor;
pub mod keywords;
mod platform_intent;

pub use extractor::{
    SignalExtractor, StrategySignals, AMBIGUOUS_SIGNAL_THRESHOLD,
    EXTRACTOR_CORROBORATION_THRESHOLD, EXTRACTOR_INTENSITY_THRESHOLD,
};
pub use platform_intent::{classify_platform_intent, mentions_platform, PlatformIntent};
