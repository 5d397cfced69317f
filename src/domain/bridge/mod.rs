//! Bridge Module - rule-based transforms between strategy frameworks.
//!
//! A bridge lets one framework's structured output inform another's.
//!
//! # Components
//!
//! - `PestlePortersBridge` - PESTLE factors become competitive-force evidence
//! - `PortersSwotBridge` - force levels and PESTLE findings become SWOT items
//! - `DerivedItem` - a SWOT item with its provenance
//!
//! Both transforms are pure: they read their input, allocate a new result
//! and never fail. Absent structure yields empty lists.

mod derived_item;
pub mod keywords;
mod pestle_porters;
mod porters_swot;

pub use derived_item::{DerivedItem, SourceAnalysis};
pub use pestle_porters::{
    BridgeEnhancement, BuyerPowerIndicator, GrowthSignal, PestlePortersBridge, PowerDirection,
    RegulatoryBarrier, SubstituteEnabler, SubstituteType, SupplierPowerFactor,
};
pub use porters_swot::{
    MarketContext, PortersSwotBridge, SwotEnhancement, DEFAULT_ASSESSMENT,
    DEFAULT_ATTRACTIVENESS_SCORE, MAX_DERIVED_ITEMS, MAX_PESTLE_FINDINGS, PESTLE_ITEM_PRIORITY,
};
