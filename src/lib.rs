//! Strategy Inference - Cross-framework strategic inference
//!
//! This crate bridges completed strategy framework outputs into each other
//! (PESTLE → Porter's, Porter's → SWOT), extracts strategic signals from
//! insight snippets, and aggregates them into a strategy profile that drives
//! downstream workstream planning.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
