//! Adapters - Connections between the inference core and the outside world.
//!
//! - `http` - REST API over the application handlers

pub mod http;
