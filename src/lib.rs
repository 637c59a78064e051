//! Compound interest projection with low, mid and high rate scenarios.
//!
//! - `core`: the projection engine, pure and locale-free
//! - `report`: localized labels, currency display and text tables
//! - `api`: command line and HTTP surfaces

pub mod api;
pub mod core;
pub mod report;
