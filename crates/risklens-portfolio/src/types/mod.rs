//! Domain types for portfolio health analytics.
//!
//! This module provides type-safe representations of portfolio concepts:
//!
//! - [`Asset`]: A single holding with symbol, class and value
//! - [`AssetClass`]: Standard and open-ended asset classes
//! - [`AllocationMap`]: Insertion-ordered percentage maps
//! - [`RiskProfile`]: Named target allocation for rebalancing
//! - [`HealthConfig`]: Lookup tables and thresholds for the pipeline

mod allocation;
mod asset;
mod config;
mod profile;

// Re-export all types
pub use allocation::AllocationMap;
pub use asset::{Asset, AssetClass};
pub use config::{DiversificationBands, HealthConfig, RiskBands};
pub use profile::{IdealAllocation, RiskProfile, StandardProfile};
