//! Portfolio health analytics.
//!
//! This module provides the four-stage health pipeline:
//! - Aggregation into per-asset and per-class allocations
//! - Diversification scoring (HHI)
//! - Weighted asset-class risk scoring
//! - Rebalancing suggestions against a risk profile
//!
//! plus report assembly and snapshot fingerprints. All stage functions are
//! pure - they take allocations and configuration as input and return
//! computed results. No caching, no I/O, no side effects beyond logging.

mod aggregation;
mod diversification;
mod parallel;
mod rebalancing;
mod report;
mod risk;
mod rounding;
mod snapshot;

pub use aggregation::*;
pub use diversification::*;
pub use parallel::*;
pub use rebalancing::*;
pub use report::*;
pub use risk::*;
pub use rounding::{round_half_up, HHI_DP, PERCENT_DP};
pub use snapshot::*;
