//! Profile-based rebalancing suggestions.
//!
//! Deviations are measured only for the classes named in the profile's ideal
//! allocation. A class that is held but absent from the profile is never
//! flagged.

use crate::types::{AllocationMap, AssetClass, RiskProfile};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;

use super::rounding::{round_half_up, PERCENT_DP};

const REBALANCING_EXPLANATION: &str = "Suggestions based on selected risk profile.";

/// Which way an allocation should move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RebalanceDirection {
    /// Over-allocated relative to the profile
    Reduce,
    /// Under-allocated relative to the profile
    Increase,
}

impl RebalanceDirection {
    /// Verb used in suggestion text.
    #[must_use]
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Reduce => "Reduce",
            Self::Increase => "Increase",
        }
    }
}

/// A single deviation beyond the threshold.
///
/// Serializes as its display text, e.g.
/// `"Reduce crypto exposure by approx 25% (Profile: conservative)."`.
#[derive(Debug, Clone, PartialEq)]
pub struct RebalanceSuggestion {
    /// Class to adjust.
    pub asset_class: AssetClass,
    /// Direction of the adjustment.
    pub direction: RebalanceDirection,
    /// Absolute deviation in percentage points, 2 dp.
    pub magnitude: Decimal,
    /// Profile the deviation was measured against.
    pub profile: String,
}

impl fmt::Display for RebalanceSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} exposure by approx {}% (Profile: {}).",
            self.direction.verb(),
            self.asset_class,
            self.magnitude.normalize(),
            self.profile
        )
    }
}

impl Serialize for RebalanceSuggestion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Rebalancing stage output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RebalancingResult {
    /// Name of the profile used as benchmark.
    pub profile_used: String,
    /// Suggestions in the profile's class order.
    pub suggestions: Vec<RebalanceSuggestion>,
    /// Human-readable summary.
    pub explanation: String,
}

impl RebalancingResult {
    /// Returns true if no class deviates beyond the threshold.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.suggestions.is_empty()
    }
}

/// Compares actual class allocations to the profile's targets.
///
/// For each class in the ideal allocation (in order), `deviation = actual -
/// ideal` with missing classes counting as 0%. A suggestion is produced only
/// when `|deviation| > threshold`; a deviation equal to the threshold is
/// left alone.
#[must_use]
pub fn suggest_rebalancing(
    class_allocations: &AllocationMap<AssetClass>,
    profile: &RiskProfile,
    threshold: Decimal,
) -> RebalancingResult {
    let suggestions = profile
        .ideal_allocation
        .iter()
        .filter_map(|(class, ideal)| {
            let actual = class_allocations.get(class).unwrap_or(Decimal::ZERO);
            let deviation = actual.saturating_sub(ideal);

            if deviation.abs() <= threshold {
                return None;
            }

            let direction = if deviation > Decimal::ZERO {
                RebalanceDirection::Reduce
            } else {
                RebalanceDirection::Increase
            };

            Some(RebalanceSuggestion {
                asset_class: class.clone(),
                direction,
                magnitude: round_half_up(deviation.abs(), PERCENT_DP),
                profile: profile.name.clone(),
            })
        })
        .collect();

    RebalancingResult {
        profile_used: profile.name.clone(),
        suggestions,
        explanation: REBALANCING_EXPLANATION.to_string(),
    }
}
