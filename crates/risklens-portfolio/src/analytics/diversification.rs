//! Diversification scoring with the Herfindahl-Hirschman Index.

use super::rounding::{round_half_up, HHI_DP};
use crate::types::{AllocationMap, DiversificationBands};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative diversification level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiversificationLevel {
    /// HHI below the first band
    #[serde(rename = "Highly Diversified")]
    HighlyDiversified,
    /// HHI below the second band
    #[serde(rename = "Moderately Diversified")]
    ModeratelyDiversified,
    /// Everything else
    #[serde(rename = "Concentrated")]
    Concentrated,
}

impl DiversificationLevel {
    /// Human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::HighlyDiversified => "Highly Diversified",
            Self::ModeratelyDiversified => "Moderately Diversified",
            Self::Concentrated => "Concentrated",
        }
    }
}

impl fmt::Display for DiversificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Diversification stage output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiversificationResult {
    /// Sum of squared allocation fractions, 4 dp.
    pub hhi: Decimal,
    /// Level derived from the HHI bands.
    pub diversification_level: DiversificationLevel,
    /// Score attached to the level.
    pub score: u8,
    /// Human-readable summary.
    pub explanation: String,
}

/// Scores concentration across individual holdings.
///
/// `hhi = Σ (pct / 100)²`, rounded half-up to 4 dp, then mapped through
/// `bands` (exclusive upper bounds).
#[must_use]
pub fn score_diversification(
    asset_allocations: &AllocationMap<String>,
    bands: &DiversificationBands,
) -> DiversificationResult {
    // Saturating; an index past the Decimal range still reads as Concentrated
    let raw = asset_allocations
        .values()
        .fold(Decimal::ZERO, |acc, pct| {
            let weight = pct / Decimal::ONE_HUNDRED;
            acc.saturating_add(weight.saturating_mul(weight))
        });
    let hhi = round_half_up(raw, HHI_DP);

    let (level, score) = if hhi < bands.highly_diversified_below {
        (
            DiversificationLevel::HighlyDiversified,
            bands.highly_diversified_score,
        )
    } else if hhi < bands.moderately_diversified_below {
        (
            DiversificationLevel::ModeratelyDiversified,
            bands.moderately_diversified_score,
        )
    } else {
        (DiversificationLevel::Concentrated, bands.concentrated_score)
    };

    DiversificationResult {
        hhi,
        diversification_level: level,
        score,
        explanation: format!(
            "HHI = {}. Lower values indicate better diversification.",
            hhi.normalize()
        ),
    }
}
