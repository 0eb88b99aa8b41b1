//! Weighted asset-class risk scoring.

use super::rounding::{round_half_up, PERCENT_DP};
use crate::types::{AllocationMap, AssetClass, HealthConfig, RiskBands};
use crate::{PortfolioError, PortfolioResult};
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

const RISK_EXPLANATION: &str = "Risk calculated using weighted exposure to asset classes.";

/// Qualitative risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Score below the low band
    Low,
    /// Score below the moderate band
    Moderate,
    /// Everything else
    High,
}

impl RiskLevel {
    /// Maps a score through the bands (exclusive upper bounds).
    #[must_use]
    pub fn from_score(score: Decimal, bands: &RiskBands) -> Self {
        if score < bands.low_below {
            Self::Low
        } else if score < bands.moderate_below {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Risk stage output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    /// Allocation-weighted risk, 2 dp.
    pub risk_score: Decimal,
    /// Level derived from the risk bands.
    pub risk_level: RiskLevel,
    /// Human-readable summary.
    pub explanation: String,
}

/// Resolves the weight for one class, applying the fallback rules.
fn weight_for(class: &AssetClass, config: &HealthConfig) -> PortfolioResult<Decimal> {
    if let Some(weight) = config.risk_weight(class) {
        return Ok(weight);
    }
    if config.strict_asset_classes {
        return Err(PortfolioError::unknown_asset_class(class.name()));
    }
    debug!(
        "No risk weight for asset class {}, using default {}",
        class, config.default_risk_weight
    );
    Ok(config.default_risk_weight)
}

/// Scores risk as the allocation-weighted average of class weights.
///
/// `risk_score = Σ (pct / 100) × weight`, rounded half-up to 2 dp. Classes
/// without a configured weight use `default_risk_weight`.
///
/// # Errors
///
/// Returns [`PortfolioError::UnknownAssetClass`] only when
/// `strict_asset_classes` is enabled and a class has no weight, and
/// [`PortfolioError::ValueOverflow`] if the weighted sum leaves the
/// `Decimal` range.
pub fn score_risk(
    class_allocations: &AllocationMap<AssetClass>,
    config: &HealthConfig,
) -> PortfolioResult<RiskResult> {
    let mut weighted = Decimal::ZERO;
    for (class, pct) in class_allocations.iter() {
        weighted = (pct / Decimal::ONE_HUNDRED)
            .checked_mul(weight_for(class, config)?)
            .and_then(|contribution| weighted.checked_add(contribution))
            .ok_or_else(|| PortfolioError::value_overflow("risk score"))?;
    }

    let risk_score = round_half_up(weighted, PERCENT_DP);

    Ok(RiskResult {
        risk_score,
        risk_level: RiskLevel::from_score(risk_score, &config.risk_bands),
        explanation: RISK_EXPLANATION.to_string(),
    })
}
