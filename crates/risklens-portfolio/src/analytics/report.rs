//! Health report assembly and the analysis pipeline.

use super::aggregation::aggregate;
use super::diversification::{score_diversification, DiversificationResult};
use super::parallel::maybe_parallel_join3;
use super::rebalancing::{suggest_rebalancing, RebalancingResult};
use super::risk::{score_risk, RiskResult};
use super::snapshot::{snapshot_digest, SnapshotDigest};
use crate::types::{AllocationMap, AssetClass, HealthConfig, RiskProfile, StandardProfile};
use crate::{Portfolio, PortfolioResult};
use log::info;
use rust_decimal::Decimal;
use serde::Serialize;

/// Allocation summary section of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    /// Sum of holding values.
    pub total_value: Decimal,
    /// Percentage per symbol.
    pub asset_allocations_percent: AllocationMap<String>,
    /// Percentage per asset class.
    pub class_allocations_percent: AllocationMap<AssetClass>,
}

/// Complete health report for one portfolio.
///
/// This is the primary output of the crate. Its JSON form is:
///
/// ```text
/// { "summary": {...}, "diversification": {...}, "risk": {...}, "rebalancing": {...} }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    /// Total value and allocations.
    pub summary: PortfolioSummary,
    /// HHI-based diversification score.
    pub diversification: DiversificationResult,
    /// Weighted asset-class risk.
    pub risk: RiskResult,
    /// Suggestions against the selected profile.
    pub rebalancing: RebalancingResult,
}

impl HealthReport {
    /// Returns true if any class deviates beyond the rebalance threshold.
    #[must_use]
    pub fn needs_rebalancing(&self) -> bool {
        !self.rebalancing.is_balanced()
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> PortfolioResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// SHA-256 fingerprint of the report.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn snapshot_digest(&self) -> PortfolioResult<SnapshotDigest> {
        snapshot_digest(self)
    }
}

/// Runs the health pipeline for one risk profile.
///
/// Holds only immutable configuration, so one analyzer can be shared across
/// threads. Each call to [`HealthAnalyzer::analyze`] aggregates from scratch.
///
/// # Example
///
/// ```
/// use risklens_portfolio::prelude::*;
///
/// let analyzer = HealthAnalyzer::new(HealthConfig::default(), "balanced").unwrap();
/// let portfolio = Portfolio::builder()
///     .asset("VTI", AssetClass::Etf, dec!(6000))
///     .asset("BND", AssetClass::Bond, dec!(4000))
///     .build()
///     .unwrap();
///
/// let report = analyzer.analyze(&portfolio).unwrap();
/// assert_eq!(report.summary.total_value, dec!(10000));
/// assert_eq!(report.rebalancing.profile_used, "balanced");
/// ```
#[derive(Debug, Clone)]
pub struct HealthAnalyzer {
    config: HealthConfig,
    profile: RiskProfile,
}

impl HealthAnalyzer {
    /// Creates an analyzer for a named profile.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PortfolioError::InvalidConfig`] if the configuration is
    /// inconsistent, or [`crate::PortfolioError::InvalidRiskProfile`] if the
    /// name is not configured. Both are checked before any portfolio is seen.
    pub fn new(config: HealthConfig, profile_name: &str) -> PortfolioResult<Self> {
        config.validate()?;
        let profile = config.profile(profile_name)?.clone();
        Ok(Self { config, profile })
    }

    /// Creates an analyzer with the default configuration and a standard profile.
    #[must_use]
    pub fn standard(profile: StandardProfile) -> Self {
        Self {
            config: HealthConfig::default(),
            profile: profile.profile(),
        }
    }

    /// The active profile.
    #[must_use]
    pub fn profile(&self) -> &RiskProfile {
        &self.profile
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &HealthConfig {
        &self.config
    }

    /// Analyzes a portfolio.
    ///
    /// Aggregation runs first and its errors abort the call. The
    /// diversification, risk and rebalancing stages then run on the fresh
    /// state (concurrently when parallelism is enabled).
    ///
    /// # Errors
    ///
    /// - [`crate::PortfolioError::EmptyPortfolio`] / [`crate::PortfolioError::NonPositiveTotal`] from aggregation
    /// - [`crate::PortfolioError::UnknownAssetClass`] in strict mode
    pub fn analyze(&self, portfolio: &Portfolio) -> PortfolioResult<HealthReport> {
        let state = aggregate(portfolio)?;
        let config = &self.config;

        let (diversification, risk, rebalancing) = maybe_parallel_join3(
            config,
            || score_diversification(state.asset_allocations(), &config.diversification),
            || score_risk(state.class_allocations(), config),
            || {
                suggest_rebalancing(
                    state.class_allocations(),
                    &self.profile,
                    config.rebalance_threshold,
                )
            },
        );
        let risk = risk?;

        info!(
            "Analyzed portfolio {} against '{}': total {}, HHI {}, risk {} ({}), {} suggestion(s)",
            portfolio.label(),
            self.profile.name,
            state.total_value(),
            diversification.hhi,
            risk.risk_score,
            risk.risk_level,
            rebalancing.suggestions.len()
        );

        let (total_value, asset_allocations_percent, class_allocations_percent) =
            state.into_parts();

        Ok(HealthReport {
            summary: PortfolioSummary {
                total_value,
                asset_allocations_percent,
                class_allocations_percent,
            },
            diversification,
            risk,
            rebalancing,
        })
    }
}

/// Convenience function: analyze with the default configuration.
///
/// # Errors
///
/// Same as [`HealthAnalyzer::new`] followed by [`HealthAnalyzer::analyze`].
///
/// # Example
///
/// ```ignore
/// let report = analyze_portfolio(&portfolio, "conservative")?;
/// ```
pub fn analyze_portfolio(
    portfolio: &Portfolio,
    profile_name: &str,
) -> PortfolioResult<HealthReport> {
    HealthAnalyzer::new(HealthConfig::default(), profile_name)?.analyze(portfolio)
}
