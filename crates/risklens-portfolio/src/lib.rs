//! # RiskLens Portfolio
//!
//! Rules-based health analytics for investment portfolios.
//!
//! Given a list of holdings and a risk profile name, this crate produces a
//! deterministic report covering capital allocation, diversification, risk
//! and rebalancing.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: Every stage is stateless with explicit inputs
//! - **Injected configuration**: Risk weights, profiles and thresholds live in
//!   [`HealthConfig`], never in process-wide statics
//! - **Exact arithmetic**: Values and percentages are [`rust_decimal::Decimal`],
//!   rounded half-up at the documented precision
//! - **Config-driven parallelism**: Optional rayon support for the scoring stages
//!
//! ## Pipeline
//!
//! 1. **Aggregation**: total value, allocation % per symbol and per asset class
//! 2. **Diversification**: Herfindahl-Hirschman Index and level
//! 3. **Risk**: allocation-weighted asset-class risk score and level
//! 4. **Rebalancing**: deviations from the profile's ideal mix beyond a threshold
//!
//! Stages 2-4 only read the output of stage 1 and are independent of each other.
//!
//! ## Quick Start
//!
//! ```rust
//! use risklens_portfolio::prelude::*;
//!
//! let portfolio = PortfolioBuilder::new()
//!     .asset("AAPL", AssetClass::Stock, dec!(20000))
//!     .asset("BTC", AssetClass::Crypto, dec!(15000))
//!     .asset("Gold", AssetClass::Commodity, dec!(5000))
//!     .asset("US Bonds", AssetClass::Bond, dec!(10000))
//!     .build()
//!     .unwrap();
//!
//! let report = analyze_portfolio(&portfolio, "conservative").unwrap();
//!
//! assert_eq!(report.summary.total_value, dec!(50000));
//! assert_eq!(report.risk.risk_level, RiskLevel::Moderate);
//! assert_eq!(report.rebalancing.suggestions.len(), 2);
//! ```
//!
//! ## Module Overview
//!
//! - [`analytics`] - Pipeline stages, report assembly, snapshot digests
//! - [`portfolio`] - Portfolio and builder types
//! - [`types`] - Core types (Asset, AssetClass, RiskProfile, HealthConfig)
//!
//! ## Feature Flags
//!
//! - `parallel`: Run the scoring stages on the rayon pool when
//!   [`HealthConfig::parallel`] is set

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

// Module declarations
pub mod analytics;
pub mod error;
pub mod portfolio;
pub mod types;

// Re-export error types at crate root
pub use error::{PortfolioError, PortfolioResult};

// Re-export main types
pub use types::{
    AllocationMap, Asset, AssetClass, DiversificationBands, HealthConfig, IdealAllocation,
    RiskBands, RiskProfile, StandardProfile,
};

// Re-export portfolio types
pub use portfolio::{Portfolio, PortfolioBuilder};

// Re-export analytics types and functions
pub use analytics::{
    aggregate, analyze_portfolio, round_half_up, score_diversification, score_risk,
    snapshot_digest, suggest_rebalancing, AnalysisState, DiversificationLevel,
    DiversificationResult, HealthAnalyzer, HealthReport, PortfolioSummary, RebalanceDirection,
    RebalanceSuggestion, RebalancingResult, RiskLevel, RiskResult, SnapshotDigest,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use risklens_portfolio::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{PortfolioError, PortfolioResult};

    // Domain types
    pub use crate::types::{
        AllocationMap, Asset, AssetClass, HealthConfig, RiskProfile, StandardProfile,
    };

    // Portfolio
    pub use crate::portfolio::{Portfolio, PortfolioBuilder};

    // Analytics
    pub use crate::analytics::{
        aggregate, analyze_portfolio, score_diversification, score_risk, suggest_rebalancing,
        AnalysisState, DiversificationLevel, DiversificationResult, HealthAnalyzer, HealthReport,
        RebalanceDirection, RebalanceSuggestion, RebalancingResult, RiskLevel, RiskResult,
    };

    // Re-export commonly used types from dependencies
    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
}
