//! Error types for portfolio health analytics.
//!
//! This module defines the error types used throughout the portfolio crate.

use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio analysis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    /// Risk profile name is not one of the configured profiles.
    #[error("Invalid risk profile '{name}'. Choose: {available}")]
    InvalidRiskProfile {
        /// The requested profile name.
        name: String,
        /// Comma-separated list of configured profile names.
        available: String,
    },

    /// Empty portfolio.
    #[error("Portfolio contains no assets")]
    EmptyPortfolio,

    /// Sum of asset values is zero or negative.
    #[error("Total portfolio value must be positive, got {total}")]
    NonPositiveTotal {
        /// The computed total value.
        total: String,
    },

    /// Invalid asset data.
    #[error("Invalid asset '{symbol}': {reason}")]
    InvalidAsset {
        /// The asset symbol.
        symbol: String,
        /// The reason the asset is invalid.
        reason: String,
    },

    /// A value is too large for exact decimal arithmetic.
    #[error("Arithmetic overflow computing {context}")]
    ValueOverflow {
        /// What was being computed.
        context: String,
    },

    /// Asset class has no configured risk weight (strict mode only).
    #[error("No risk weight configured for asset class '{class}'")]
    UnknownAssetClass {
        /// The unrecognized asset class.
        class: String,
    },

    /// Invalid analysis configuration.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// The reason the configuration is invalid.
        reason: String,
    },

    /// JSON encoding or decoding failed.
    #[error("Serialization error: {reason}")]
    Serialization {
        /// The underlying serializer message.
        reason: String,
    },
}

impl PortfolioError {
    /// Create an invalid risk profile error.
    #[must_use]
    pub fn invalid_risk_profile(name: impl Into<String>, available: &[&str]) -> Self {
        Self::InvalidRiskProfile {
            name: name.into(),
            available: available.join(", "),
        }
    }

    /// Create a non-positive total error.
    #[must_use]
    pub fn non_positive_total(total: impl ToString) -> Self {
        Self::NonPositiveTotal {
            total: total.to_string(),
        }
    }

    /// Create an invalid asset error.
    #[must_use]
    pub fn invalid_asset(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAsset {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }

    /// Create a value overflow error.
    #[must_use]
    pub fn value_overflow(context: impl Into<String>) -> Self {
        Self::ValueOverflow {
            context: context.into(),
        }
    }

    /// Create an unknown asset class error.
    #[must_use]
    pub fn unknown_asset_class(class: impl Into<String>) -> Self {
        Self::UnknownAssetClass {
            class: class.into(),
        }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Returns true for input validation failures (bad profile, empty
    /// portfolio, non-positive total).
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidRiskProfile { .. } | Self::EmptyPortfolio | Self::NonPositiveTotal { .. }
        )
    }
}

impl From<serde_json::Error> for PortfolioError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}
