//! Core portfolio type.

use super::PortfolioBuilder;
use crate::types::{Asset, AssetClass};
use crate::{PortfolioError, PortfolioResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An ordered collection of holdings to analyze.
///
/// Order matters: when two assets share a symbol, the later one wins in the
/// per-asset allocation view.
///
/// # Example
///
/// ```
/// use risklens_portfolio::Portfolio;
/// use rust_decimal_macros::dec;
///
/// let json = r#"{"assets": [{"symbol": "AAPL", "type": "stock", "value": 20000}]}"#;
/// let portfolio: Portfolio = serde_json::from_str(json).unwrap();
/// assert_eq!(portfolio.asset_count(), 1);
/// assert_eq!(portfolio.total_value().unwrap(), dec!(20000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Holdings in input order.
    #[serde(default)]
    pub assets: Vec<Asset>,
}

impl Portfolio {
    /// Creates a portfolio from assets without validation.
    #[must_use]
    pub fn new(assets: Vec<Asset>) -> Self {
        Self { name: None, assets }
    }

    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> PortfolioBuilder {
        PortfolioBuilder::new()
    }

    /// Number of holdings.
    #[must_use]
    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    /// Returns true if there are no holdings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Sum of holding values.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::ValueOverflow`] if the sum exceeds the
    /// `Decimal` range.
    pub fn total_value(&self) -> PortfolioResult<Decimal> {
        self.assets.iter().try_fold(Decimal::ZERO, |total, asset| {
            total
                .checked_add(asset.value)
                .ok_or_else(|| PortfolioError::value_overflow("total portfolio value"))
        })
    }

    /// Distinct asset classes in first-seen order.
    #[must_use]
    pub fn asset_classes(&self) -> Vec<&AssetClass> {
        let mut classes: Vec<&AssetClass> = Vec::new();
        for asset in &self.assets {
            if !classes.contains(&&asset.asset_type) {
                classes.push(&asset.asset_type);
            }
        }
        classes
    }

    /// Display label for logging.
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}
