//! Portfolio builder for fluent construction.

use crate::types::{Asset, AssetClass};
use crate::{Portfolio, PortfolioError, PortfolioResult};
use rust_decimal::Decimal;

/// Builder for constructing a [`Portfolio`].
///
/// Unlike [`Portfolio::new`], `build` checks each holding.
///
/// # Example
///
/// ```
/// use risklens_portfolio::prelude::*;
///
/// let portfolio = PortfolioBuilder::new()
///     .name("Retirement")
///     .add_asset(Asset::new("VTI", AssetClass::Etf, dec!(12000)))
///     .asset("BND", AssetClass::Bond, dec!(8000))
///     .build()
///     .unwrap();
///
/// assert_eq!(portfolio.asset_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PortfolioBuilder {
    name: Option<String>,
    assets: Vec<Asset>,
}

impl PortfolioBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the portfolio name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a holding.
    #[must_use]
    pub fn add_asset(mut self, asset: Asset) -> Self {
        self.assets.push(asset);
        self
    }

    /// Adds a holding from its parts.
    #[must_use]
    pub fn asset(
        self,
        symbol: impl Into<String>,
        asset_type: impl Into<AssetClass>,
        value: Decimal,
    ) -> Self {
        self.add_asset(Asset::new(symbol, asset_type, value))
    }

    /// Adds multiple holdings.
    #[must_use]
    pub fn add_assets(mut self, assets: impl IntoIterator<Item = Asset>) -> Self {
        self.assets.extend(assets);
        self
    }

    /// Sets all holdings (replacing any existing).
    #[must_use]
    pub fn assets(mut self, assets: Vec<Asset>) -> Self {
        self.assets = assets;
        self
    }

    /// Builds the portfolio.
    ///
    /// # Errors
    ///
    /// Returns an error if any asset has an empty symbol or a negative value.
    /// An empty asset list is accepted here and rejected at analysis time.
    pub fn build(self) -> PortfolioResult<Portfolio> {
        for asset in &self.assets {
            if asset.symbol.trim().is_empty() {
                return Err(PortfolioError::invalid_asset(
                    &asset.symbol,
                    "symbol must not be empty",
                ));
            }
            if asset.value.is_sign_negative() && !asset.value.is_zero() {
                return Err(PortfolioError::invalid_asset(
                    &asset.symbol,
                    format!("value must not be negative, got {}", asset.value),
                ));
            }
        }

        Ok(Portfolio {
            name: self.name,
            assets: self.assets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_basic_build() {
        let portfolio = PortfolioBuilder::new()
            .name("Test")
            .asset("AAPL", "stock", dec!(100))
            .asset("GLD", AssetClass::Commodity, dec!(50))
            .build()
            .unwrap();

        assert_eq!(portfolio.name.as_deref(), Some("Test"));
        assert_eq!(portfolio.asset_count(), 2);
        assert_eq!(portfolio.assets[0].asset_type, AssetClass::Stock);
    }

    #[test]
    fn test_add_assets_batch() {
        let assets = vec![
            Asset::new("A", AssetClass::Stock, dec!(1)),
            Asset::new("B", AssetClass::Bond, dec!(2)),
            Asset::new("C", AssetClass::Etf, dec!(3)),
        ];
        let portfolio = PortfolioBuilder::new().add_assets(assets).build().unwrap();
        assert_eq!(portfolio.asset_count(), 3);
        assert_eq!(portfolio.total_value().unwrap(), dec!(6));
    }

    #[test]
    fn test_assets_replaces() {
        let portfolio = PortfolioBuilder::new()
            .asset("A", AssetClass::Stock, dec!(1))
            .assets(vec![Asset::new("B", AssetClass::Bond, dec!(2))])
            .build()
            .unwrap();
        assert_eq!(portfolio.asset_count(), 1);
        assert_eq!(portfolio.assets[0].symbol, "B");
    }

    #[test]
    fn test_empty_is_allowed() {
        let portfolio = PortfolioBuilder::new().build().unwrap();
        assert!(portfolio.is_empty());
    }

    #[test]
    fn test_rejects_negative_value() {
        let result = PortfolioBuilder::new()
            .asset("SHORT", AssetClass::Stock, dec!(-10))
            .build();
        let err = result.unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidAsset { .. }));
        assert!(err.to_string().contains("SHORT"));
    }

    #[test]
    fn test_zero_value_is_allowed() {
        let result = PortfolioBuilder::new()
            .asset("CASH", AssetClass::Other("cash".into()), dec!(0))
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_rejects_blank_symbol() {
        let result = PortfolioBuilder::new()
            .asset("  ", AssetClass::Stock, dec!(10))
            .build();
        assert!(result.unwrap_err().to_string().contains("symbol"));
    }
}
