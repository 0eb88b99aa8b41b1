//! Allocation aggregation.
//!
//! Turns raw holdings into total value plus per-asset and per-class
//! percentage allocations. Every other stage reads only this output.

use super::rounding::percent_of;
use crate::types::{AllocationMap, AssetClass};
use crate::{Portfolio, PortfolioError, PortfolioResult};
use log::{debug, warn};
use rust_decimal::Decimal;

/// Allocation state computed from one portfolio.
///
/// Only [`aggregate`] constructs it, and it is read-only afterwards. Each
/// analysis builds its own state; nothing is carried between portfolios.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisState {
    total_value: Decimal,
    asset_allocations: AllocationMap<String>,
    class_allocations: AllocationMap<AssetClass>,
}

impl AnalysisState {
    /// Sum of all holding values. Always positive.
    #[must_use]
    pub fn total_value(&self) -> Decimal {
        self.total_value
    }

    /// Percentage of total value per symbol (2 dp).
    #[must_use]
    pub fn asset_allocations(&self) -> &AllocationMap<String> {
        &self.asset_allocations
    }

    /// Percentage of total value per asset class (2 dp).
    #[must_use]
    pub fn class_allocations(&self) -> &AllocationMap<AssetClass> {
        &self.class_allocations
    }

    /// Number of distinct symbols.
    #[must_use]
    pub fn asset_count(&self) -> usize {
        self.asset_allocations.len()
    }

    /// Symbol with the largest allocation.
    #[must_use]
    pub fn largest_position(&self) -> Option<(&str, Decimal)> {
        self.asset_allocations
            .largest()
            .map(|(symbol, pct)| (symbol.as_str(), pct))
    }

    pub(crate) fn into_parts(
        self,
    ) -> (Decimal, AllocationMap<String>, AllocationMap<AssetClass>) {
        (self.total_value, self.asset_allocations, self.class_allocations)
    }
}

/// Aggregates a portfolio into allocation percentages.
///
/// Percentages are rounded half-up to 2 dp with no redistribution, so sums
/// may differ slightly from 100. When two holdings share a symbol the later
/// one replaces the earlier in the per-asset view; class totals still count
/// both.
///
/// # Errors
///
/// - [`PortfolioError::EmptyPortfolio`] if there are no assets
/// - [`PortfolioError::NonPositiveTotal`] if the values sum to zero or less
/// - [`PortfolioError::ValueOverflow`] if a sum or percentage leaves the
///   `Decimal` range
pub fn aggregate(portfolio: &Portfolio) -> PortfolioResult<AnalysisState> {
    if portfolio.is_empty() {
        return Err(PortfolioError::EmptyPortfolio);
    }

    let total_value = portfolio.total_value()?;
    if total_value <= Decimal::ZERO {
        return Err(PortfolioError::non_positive_total(total_value));
    }

    let mut asset_allocations = AllocationMap::new();
    for asset in &portfolio.assets {
        let pct = allocation_percent(asset.value, total_value, &asset.symbol)?;
        if let Some(previous) = asset_allocations.insert(asset.symbol.clone(), pct) {
            warn!(
                "Duplicate symbol {} in portfolio {}: {}% replaced by {}%",
                asset.symbol,
                portfolio.label(),
                previous,
                pct
            );
        }
    }

    let mut class_totals = AllocationMap::new();
    for asset in &portfolio.assets {
        class_totals
            .accumulate(asset.asset_type.clone(), asset.value)
            .ok_or_else(|| {
                PortfolioError::value_overflow(format!("{} class total", asset.asset_type))
            })?;
    }

    let mut class_allocations = AllocationMap::new();
    for (class, value) in class_totals.iter() {
        let pct = allocation_percent(value, total_value, class.name())?;
        class_allocations.insert(class.clone(), pct);
    }

    debug!(
        "Aggregated portfolio {}: {} assets, {} classes, total value {}",
        portfolio.label(),
        portfolio.asset_count(),
        class_allocations.len(),
        total_value
    );

    Ok(AnalysisState {
        total_value,
        asset_allocations,
        class_allocations,
    })
}

fn allocation_percent(value: Decimal, total: Decimal, label: &str) -> PortfolioResult<Decimal> {
    percent_of(value, total)
        .ok_or_else(|| PortfolioError::value_overflow(format!("allocation of {label}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Asset;
    use rust_decimal_macros::dec;

    fn sample_portfolio() -> Portfolio {
        Portfolio::new(vec![
            Asset::new("AAPL", AssetClass::Stock, dec!(20000)),
            Asset::new("BTC", AssetClass::Crypto, dec!(15000)),
            Asset::new("Gold", AssetClass::Commodity, dec!(5000)),
            Asset::new("US Bonds", AssetClass::Bond, dec!(10000)),
        ])
    }

    #[test]
    fn test_aggregate_sample() {
        let state = aggregate(&sample_portfolio()).unwrap();

        assert_eq!(state.total_value(), dec!(50000));
        assert_eq!(state.asset_allocations().get(&"AAPL".to_string()), Some(dec!(40)));
        assert_eq!(state.asset_allocations().get(&"BTC".to_string()), Some(dec!(30)));
        assert_eq!(state.asset_allocations().get(&"Gold".to_string()), Some(dec!(10)));
        assert_eq!(
            state.asset_allocations().get(&"US Bonds".to_string()),
            Some(dec!(20))
        );

        let classes = state.class_allocations();
        assert_eq!(classes.get(&AssetClass::Stock), Some(dec!(40)));
        assert_eq!(classes.get(&AssetClass::Crypto), Some(dec!(30)));
        assert_eq!(classes.get(&AssetClass::Commodity), Some(dec!(10)));
        assert_eq!(classes.get(&AssetClass::Bond), Some(dec!(20)));
        assert!(classes.get(&AssetClass::Etf).is_none());
    }

    #[test]
    fn test_class_totals_group_assets() {
        let portfolio = Portfolio::new(vec![
            Asset::new("AAPL", AssetClass::Stock, dec!(100)),
            Asset::new("BND", AssetClass::Bond, dec!(100)),
            Asset::new("MSFT", AssetClass::Stock, dec!(100)),
        ]);
        let state = aggregate(&portfolio).unwrap();

        assert_eq!(state.class_allocations().len(), 2);
        assert_eq!(state.class_allocations().get(&AssetClass::Stock), Some(dec!(66.67)));
        assert_eq!(state.class_allocations().get(&AssetClass::Bond), Some(dec!(33.33)));
    }

    #[test]
    fn test_rounding_not_redistributed() {
        let portfolio = Portfolio::new(vec![
            Asset::new("A", AssetClass::Stock, dec!(1)),
            Asset::new("B", AssetClass::Bond, dec!(1)),
            Asset::new("C", AssetClass::Etf, dec!(1)),
        ]);
        let state = aggregate(&portfolio).unwrap();
        assert_eq!(state.asset_allocations().total(), dec!(99.99));
    }

    #[test]
    fn test_duplicate_symbol_last_write_wins() {
        let portfolio = Portfolio::new(vec![
            Asset::new("X", AssetClass::Stock, dec!(100)),
            Asset::new("Y", AssetClass::Bond, dec!(100)),
            Asset::new("X", AssetClass::Stock, dec!(200)),
        ]);
        let state = aggregate(&portfolio).unwrap();

        // Later X (200 of 400) replaces, not adds to, the earlier X
        assert_eq!(state.asset_allocations().get(&"X".to_string()), Some(dec!(50)));
        assert_eq!(state.asset_count(), 2);
        // First-seen position is kept
        assert_eq!(state.asset_allocations().keys().next().unwrap(), "X");
        // Class totals count both holdings
        assert_eq!(state.class_allocations().get(&AssetClass::Stock), Some(dec!(75)));
    }

    #[test]
    fn test_unknown_class_is_aggregated() {
        let portfolio = Portfolio::new(vec![
            Asset::new("Painting", "art", dec!(25)),
            Asset::new("SPY", AssetClass::Etf, dec!(75)),
        ]);
        let state = aggregate(&portfolio).unwrap();
        assert_eq!(
            state.class_allocations().get(&AssetClass::Other("art".into())),
            Some(dec!(25))
        );
    }

    #[test]
    fn test_empty_portfolio() {
        let err = aggregate(&Portfolio::default()).unwrap_err();
        assert_eq!(err, PortfolioError::EmptyPortfolio);
    }

    #[test]
    fn test_zero_total() {
        let portfolio = Portfolio::new(vec![Asset::new("A", AssetClass::Stock, dec!(0))]);
        let err = aggregate(&portfolio).unwrap_err();
        assert!(matches!(err, PortfolioError::NonPositiveTotal { .. }));
    }

    #[test]
    fn test_negative_total() {
        let portfolio = Portfolio::new(vec![
            Asset::new("A", AssetClass::Stock, dec!(10)),
            Asset::new("B", AssetClass::Stock, dec!(-30)),
        ]);
        let err = aggregate(&portfolio).unwrap_err();
        assert!(err.to_string().contains("-20"));
    }

    #[test]
    fn test_holding_near_decimal_limit() {
        let big = Decimal::from_i128_with_scale(10_i128.pow(27), 0);
        let portfolio = Portfolio::new(vec![
            Asset::new("A", AssetClass::Stock, big),
            Asset::new("B", AssetClass::Bond, dec!(1)),
        ]);
        let state = aggregate(&portfolio).unwrap();

        assert_eq!(state.total_value(), big + Decimal::ONE);
        assert_eq!(state.asset_allocations().get(&"A".to_string()), Some(dec!(100)));
        assert_eq!(state.asset_allocations().get(&"B".to_string()), Some(dec!(0)));
        assert_eq!(state.class_allocations().get(&AssetClass::Stock), Some(dec!(100)));
    }

    #[test]
    fn test_total_overflow_is_an_error() {
        let portfolio = Portfolio::new(vec![
            Asset::new("A", AssetClass::Stock, Decimal::MAX),
            Asset::new("B", AssetClass::Bond, Decimal::MAX),
        ]);
        let err = aggregate(&portfolio).unwrap_err();
        assert!(matches!(err, PortfolioError::ValueOverflow { .. }));
    }

    #[test]
    fn test_class_total_overflow_is_an_error() {
        // Total fits, but the two stock holdings overflow their class bucket
        let portfolio = Portfolio::new(vec![
            Asset::new("A", AssetClass::Stock, Decimal::MAX),
            Asset::new("B", AssetClass::Bond, -Decimal::MAX),
            Asset::new("C", AssetClass::Stock, Decimal::MAX),
        ]);
        let err = aggregate(&portfolio).unwrap_err();
        assert_eq!(err, PortfolioError::value_overflow("stock class total"));
    }

    #[test]
    fn test_allocation_overflow_is_an_error() {
        // Total of 1 puts the large holding at MAX x 100 percent
        let portfolio = Portfolio::new(vec![
            Asset::new("A", AssetClass::Stock, Decimal::MAX),
            Asset::new("B", AssetClass::Bond, -(Decimal::MAX - Decimal::ONE)),
        ]);
        let err = aggregate(&portfolio).unwrap_err();
        assert_eq!(err, PortfolioError::value_overflow("allocation of A"));
    }

    #[test]
    fn test_thousands_of_holdings() {
        let classes = [AssetClass::Stock, AssetClass::Bond, AssetClass::Etf];
        let portfolio = Portfolio::new(
            (0..3000)
                .map(|i| Asset::new(format!("H{i:04}"), classes[i % 3].clone(), dec!(10)))
                .collect(),
        );
        let state = aggregate(&portfolio).unwrap();

        assert_eq!(state.asset_count(), 3000);
        assert_eq!(state.asset_allocations().keys().last().unwrap(), "H2999");
        assert_eq!(state.asset_allocations().get(&"H1500".to_string()), Some(dec!(0.03)));
        assert_eq!(state.class_allocations().len(), 3);
        assert_eq!(state.class_allocations().get(&AssetClass::Etf), Some(dec!(33.33)));
    }

    #[test]
    fn test_largest_position() {
        let state = aggregate(&sample_portfolio()).unwrap();
        assert_eq!(state.largest_position(), Some(("AAPL", dec!(40))));
    }
}
