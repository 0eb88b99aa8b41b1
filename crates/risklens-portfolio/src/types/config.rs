//! Configuration for portfolio health analysis.

use super::{AllocationMap, AssetClass, RiskProfile, StandardProfile};
use crate::error::{PortfolioError, PortfolioResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// HHI cut-offs and the scores attached to each diversification level.
///
/// Cut-offs are exclusive upper bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiversificationBands {
    /// HHI below this is "Highly Diversified".
    pub highly_diversified_below: Decimal,
    /// HHI below this (and not highly diversified) is "Moderately Diversified".
    pub moderately_diversified_below: Decimal,
    /// Score for "Highly Diversified".
    pub highly_diversified_score: u8,
    /// Score for "Moderately Diversified".
    pub moderately_diversified_score: u8,
    /// Score for "Concentrated".
    pub concentrated_score: u8,
}

impl Default for DiversificationBands {
    fn default() -> Self {
        Self {
            highly_diversified_below: dec!(0.15),
            moderately_diversified_below: dec!(0.25),
            highly_diversified_score: 90,
            moderately_diversified_score: 70,
            concentrated_score: 40,
        }
    }
}

/// Risk score cut-offs (exclusive upper bounds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskBands {
    /// Scores below this are "Low".
    pub low_below: Decimal,
    /// Scores below this (and not low) are "Moderate"; the rest are "High".
    pub moderate_below: Decimal,
}

impl Default for RiskBands {
    fn default() -> Self {
        Self {
            low_below: dec!(2),
            moderate_below: dec!(3.5),
        }
    }
}

/// Configuration for portfolio health analysis.
///
/// Holds every lookup table and threshold the pipeline uses. The defaults
/// reproduce the standard rule set; tests and callers may substitute their
/// own tables without touching the scoring code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    /// Risk weight per asset class.
    pub risk_weights: AllocationMap<AssetClass>,

    /// Weight used for classes missing from `risk_weights`.
    pub default_risk_weight: Decimal,

    /// Fail instead of falling back to `default_risk_weight`.
    pub strict_asset_classes: bool,

    /// Available risk profiles.
    pub profiles: Vec<RiskProfile>,

    /// Minimum absolute deviation (percentage points) that triggers a suggestion.
    pub rebalance_threshold: Decimal,

    /// HHI levels and scores.
    pub diversification: DiversificationBands,

    /// Risk score levels.
    pub risk_bands: RiskBands,

    /// Run the scoring stages on the rayon pool (requires 'parallel' feature).
    pub parallel: bool,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            risk_weights: default_risk_weights(),
            default_risk_weight: dec!(3),
            strict_asset_classes: false,
            profiles: StandardProfile::all()
                .iter()
                .map(StandardProfile::profile)
                .collect(),
            rebalance_threshold: dec!(15),
            diversification: DiversificationBands::default(),
            risk_bands: RiskBands::default(),
            parallel: false,
        }
    }
}

fn default_risk_weights() -> AllocationMap<AssetClass> {
    [
        (AssetClass::Bond, dec!(1)),
        (AssetClass::Etf, dec!(2)),
        (AssetClass::Stock, dec!(3)),
        (AssetClass::Commodity, dec!(3)),
        (AssetClass::Crypto, dec!(5)),
    ]
    .into_iter()
    .collect()
}

impl HealthConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a config from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the result fails validation.
    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the config as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> PortfolioResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Sets the weight for one asset class.
    #[must_use]
    pub fn with_risk_weight(mut self, class: AssetClass, weight: Decimal) -> Self {
        self.risk_weights.insert(class, weight);
        self
    }

    /// Sets the fallback weight for unlisted classes.
    #[must_use]
    pub fn with_default_risk_weight(mut self, weight: Decimal) -> Self {
        self.default_risk_weight = weight;
        self
    }

    /// Sets whether unlisted classes are an error.
    #[must_use]
    pub fn with_strict_asset_classes(mut self, strict: bool) -> Self {
        self.strict_asset_classes = strict;
        self
    }

    /// Adds a profile, replacing any existing profile with the same name.
    #[must_use]
    pub fn with_profile(mut self, profile: RiskProfile) -> Self {
        match self.profiles.iter_mut().find(|p| p.name == profile.name) {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
        self
    }

    /// Sets the rebalance threshold.
    #[must_use]
    pub fn with_rebalance_threshold(mut self, threshold: Decimal) -> Self {
        self.rebalance_threshold = threshold;
        self
    }

    /// Sets the diversification bands.
    #[must_use]
    pub fn with_diversification(mut self, bands: DiversificationBands) -> Self {
        self.diversification = bands;
        self
    }

    /// Sets the risk bands.
    #[must_use]
    pub fn with_risk_bands(mut self, bands: RiskBands) -> Self {
        self.risk_bands = bands;
        self
    }

    /// Sets whether to use parallel stage execution.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Looks up a profile by name.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::InvalidRiskProfile`] if no profile has this name.
    pub fn profile(&self, name: &str) -> PortfolioResult<&RiskProfile> {
        self.profiles
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| PortfolioError::invalid_risk_profile(name, &self.profile_names()))
    }

    /// Configured profile names in order.
    #[must_use]
    pub fn profile_names(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.name.as_str()).collect()
    }

    /// Weight for a class, or `None` if it is not in the table.
    #[must_use]
    pub fn risk_weight(&self, class: &AssetClass) -> Option<Decimal> {
        self.risk_weights.get(class)
    }

    /// Returns true if stage parallelism should be used.
    #[must_use]
    pub fn should_parallelize(&self) -> bool {
        cfg!(feature = "parallel") && self.parallel
    }

    /// Checks the tables and thresholds for consistency.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::InvalidConfig`] describing the first problem found.
    pub fn validate(&self) -> PortfolioResult<()> {
        if self.profiles.is_empty() {
            return Err(PortfolioError::invalid_config("no risk profiles configured"));
        }

        let mut seen = HashSet::new();
        for profile in &self.profiles {
            if !seen.insert(profile.name.as_str()) {
                return Err(PortfolioError::invalid_config(format!(
                    "duplicate risk profile '{}'",
                    profile.name
                )));
            }
            for (class, target) in profile.ideal_allocation.iter() {
                if target < Decimal::ZERO || target > Decimal::ONE_HUNDRED {
                    return Err(PortfolioError::invalid_config(format!(
                        "profile '{}' targets {}% {}, expected 0-100",
                        profile.name, target, class
                    )));
                }
            }
        }

        if let Some((class, weight)) = self.risk_weights.iter().find(|(_, w)| *w < Decimal::ZERO) {
            return Err(PortfolioError::invalid_config(format!(
                "negative risk weight {weight} for {class}"
            )));
        }
        if self.default_risk_weight < Decimal::ZERO {
            return Err(PortfolioError::invalid_config("negative default risk weight"));
        }
        if self.rebalance_threshold < Decimal::ZERO {
            return Err(PortfolioError::invalid_config("negative rebalance threshold"));
        }

        let d = &self.diversification;
        if d.highly_diversified_below > d.moderately_diversified_below {
            return Err(PortfolioError::invalid_config(
                "diversification bands must be increasing",
            ));
        }
        if self.risk_bands.low_below > self.risk_bands.moderate_below {
            return Err(PortfolioError::invalid_config("risk bands must be increasing"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = HealthConfig::default();
        assert_eq!(config.risk_weight(&AssetClass::Bond), Some(dec!(1)));
        assert_eq!(config.risk_weight(&AssetClass::Etf), Some(dec!(2)));
        assert_eq!(config.risk_weight(&AssetClass::Stock), Some(dec!(3)));
        assert_eq!(config.risk_weight(&AssetClass::Commodity), Some(dec!(3)));
        assert_eq!(config.risk_weight(&AssetClass::Crypto), Some(dec!(5)));
        assert_eq!(config.default_risk_weight, dec!(3));
        assert_eq!(config.rebalance_threshold, dec!(15));
        assert_eq!(
            config.profile_names(),
            vec!["conservative", "balanced", "aggressive"]
        );
        assert!(!config.strict_asset_classes);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_profile_lookup() {
        let config = HealthConfig::default();
        assert_eq!(config.profile("balanced").unwrap().name, "balanced");

        let err = config.profile("growth").unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidRiskProfile { .. }));
        assert!(err.to_string().contains("conservative, balanced, aggressive"));
    }

    #[test]
    fn test_builder_pattern() {
        let custom = RiskProfile::new(
            "income",
            [(AssetClass::Bond, dec!(80)), (AssetClass::Etf, dec!(20))]
                .into_iter()
                .collect(),
        );
        let config = HealthConfig::new()
            .with_risk_weight(AssetClass::Other("art".into()), dec!(4))
            .with_default_risk_weight(dec!(2.5))
            .with_rebalance_threshold(dec!(10))
            .with_profile(custom)
            .with_strict_asset_classes(true)
            .with_parallel(true);

        assert_eq!(config.risk_weight(&AssetClass::Other("art".into())), Some(dec!(4)));
        assert_eq!(config.default_risk_weight, dec!(2.5));
        assert_eq!(config.rebalance_threshold, dec!(10));
        assert_eq!(config.profiles.len(), 4);
        assert!(config.strict_asset_classes);
        assert!(config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_profile_replaces_by_name() {
        let replacement = RiskProfile::new(
            "balanced",
            [(AssetClass::Stock, dec!(100))].into_iter().collect(),
        );
        let config = HealthConfig::new().with_profile(replacement);
        assert_eq!(config.profiles.len(), 3);
        assert_eq!(
            config.profile("balanced").unwrap().target(&AssetClass::Stock),
            Some(dec!(100))
        );
    }

    #[test]
    fn test_should_parallelize() {
        let config = HealthConfig::new().with_parallel(true);

        #[cfg(feature = "parallel")]
        assert!(config.should_parallelize());

        #[cfg(not(feature = "parallel"))]
        assert!(!config.should_parallelize());

        assert!(!HealthConfig::new().should_parallelize());
    }

    #[test]
    fn test_validate_rejects_bad_tables() {
        let mut config = HealthConfig::default();
        config.profiles.clear();
        assert!(config.validate().is_err());

        let config = HealthConfig::default().with_rebalance_threshold(dec!(-1));
        assert!(config.validate().is_err());

        let config = HealthConfig::default().with_risk_weight(AssetClass::Crypto, dec!(-5));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("crypto"));

        let config = HealthConfig::default().with_risk_bands(RiskBands {
            low_below: dec!(4),
            moderate_below: dec!(3),
        });
        assert!(config.validate().is_err());

        let config = HealthConfig::default().with_diversification(DiversificationBands {
            highly_diversified_below: dec!(0.5),
            ..DiversificationBands::default()
        });
        assert!(config.validate().is_err());

        let over = RiskProfile::new("over", [(AssetClass::Stock, dec!(120))].into_iter().collect());
        let config = HealthConfig::default().with_profile(over);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_profiles() {
        let mut config = HealthConfig::default();
        config.profiles.push(StandardProfile::Balanced.profile());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_json_round_trip() {
        let config = HealthConfig::new().with_rebalance_threshold(dec!(12.5));
        let json = config.to_json().unwrap();
        let parsed = HealthConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let parsed = HealthConfig::from_json(r#"{"rebalance_threshold": 20}"#).unwrap();
        assert_eq!(parsed.rebalance_threshold, dec!(20));
        assert_eq!(parsed.profiles.len(), 3);
        assert_eq!(parsed.risk_bands, RiskBands::default());
    }

    #[test]
    fn test_from_json_validates() {
        let err = HealthConfig::from_json(r#"{"profiles": []}"#).unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidConfig { .. }));

        let err = HealthConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, PortfolioError::Serialization { .. }));
    }
}
