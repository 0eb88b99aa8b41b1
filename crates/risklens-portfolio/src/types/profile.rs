//! Risk profiles and their ideal allocations.

use super::{AllocationMap, AssetClass};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Target percentage per asset class.
///
/// Iteration order is significant: rebalancing suggestions are emitted in
/// this order. Targets need not sum to exactly 100.
pub type IdealAllocation = AllocationMap<AssetClass>;

/// A named target allocation used as the rebalancing benchmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskProfile {
    /// Profile name as supplied by callers (e.g. "balanced").
    pub name: String,

    /// Target mix for this profile.
    pub ideal_allocation: IdealAllocation,
}

impl RiskProfile {
    /// Creates a profile from a name and target mix.
    #[must_use]
    pub fn new(name: impl Into<String>, ideal_allocation: IdealAllocation) -> Self {
        Self {
            name: name.into(),
            ideal_allocation,
        }
    }

    /// Returns the target percentage for a class, if the profile sets one.
    #[must_use]
    pub fn target(&self, class: &AssetClass) -> Option<Decimal> {
        self.ideal_allocation.get(class)
    }
}

/// The three built-in profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StandardProfile {
    /// Bond-heavy, low crypto exposure
    Conservative,
    /// Equity-led with a bond cushion
    Balanced,
    /// Equity and crypto tilted
    Aggressive,
}

impl StandardProfile {
    /// All standard profiles in configuration order.
    #[must_use]
    pub fn all() -> [Self; 3] {
        [Self::Conservative, Self::Balanced, Self::Aggressive]
    }

    /// Profile name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Balanced => "balanced",
            Self::Aggressive => "aggressive",
        }
    }

    /// Target mix as `[stock, crypto, bond, commodity, etf]` percentages.
    fn targets(&self) -> [Decimal; 5] {
        match self {
            Self::Conservative => [dec!(30), dec!(5), dec!(50), dec!(10), dec!(5)],
            Self::Balanced => [dec!(50), dec!(10), dec!(25), dec!(10), dec!(5)],
            Self::Aggressive => [dec!(60), dec!(20), dec!(10), dec!(5), dec!(5)],
        }
    }

    /// Builds the full profile.
    #[must_use]
    pub fn profile(&self) -> RiskProfile {
        let classes = [
            AssetClass::Stock,
            AssetClass::Crypto,
            AssetClass::Bond,
            AssetClass::Commodity,
            AssetClass::Etf,
        ];
        RiskProfile::new(
            self.name(),
            classes.into_iter().zip(self.targets()).collect(),
        )
    }
}

impl fmt::Display for StandardProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
