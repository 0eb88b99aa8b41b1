//! Asset and asset class types.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Asset class of a holding.
///
/// The five standard classes carry configured risk weights and ideal
/// allocations. Any other label is kept verbatim in [`AssetClass::Other`]
/// so new classes can flow through aggregation without code changes.
///
/// # Examples
///
/// ```
/// use risklens_portfolio::types::AssetClass;
///
/// let class: AssetClass = "crypto".parse().unwrap();
/// assert_eq!(class, AssetClass::Crypto);
///
/// let art: AssetClass = "art".parse().unwrap();
/// assert_eq!(art.name(), "art");
/// assert!(!art.is_standard());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetClass {
    /// Fixed income
    Bond,
    /// Exchange-traded fund
    Etf,
    /// Single equity
    Stock,
    /// Physical or synthetic commodity exposure
    Commodity,
    /// Crypto-asset
    Crypto,
    /// Any other label, preserved as given
    Other(String),
}

impl AssetClass {
    /// Returns the five standard classes in a fixed order.
    #[must_use]
    pub fn standard() -> [Self; 5] {
        [
            Self::Bond,
            Self::Etf,
            Self::Stock,
            Self::Commodity,
            Self::Crypto,
        ]
    }

    /// Returns the wire name of the class.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Bond => "bond",
            Self::Etf => "etf",
            Self::Stock => "stock",
            Self::Commodity => "commodity",
            Self::Crypto => "crypto",
            Self::Other(name) => name,
        }
    }

    /// Returns true for the five standard classes.
    #[must_use]
    pub fn is_standard(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl FromStr for AssetClass {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "bond" => Self::Bond,
            "etf" => Self::Etf,
            "stock" => Self::Stock,
            "commodity" => Self::Commodity,
            "crypto" => Self::Crypto,
            other => Self::Other(other.to_string()),
        })
    }
}

impl From<&str> for AssetClass {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(class) => class,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for AssetClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for AssetClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from(name.as_str()))
    }
}

/// A single holding: symbol, asset class and current value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Ticker or free-form label.
    pub symbol: String,

    /// Asset class.
    #[serde(rename = "type")]
    pub asset_type: AssetClass,

    /// Current value in the portfolio's (single) currency.
    pub value: Decimal,
}

impl Asset {
    /// Creates a new asset.
    #[must_use]
    pub fn new(symbol: impl Into<String>, asset_type: impl Into<AssetClass>, value: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            asset_type: asset_type.into(),
            value,
        }
    }
}
