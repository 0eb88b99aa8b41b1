//! Insertion-ordered allocation maps.

use rust_decimal::Decimal;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Mapping from a key (symbol or asset class) to a percentage or weight.
///
/// Keys keep the order in which they were first inserted. Inserting an
/// existing key replaces its value in place. Serializes as a JSON object
/// in that order, so reports and digests are stable across runs.
///
/// Lookups scan the entries linearly, so building a map of `n` distinct keys
/// costs O(n²) comparisons. Sized for portfolios of up to a few thousand
/// holdings.
///
/// # Examples
///
/// ```
/// use risklens_portfolio::types::AllocationMap;
/// use rust_decimal_macros::dec;
///
/// let mut map = AllocationMap::new();
/// map.insert("X", dec!(10));
/// map.insert("Y", dec!(20));
/// map.insert("X", dec!(30));
///
/// assert_eq!(map.get(&"X"), Some(dec!(30)));
/// assert_eq!(map.keys().collect::<Vec<_>>(), vec![&"X", &"Y"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationMap<K> {
    entries: Vec<(K, Decimal)>,
}

impl<K> Default for AllocationMap<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: PartialEq> AllocationMap<K> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a value, returning the previous one.
    pub fn insert(&mut self, key: K, value: Decimal) -> Option<Decimal> {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut slot.1, value));
        }
        self.entries.push((key, value));
        None
    }

    /// Adds `value` to the entry for `key`, inserting it at zero first if absent.
    ///
    /// Returns the new running value, or `None` if the addition overflows,
    /// in which case the map is left unchanged.
    pub fn accumulate(&mut self, key: K, value: Decimal) -> Option<Decimal> {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => {
                slot.1 = slot.1.checked_add(value)?;
                Some(slot.1)
            }
            None => {
                self.entries.push((key, value));
                Some(value)
            }
        }
    }

    /// Returns the value for a key.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
    }

    /// Returns true if the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }
}

impl<K> AllocationMap<K> {
    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, Decimal)> {
        self.entries.iter().map(|(k, v)| (k, *v))
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Iterates values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.entries.iter().map(|(_, v)| *v)
    }

    /// Sum of all values, saturating at the `Decimal` bounds.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.values().fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Entry with the largest value. Ties resolve to the earliest key.
    #[must_use]
    pub fn largest(&self) -> Option<(&K, Decimal)> {
        self.iter()
            .fold(None, |best: Option<(&K, Decimal)>, (k, v)| match best {
                Some((_, b)) if b >= v => best,
                _ => Some((k, v)),
            })
    }
}

impl<K: PartialEq> FromIterator<(K, Decimal)> for AllocationMap<K> {
    fn from_iter<I: IntoIterator<Item = (K, Decimal)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<K: Serialize> Serialize for AllocationMap<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct AllocationMapVisitor<K>(PhantomData<K>);

impl<'de, K> Visitor<'de> for AllocationMapVisitor<K>
where
    K: Deserialize<'de> + PartialEq,
{
    type Value = AllocationMap<K>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of keys to numeric allocations")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = AllocationMap::new();
        while let Some((k, v)) = access.next_entry::<K, Decimal>()? {
            map.insert(k, v);
        }
        Ok(map)
    }
}

impl<'de, K> Deserialize<'de> for AllocationMap<K>
where
    K: Deserialize<'de> + PartialEq,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AllocationMapVisitor(PhantomData))
    }
}
