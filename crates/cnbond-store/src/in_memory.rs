//! `DashMap`-backed in-memory attribute store.

use dashmap::DashMap;

use cnbond_bonds::BondAttributes;

use crate::attribute_store::AttributeStore;
use crate::error::{StoreError, StoreResult};

/// Default, no-I/O attribute store.
///
/// Safely shared across threads via `DashMap`'s internal sharding; no
/// external locking is required by callers.
#[derive(Debug, Default)]
pub struct InMemoryAttributeStore {
    bonds: DashMap<String, BondAttributes>,
}

impl InMemoryAttributeStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bonds: DashMap::new(),
        }
    }

    /// Number of records currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bonds.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }
}

impl AttributeStore for InMemoryAttributeStore {
    fn get(&self, code: &str) -> StoreResult<BondAttributes> {
        self.bonds
            .get(code)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StoreError::unknown_bond(code))
    }

    fn put(&self, code: &str, attrs: BondAttributes) -> StoreResult<()> {
        self.bonds.insert(code.to_string(), attrs);
        Ok(())
    }

    fn contains(&self, code: &str) -> bool {
        self.bonds.contains_key(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cnbond_core::types::{CouponType, Date, InterestType, Market};

    fn sample() -> BondAttributes {
        BondAttributes::new(
            "240018.IB",
            Market::Interbank,
            "24附息国债18",
            100.0,
            CouponType::CouponBearing,
            InterestType::Fixed,
            0.0285,
            2,
            Date::from_ymd(2024, 8, 15).unwrap(),
            Date::from_ymd(2034, 8, 15).unwrap(),
            "ACT/ACT",
        )
        .unwrap()
    }

    #[test]
    fn test_put_then_get() {
        let store = InMemoryAttributeStore::new();
        store.put("240018.IB", sample()).unwrap();
        let fetched = store.get("240018.IB").unwrap();
        assert_eq!(fetched.bond_code, "240018.IB");
    }

    #[test]
    fn test_get_missing_is_unknown_bond() {
        let store = InMemoryAttributeStore::new();
        assert!(store.get("000000.IB").is_err());
        assert!(!store.contains("000000.IB"));
    }
}
