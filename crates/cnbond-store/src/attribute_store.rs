//! Trait contract for bond attribute lookup.

use cnbond_bonds::BondAttributes;

use crate::error::StoreResult;

/// A code-keyed lookup of immutable bond attribute records.
///
/// Implementors are expected to be cheap to share by reference across
/// threads (see `InMemoryAttributeStore`/`FileAttributeStore`, both backed
/// by `DashMap`).
pub trait AttributeStore {
    /// Fetches the attributes for `code`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UnknownBond` if no record is available, rather
    /// than panicking.
    fn get(&self, code: &str) -> StoreResult<BondAttributes>;

    /// Inserts or replaces the attribute record for `code`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if a backing implementation fails to persist
    /// the write.
    fn put(&self, code: &str, attrs: BondAttributes) -> StoreResult<()>;

    /// Whether a record for `code` is currently available without error.
    fn contains(&self, code: &str) -> bool {
        self.get(code).is_ok()
    }
}
