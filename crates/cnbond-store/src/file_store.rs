//! JSON-file-per-bond attribute store.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use cnbond_bonds::BondAttributes;

use crate::attribute_store::AttributeStore;
use crate::error::{StoreError, StoreResult};
use crate::in_memory::InMemoryAttributeStore;
use crate::record::BondAttributesRecord;

/// Environment variable naming the root directory of attribute JSON files.
pub const BONDS_INFO_PATH_ENV: &str = "BONDS_INFO_PATH";

/// Default root directory when `BONDS_INFO_PATH` is unset.
pub const DEFAULT_BONDS_INFO_PATH: &str = "./bond_data";

/// One JSON file per bond under a root directory (`<root>/<code>.json`).
///
/// Lazily loads a bond from disk on `get` if it isn't already cached in an
/// internal [`InMemoryAttributeStore`], and caches the result; `put` writes
/// through to disk and the cache.
#[derive(Debug)]
pub struct FileAttributeStore {
    root: PathBuf,
    cache: InMemoryAttributeStore,
}

impl FileAttributeStore {
    /// Creates a store rooted at `root`. Does not require `root` to exist
    /// yet; it's created lazily on the first `put`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: InMemoryAttributeStore::new(),
        }
    }

    /// Creates a store rooted at `BONDS_INFO_PATH`, or [`DEFAULT_BONDS_INFO_PATH`]
    /// if the environment variable is unset. This is the only place in the
    /// crate that reads an environment variable.
    #[must_use]
    pub fn from_env() -> Self {
        let root = env::var(BONDS_INFO_PATH_ENV).unwrap_or_else(|_| DEFAULT_BONDS_INFO_PATH.to_string());
        log::debug!("FileAttributeStore::from_env resolved root to {root}");
        Self::new(root)
    }

    fn path_for(&self, code: &str) -> PathBuf {
        self.root.join(format!("{code}.json"))
    }

    fn load_from_disk(&self, code: &str) -> StoreResult<BondAttributes> {
        let path = self.path_for(code);
        let contents = fs::read_to_string(&path).map_err(|_| StoreError::unknown_bond(code))?;
        let record: BondAttributesRecord = serde_json::from_str(&contents)
            .map_err(|e| StoreError::malformed_record(code, e.to_string()))?;
        record.into_attributes()
    }

    /// The root directory this store reads and writes under.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AttributeStore for FileAttributeStore {
    fn get(&self, code: &str) -> StoreResult<BondAttributes> {
        if let Ok(attrs) = self.cache.get(code) {
            return Ok(attrs);
        }
        let attrs = self.load_from_disk(code)?;
        self.cache.put(code, attrs.clone())?;
        Ok(attrs)
    }

    fn put(&self, code: &str, attrs: BondAttributes) -> StoreResult<()> {
        fs::create_dir_all(&self.root)?;
        let record = BondAttributesRecord::from(&attrs);
        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| StoreError::malformed_record(code, e.to_string()))?;
        fs::write(self.path_for(code), json)?;
        self.cache.put(code, attrs)
    }

    fn contains(&self, code: &str) -> bool {
        self.cache.contains(code) || self.path_for(code).is_file()
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
    fn test_put_then_get_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileAttributeStore::new(dir.path());
        store.put("240018.IB", sample()).unwrap();

        let reloaded = FileAttributeStore::new(dir.path());
        let fetched = reloaded.get("240018.IB").unwrap();
        assert_eq!(fetched.bond_code, "240018.IB");
        assert_eq!(fetched.coupon_rate, 0.0285);
    }

    #[test]
    fn test_get_missing_is_unknown_bond() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileAttributeStore::new(dir.path());
        assert!(store.get("000000.IB").is_err());
    }

    #[test]
    fn test_from_env_defaults_when_unset() {
        env::remove_var(BONDS_INFO_PATH_ENV);
        let store = FileAttributeStore::from_env();
        assert_eq!(store.root(), Path::new(DEFAULT_BONDS_INFO_PATH));
    }
}
