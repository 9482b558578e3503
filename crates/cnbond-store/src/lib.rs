//! # cnbond-store
//!
//! In-memory and file-backed lookup of bond attribute records, keyed by
//! bond code.
//!
//! ```rust
//! use cnbond_store::{AttributeStore, InMemoryAttributeStore};
//! use cnbond_bonds::BondAttributes;
//! use cnbond_core::types::{CouponType, Date, InterestType, Market};
//!
//! let store = InMemoryAttributeStore::new();
//! let bond = BondAttributes::new(
//!     "240018.IB", Market::Interbank, "24附息国债18", 100.0,
//!     CouponType::CouponBearing, InterestType::Fixed, 0.0285, 2,
//!     Date::from_ymd(2024, 8, 15).unwrap(), Date::from_ymd(2034, 8, 15).unwrap(),
//!     "ACT/ACT",
//! ).unwrap();
//! store.put("240018.IB", bond).unwrap();
//! assert!(store.contains("240018.IB"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod attribute_store;
pub mod error;
pub mod file_store;
pub mod in_memory;
pub mod record;

pub use attribute_store::AttributeStore;
pub use error::{StoreError, StoreResult};
pub use file_store::{FileAttributeStore, BONDS_INFO_PATH_ENV, DEFAULT_BONDS_INFO_PATH};
pub use in_memory::InMemoryAttributeStore;
pub use record::BondAttributesRecord;
