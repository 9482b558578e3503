//! # cnbond-bonds
//!
//! Bond attributes, coupon schedule generation, accrued-interest, and
//! YTM-to-price pricing for fixed-rate Chinese government bonds.
//!
//! ```rust
//! use cnbond_bonds::attributes::BondAttributes;
//! use cnbond_bonds::pricing::price_from_ytm;
//! use cnbond_core::types::{CouponType, Date, InterestType, Market};
//!
//! let bond = BondAttributes::new(
//!     "220012.IB", Market::Interbank, "22附息国债12", 100.0,
//!     CouponType::CouponBearing, InterestType::Fixed, 0.0275, 1,
//!     Date::from_ymd(2022, 6, 15).unwrap(), Date::from_ymd(2029, 6, 15).unwrap(),
//!     "ACT/ACT",
//! ).unwrap();
//!
//! let d = Date::from_ymd(2022, 11, 18).unwrap();
//! let result = price_from_ytm(&bond, d, 0.0279).unwrap();
//! assert!(result.dirty_price > result.clean_price);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod accrued;
pub mod attributes;
pub mod error;
pub mod pricing;
pub mod schedule;

pub use accrued::{AccruedInterest, AccruedResult};
pub use attributes::BondAttributes;
pub use error::{BondError, BondResult};
pub use pricing::PricingResult;
pub use schedule::Schedule;
