//! # cnbond-futures
//!
//! CFFEX treasury-bond futures calendar rules, conversion factor, and the
//! basis/carry/IRR/implied-YTM evaluator composing them with `cnbond-bonds`.
//!
//! ```rust
//! use cnbond_bonds::BondAttributes;
//! use cnbond_core::types::{CouponType, Date, InterestType, Market};
//! use cnbond_futures::evaluator::{TfEvaluator, TfEvaluatorInputs};
//!
//! let bond = BondAttributes::new(
//!     "220021.IB", Market::Interbank, "22附息国债21", 100.0,
//!     CouponType::CouponBearing, InterestType::Fixed, 0.0235, 2,
//!     Date::from_ymd(2022, 10, 28).unwrap(), Date::from_ymd(2032, 10, 28).unwrap(),
//!     "ACT/ACT",
//! ).unwrap();
//!
//! let inputs = TfEvaluatorInputs::new(
//!     Date::from_ymd(2022, 10, 28).unwrap(), "T2212", 101.65, &bond, 0.026625, 0.0199,
//! );
//! let evaluator = TfEvaluator::new(inputs).calc().unwrap();
//! assert!(evaluator.state().unwrap().conversion_factor > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod calendar;
pub mod conversion_factor;
pub mod error;
pub mod evaluator;

pub use calendar::FuturesContract;
pub use conversion_factor::conversion_factor as calc_conversion_factor;
pub use error::{FuturesError, FuturesResult};
pub use evaluator::{ForwardYtmAlgo, TfEvaluator, TfEvaluatorInputs, TfEvaluatorState};
