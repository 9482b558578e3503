//! # cnbond-core
//!
//! Core types and error handling shared across the cnbond fixed-income
//! analytics engine: calendar-neutral date arithmetic and the market/coupon
//! classification enums used to describe Chinese government bonds.
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: newtypes prevent mixing dates with plain integers or
//!   market-specific strings.
//! - **Explicit Over Implicit**: no timezone handling, no implicit rounding.
//!
//! ```rust
//! use cnbond_core::prelude::*;
//!
//! let carry = Date::from_ymd(2018, 8, 16).unwrap();
//! let maturity = Date::from_ymd(2028, 8, 16).unwrap();
//! assert!(carry.days_between(&maturity) > 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{CouponType, Date, Frequency, InterestType, Market};
}

pub use error::{CoreError, CoreResult};
pub use types::{CouponType, Date, Frequency, InterestType, Market};
