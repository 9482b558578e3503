//! CLI command implementations.

pub mod futures;
pub mod price;

pub use futures::FuturesArgs;
pub use price::PriceArgs;

use cnbond_core::types::Date;

use crate::error::CliError;

/// Parses a date string in `YYYY-MM-DD` format.
pub fn parse_date(s: &str) -> Result<Date, CliError> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}
