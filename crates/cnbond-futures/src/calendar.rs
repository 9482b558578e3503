//! CFFEX futures contract calendar rules.

use cnbond_core::types::Date;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{FuturesError, FuturesResult};

static CONTRACT_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Z]+)([0-9]{4})$").unwrap());

/// A parsed CFFEX treasury-bond futures contract code, e.g. `T2503`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuturesContract {
    /// Leading product letters (`T`, `TF`, `TS`, …), selecting the notional
    /// coupon rate of the deliverable basket.
    pub product_code: String,
    /// Contract month, as the first day of that month.
    pub contract_month: Date,
}

impl FuturesContract {
    /// Parses a futures code of the form `^[A-Z]+([0-9]{4})$`.
    ///
    /// # Errors
    ///
    /// Returns `FuturesError::InvalidFuturesCode` if the code does not match.
    pub fn parse(code: &str) -> FuturesResult<Self> {
        let caps = CONTRACT_CODE_RE
            .captures(code)
            .ok_or_else(|| FuturesError::invalid_futures_code(code))?;

        let product_code = caps[1].to_string();
        let yymm = &caps[2];
        let year = 2000 + yymm[0..2].parse::<i32>().unwrap();
        let month = yymm[2..4].parse::<u32>().unwrap();

        let contract_month = Date::from_ymd(year, month, 1)
            .map_err(|_| FuturesError::invalid_futures_code(code))?;

        Ok(Self {
            product_code,
            contract_month,
        })
    }

    /// Last trading day: the second Friday of the contract month.
    ///
    /// Scans days 8 through 14 of the month (the earliest a second Friday can
    /// fall) and returns the first Friday found, per CFFEX's published rule.
    #[must_use]
    pub fn last_trading_day(&self) -> Date {
        for day in 8..=14u32 {
            let candidate = Date::from_ymd(self.contract_month.year(), self.contract_month.month(), day)
                .expect("day in 8..=14 is always valid for any month");
            if candidate.weekday() == chrono::Weekday::Fri {
                return candidate;
            }
        }
        unreachable!("a Friday always falls within days 8..=14 of any month")
    }

    /// Payment (delivery) day: last trading day plus four calendar days.
    ///
    /// Always a Tuesday, since the last trading day is always a Friday.
    #[must_use]
    pub fn delivery_day(&self) -> Date {
        self.last_trading_day().add_days(4)
    }
}

/// Counts month boundaries crossed between the 2nd of `a`'s month and the
/// 1st of `b`'s month.
///
/// Ported from `fi_utils.py`'s `month_delta`: substituting day 02 into `a`
/// and day 01 into `b` makes the substituted `a` always strictly later in
/// the month than the substituted `b`, so counting monthly steps from one to
/// the other collapses to a plain month-index difference independent of the
/// original day-of-month values.
#[must_use]
pub fn month_delta(a: Date, b: Date) -> i64 {
    let a_index = i64::from(a.year()) * 12 + i64::from(a.month());
    let b_index = i64::from(b.year()) * 12 + i64::from(b.month());
    b_index - a_index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let c = FuturesContract::parse("T2503").unwrap();
        assert_eq!(c.product_code, "T");
        assert_eq!(c.contract_month, Date::from_ymd(2025, 3, 1).unwrap());
    }

    #[test]
    fn test_parse_two_letter_product() {
        let c = FuturesContract::parse("TF2406").unwrap();
        assert_eq!(c.product_code, "TF");
        assert_eq!(c.contract_month, Date::from_ymd(2024, 6, 1).unwrap());
    }

    #[test]
    fn test_invalid_code() {
        assert!(FuturesContract::parse("T25033").is_err());
        assert!(FuturesContract::parse("25T03").is_err());
    }

    #[test]
    fn test_t2503_calendar_scenario() {
        let c = FuturesContract::parse("T2503").unwrap();
        assert_eq!(c.last_trading_day(), Date::from_ymd(2025, 3, 14).unwrap());
        assert_eq!(c.delivery_day(), Date::from_ymd(2025, 3, 18).unwrap());
    }

    #[test]
    fn test_tf2406_calendar_scenario() {
        let c = FuturesContract::parse("TF2406").unwrap();
        assert_eq!(c.last_trading_day(), Date::from_ymd(2024, 6, 14).unwrap());
        assert_eq!(c.delivery_day(), Date::from_ymd(2024, 6, 18).unwrap());
    }

    #[test]
    fn test_calendar_weekday_invariants() {
        for code in ["T2503", "TF2406", "T2212", "TS2403"] {
            let c = FuturesContract::parse(code).unwrap();
            assert_eq!(c.last_trading_day().weekday(), chrono::Weekday::Fri);
            assert_eq!(c.delivery_day().weekday(), chrono::Weekday::Tue);
        }
    }

    #[test]
    fn test_month_delta_reference_example() {
        let a = Date::from_ymd(2022, 12, 12).unwrap();
        let b = Date::from_ymd(2023, 5, 21).unwrap();
        assert_eq!(month_delta(a, b), 5);
    }

    #[test]
    fn test_month_delta_same_month_is_zero() {
        let a = Date::from_ymd(2022, 12, 1).unwrap();
        let b = Date::from_ymd(2022, 12, 28).unwrap();
        assert_eq!(month_delta(a, b), 0);
    }
}
