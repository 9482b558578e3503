//! Accrued-interest computation with market-variant day-counting.

use cnbond_core::types::{Date, Market};

/// Result of an accrued-interest computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccruedResult {
    /// Accrued interest per unit of face value.
    pub accrued: f64,
    /// Days counted as "in" the accrual period (definition depends on market).
    pub days_in: i64,
    /// Length in days of the coupon period used as the denominator (interbank only).
    pub period_days: i64,
    /// The coupon period's start date.
    pub pre_cp_date: Date,
    /// The coupon period's end date.
    pub next_cp_date: Date,
}

/// Computes accrued interest, branching on market convention.
///
/// Interbank counts "head, not tail": the settlement date itself is not
/// counted. Exchange-listed bonds (SSE/SZE) count "head and tail", adding one
/// day, and always divide by 365 regardless of leap year.
pub struct AccruedInterest;

impl AccruedInterest {
    /// Computes accrued interest for `d` given the bracketing coupon dates.
    #[must_use]
    pub fn compute(
        market: Market,
        coupon_rate: f64,
        par_value: f64,
        inst_freq: u32,
        d: Date,
        pre_cp_date: Date,
        next_cp_date: Date,
    ) -> AccruedResult {
        let period_days = pre_cp_date.days_between(&next_cp_date);

        if market.is_exchange() {
            let days_in = 1 + pre_cp_date.days_between(&d);
            let accrued = coupon_rate * par_value * days_in as f64 / 365.0;
            AccruedResult {
                accrued,
                days_in,
                period_days,
                pre_cp_date,
                next_cp_date,
            }
        } else {
            let c = coupon_rate * par_value / inst_freq as f64;
            let days_in = pre_cp_date.days_between(&d);
            let accrued = c * days_in as f64 / period_days as f64;
            AccruedResult {
                accrued,
                days_in,
                period_days,
                pre_cp_date,
                next_cp_date,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_interbank_accrued_scenario() {
        // 180019.IB, coupon 3.54%, par 100, freq 2, period 2022-08-16..2023-02-16, at 2022-10-18.
        let result = AccruedInterest::compute(
            Market::Interbank,
            0.0354,
            100.0,
            2,
            d(2022, 10, 18),
            d(2022, 8, 16),
            d(2023, 2, 16),
        );
        assert_relative_eq!(result.accrued, 0.606_033, epsilon = 1e-5);
    }

    #[test]
    fn test_exchange_accrued_scenario() {
        let result = AccruedInterest::compute(
            Market::ShanghaiExchange,
            0.0354,
            100.0,
            2,
            d(2022, 10, 18),
            d(2022, 8, 16),
            d(2023, 2, 16),
        );
        assert_relative_eq!(result.accrued, 0.620_712, epsilon = 1e-5);
    }

    #[test]
    fn test_accrued_zero_at_pre_cp_date() {
        let result = AccruedInterest::compute(
            Market::Interbank,
            0.0354,
            100.0,
            2,
            d(2022, 8, 16),
            d(2022, 8, 16),
            d(2023, 2, 16),
        );
        assert_eq!(result.accrued, 0.0);
    }
}
