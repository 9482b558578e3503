//! Coupon payment schedule generation.

use cnbond_core::types::{Date, Frequency};

use crate::error::{BondError, BondResult};

/// Number of days from a coupon date to maturity under which the valuation
/// date is considered to be "inside the final coupon period".
///
/// Guards against bonds whose last scheduled coupon date and maturity date
/// differ by a handful of days (a documented heuristic from the primitive
/// pricer this crate is ported from; kept as a named constant rather than
/// hardcoded so it is easy to find and, eventually, make configurable).
pub const FINAL_PERIOD_THRESHOLD_DAYS: i64 = 15;

/// The ordered sequence of coupon payment dates for a bond.
///
/// Generated backward from `maturity_date` at `12 / inst_freq` month steps;
/// the first date at or before `carry_date` is replaced by `carry_date`
/// exactly, producing a (possibly short) first stub period. Immutable once
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    dates: Vec<Date>,
}

impl Schedule {
    /// Generates a schedule backward from `maturity_date` to `carry_date`.
    ///
    /// # Errors
    ///
    /// Returns `BondError::Core` if `carry_date >= maturity_date` or if month
    /// arithmetic overflows the representable date range.
    pub fn generate(carry_date: Date, maturity_date: Date, frequency: Frequency) -> BondResult<Self> {
        if carry_date >= maturity_date {
            return Err(BondError::date_out_of_range(
                carry_date.to_string(),
                carry_date.to_string(),
                maturity_date.to_string(),
            ));
        }

        let step_months = frequency.months_per_period() as i32;
        if step_months == 0 {
            return Err(cnbond_core::CoreError::invalid_attribute(format!(
                "cannot generate a coupon schedule for a {frequency} frequency"
            ))
            .into());
        }

        let mut dates = vec![maturity_date];
        loop {
            let prev = *dates.last().expect("dates is never empty");
            let candidate = prev.add_months(-step_months)?;
            if candidate <= carry_date {
                dates.push(carry_date);
                break;
            }
            dates.push(candidate);
        }
        dates.reverse();

        Ok(Self { dates })
    }

    /// All scheduled dates, in ascending order, `D_0 = carry_date .. D_m = maturity_date`.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// The first scheduled date (`D_0`, the carry date).
    #[must_use]
    pub fn start_date(&self) -> Date {
        self.dates[0]
    }

    /// The last scheduled date (`D_m`, the maturity date).
    #[must_use]
    pub fn end_date(&self) -> Date {
        *self.dates.last().expect("dates is never empty")
    }

    /// Finds `(D_i, D_i+1)` such that `D_i <= d < D_i+1`.
    ///
    /// # Errors
    ///
    /// Returns `BondError::DateOutOfRange` if `d < D_0` or `d >= D_m`.
    pub fn bracket(&self, d: Date) -> BondResult<(Date, Date)> {
        if d < self.start_date() || d >= self.end_date() {
            return Err(BondError::date_out_of_range(
                d.to_string(),
                self.start_date().to_string(),
                self.end_date().to_string(),
            ));
        }

        for w in self.dates.windows(2) {
            let (lo, hi) = (w[0], w[1]);
            if lo <= d && d < hi {
                return Ok((lo, hi));
            }
        }

        unreachable!("bracket range checked above")
    }

    /// Number of scheduled dates strictly after `d`.
    #[must_use]
    pub fn remaining_count_after(&self, d: Date) -> usize {
        self.dates.iter().filter(|&&date| date > d).count()
    }

    /// Scheduled dates strictly between `a` and `b` (both exclusive).
    #[must_use]
    pub fn dates_in_open_interval(&self, a: Date, b: Date) -> Vec<Date> {
        self.dates
            .iter()
            .copied()
            .filter(|&d| a < d && d < b)
            .collect()
    }

    /// Whether `d`'s coupon period is the final one before maturity.
    ///
    /// True iff the coupon date following `d` is within
    /// [`FINAL_PERIOD_THRESHOLD_DAYS`] of maturity.
    #[must_use]
    pub fn is_in_final_cp_period(&self, d: Date) -> bool {
        match self.bracket(d) {
            Ok((_, next_cp)) => next_cp.days_between(&self.end_date()) < FINAL_PERIOD_THRESHOLD_DAYS,
            Err(_) => false,
        }
    }

    /// Length, in days, of the last full compounding year before maturity.
    ///
    /// Walks the schedule backward from maturity looking for the most recent
    /// coupon date that falls in a different calendar year than maturity and
    /// whose distance to maturity is at least 360 days (periods shorter than
    /// that indicate a sub-annual stub and are skipped).
    #[must_use]
    pub fn final_compounding_year_days(&self) -> Option<i64> {
        let maturity = self.end_date();
        for &candidate in self.dates.iter().rev().skip(1) {
            if candidate.year() == maturity.year() {
                continue;
            }
            let gap = candidate.days_between(&maturity);
            if gap < 360 {
                continue;
            }
            return Some(gap);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_generate_semiannual() {
        let sched = Schedule::generate(d(2018, 8, 16), d(2028, 8, 16), Frequency::SemiAnnual).unwrap();
        assert_eq!(sched.start_date(), d(2018, 8, 16));
        assert_eq!(sched.end_date(), d(2028, 8, 16));
        // 10 years * 2 coupons/year + the carry date itself.
        assert_eq!(sched.dates().len(), 21);
    }

    #[test]
    fn test_generate_annual() {
        let sched = Schedule::generate(d(2022, 6, 15), d(2029, 6, 15), Frequency::Annual).unwrap();
        assert_eq!(sched.dates().len(), 8);
    }

    #[test]
    fn test_monotonic() {
        let sched = Schedule::generate(d(2018, 8, 16), d(2028, 8, 16), Frequency::SemiAnnual).unwrap();
        for w in sched.dates().windows(2) {
            assert!(w[0] < w[1]);
        }
    }

    #[test]
    fn test_bracket() {
        let sched = Schedule::generate(d(2018, 8, 16), d(2028, 8, 16), Frequency::SemiAnnual).unwrap();
        let (lo, hi) = sched.bracket(d(2022, 10, 18)).unwrap();
        assert_eq!(lo, d(2022, 8, 16));
        assert_eq!(hi, d(2023, 2, 16));
    }

    #[test]
    fn test_bracket_out_of_range() {
        let sched = Schedule::generate(d(2018, 8, 16), d(2028, 8, 16), Frequency::SemiAnnual).unwrap();
        assert!(sched.bracket(d(2018, 1, 1)).is_err());
        assert!(sched.bracket(d(2028, 8, 16)).is_err());
    }

    #[test]
    fn test_remaining_count_after() {
        let sched = Schedule::generate(d(2018, 8, 16), d(2028, 8, 16), Frequency::SemiAnnual).unwrap();
        assert_eq!(sched.remaining_count_after(d(2028, 2, 16)), 1);
        assert_eq!(sched.remaining_count_after(d(2028, 8, 16)), 0);
    }

    #[test]
    fn test_stub_period() {
        // Carry date mid-period: the first generated boundary before it collapses to it.
        let sched = Schedule::generate(d(2022, 9, 1), d(2029, 6, 15), Frequency::Annual).unwrap();
        assert_eq!(sched.start_date(), d(2022, 9, 1));
    }
}
