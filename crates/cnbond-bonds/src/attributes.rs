//! Immutable bond reference data.

use cnbond_core::types::{CouponType, Date, Frequency, InterestType, Market};
use once_cell::sync::OnceCell;

use crate::error::{BondError, BondResult};
use crate::schedule::Schedule;

/// Immutable static parameters describing a single bond.
///
/// Built once by the static-data layer (outside this crate) and shared by
/// reference for every subsequent pricing and accrued-interest call. The
/// coupon [`Schedule`] is derived from these fields and cached lazily the
/// first time it's needed, per bond (not in a separate pointer-keyed
/// registry).
#[derive(Debug)]
pub struct BondAttributes {
    /// Identifier of the form `NNNNNN.XX`.
    pub bond_code: String,
    /// Listing market, derived from the code suffix.
    pub market: Market,
    /// Human-readable short name.
    pub abbr: String,
    /// Face value per unit, typically 100.
    pub par_value: f64,
    /// Coupon structure classification.
    pub coupon_type: CouponType,
    /// Interest-rate structure classification.
    pub interest_type: InterestType,
    /// Annual coupon rate as a fraction (0.0285 = 2.85%).
    pub coupon_rate: f64,
    /// Coupons per year: 2 (semi-annual), 1 (annual), or 0 (zero-coupon).
    pub inst_freq: u32,
    /// Issue / first-accrual date.
    pub carry_date: Date,
    /// Final payment date.
    pub maturity_date: Date,
    /// Day-count convention string, used only by external pricers.
    pub day_count: String,

    schedule: OnceCell<Schedule>,
}

impl Clone for BondAttributes {
    fn clone(&self) -> Self {
        let schedule = OnceCell::new();
        if let Some(s) = self.schedule.get() {
            let _ = schedule.set(s.clone());
        }
        Self {
            bond_code: self.bond_code.clone(),
            market: self.market,
            abbr: self.abbr.clone(),
            par_value: self.par_value,
            coupon_type: self.coupon_type,
            interest_type: self.interest_type,
            coupon_rate: self.coupon_rate,
            inst_freq: self.inst_freq,
            carry_date: self.carry_date,
            maturity_date: self.maturity_date,
            day_count: self.day_count.clone(),
            schedule,
        }
    }
}

impl BondAttributes {
    /// Builds a new `BondAttributes`, validating the invariants from the data
    /// model: `carry_date < maturity_date`, `par_value > 0`,
    /// `0 <= coupon_rate < 1`, and `inst_freq in {1, 2}` for fixed-rate,
    /// coupon-bearing bonds.
    ///
    /// # Errors
    ///
    /// Returns `BondError::Core` if an invariant is violated.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        bond_code: impl Into<String>,
        market: Market,
        abbr: impl Into<String>,
        par_value: f64,
        coupon_type: CouponType,
        interest_type: InterestType,
        coupon_rate: f64,
        inst_freq: u32,
        carry_date: Date,
        maturity_date: Date,
        day_count: impl Into<String>,
    ) -> BondResult<Self> {
        let bond_code = bond_code.into();

        cnbond_core::types::validate_bond_code(&bond_code, market)?;

        if carry_date >= maturity_date {
            return Err(BondError::date_out_of_range(
                carry_date.to_string(),
                carry_date.to_string(),
                maturity_date.to_string(),
            ));
        }
        if par_value <= 0.0 {
            return Err(cnbond_core::CoreError::invalid_attribute(format!(
                "{bond_code}: par_value must be positive, got {par_value}"
            ))
            .into());
        }
        if !(0.0..1.0).contains(&coupon_rate) {
            return Err(cnbond_core::CoreError::invalid_attribute(format!(
                "{bond_code}: coupon_rate must be in [0, 1), got {coupon_rate}"
            ))
            .into());
        }
        if interest_type == InterestType::Fixed
            && coupon_type == CouponType::CouponBearing
            && !matches!(inst_freq, 1 | 2)
        {
            return Err(cnbond_core::CoreError::invalid_attribute(format!(
                "{bond_code}: inst_freq must be 1 or 2 for fixed coupon-bearing bonds, got {inst_freq}"
            ))
            .into());
        }

        Ok(Self {
            bond_code,
            market,
            abbr: abbr.into(),
            par_value,
            coupon_type,
            interest_type,
            coupon_rate,
            inst_freq,
            carry_date,
            maturity_date,
            day_count: day_count.into(),
            schedule: OnceCell::new(),
        })
    }

    /// The bond's coupon payment frequency.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        Frequency::from_inst_freq(self.inst_freq)
    }

    /// The per-period coupon cash amount, `coupon_rate * par_value / inst_freq`.
    #[must_use]
    pub fn coupon_cash(&self) -> f64 {
        self.coupon_rate * self.par_value / self.inst_freq as f64
    }

    /// The coupon schedule, computing and caching it on first access.
    ///
    /// # Errors
    ///
    /// Returns `BondError` if schedule generation fails (should not happen
    /// for attributes that passed [`BondAttributes::new`]'s validation).
    pub fn schedule(&self) -> BondResult<&Schedule> {
        self.schedule
            .get_or_try_init(|| Schedule::generate(self.carry_date, self.maturity_date, self.frequency()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BondAttributes {
        BondAttributes::new(
            "180019.IB",
            Market::Interbank,
            "18附息国债19",
            100.0,
            CouponType::CouponBearing,
            InterestType::Fixed,
            0.0354,
            2,
            Date::from_ymd(2018, 8, 16).unwrap(),
            Date::from_ymd(2028, 8, 16).unwrap(),
            "ACT/ACT",
        )
        .unwrap()
    }

    #[test]
    fn test_construction() {
        let b = sample();
        assert_eq!(b.bond_code, "180019.IB");
        assert_eq!(b.coupon_cash(), 1.77);
    }

    #[test]
    fn test_rejects_bad_dates() {
        let err = BondAttributes::new(
            "123456.IB",
            Market::Interbank,
            "x",
            100.0,
            CouponType::CouponBearing,
            InterestType::Fixed,
            0.03,
            2,
            Date::from_ymd(2028, 8, 16).unwrap(),
            Date::from_ymd(2018, 8, 16).unwrap(),
            "ACT/ACT",
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_rejects_bond_code_suffix_mismatch() {
        let err = BondAttributes::new(
            "123456.SH",
            Market::Interbank,
            "x",
            100.0,
            CouponType::CouponBearing,
            InterestType::Fixed,
            0.03,
            2,
            Date::from_ymd(2018, 8, 16).unwrap(),
            Date::from_ymd(2028, 8, 16).unwrap(),
            "ACT/ACT",
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_schedule_cached() {
        let b = sample();
        let s1 = b.schedule().unwrap() as *const Schedule;
        let s2 = b.schedule().unwrap() as *const Schedule;
        assert_eq!(s1, s2);
    }

    #[test]
    fn test_clone_preserves_schedule_cache() {
        let b = sample();
        let _ = b.schedule().unwrap();
        let cloned = b.clone();
        assert!(cloned.schedule.get().is_some());
    }
}
