//! Bidirectional YTM ↔ dirty-price pricing of fixed-rate bonds.

pub mod formulas;

use cnbond_core::types::{Date, InterestType};
use cnbond_core::CoreError;
use cnbond_math::solvers::{brent, SolverConfig};

use crate::accrued::AccruedInterest;
use crate::attributes::BondAttributes;
use crate::error::{BondError, BondResult};

/// Lower/upper bracket for the YTM root-finder, per the specification.
const YTM_BRACKET: (f64, f64) = (-0.5, 1.0);

/// Full set of pricing analytics computed at a single valuation date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingResult {
    /// Yield to maturity.
    pub ytm: f64,
    /// Dirty (full) price.
    pub dirty_price: f64,
    /// Clean price (`dirty_price - accrued`).
    pub clean_price: f64,
    /// Accrued interest at the valuation date.
    pub accrued: f64,
    /// Modified duration.
    pub modified_duration: f64,
    /// Number of coupons remaining after the valuation date.
    pub remaining_cp_num: usize,
    /// The coupon date preceding the valuation date.
    pub pre_cp_date: Date,
    /// The coupon date following the valuation date.
    pub next_cp_date: Date,
    /// Days from the valuation date to maturity.
    pub days_to_maturity: i64,
}

struct Context {
    pre_cp: Date,
    next_cp: Date,
    n: usize,
    d_next: f64,
    ts: f64,
    days_to_maturity: f64,
    m: f64,
    c: f64,
    f: f64,
    accrued: f64,
}

fn build_context(attrs: &BondAttributes, d: Date) -> BondResult<Context> {
    if attrs.interest_type != InterestType::Fixed {
        return Err(CoreError::unsupported_interest_type(attrs.interest_type.to_string()).into());
    }

    let schedule = attrs.schedule()?;
    let (pre_cp, next_cp) = schedule.bracket(d)?;
    let n = schedule.remaining_count_after(d);

    let accrued_result = AccruedInterest::compute(
        attrs.market,
        attrs.coupon_rate,
        attrs.par_value,
        attrs.inst_freq,
        d,
        pre_cp,
        next_cp,
    );

    Ok(Context {
        pre_cp,
        next_cp,
        n,
        d_next: d.days_between(&next_cp) as f64,
        ts: pre_cp.days_between(&next_cp) as f64,
        days_to_maturity: d.days_between(&schedule.end_date()) as f64,
        m: attrs.par_value,
        c: attrs.coupon_rate * attrs.par_value,
        f: attrs.inst_freq as f64,
        accrued: accrued_result.accrued,
    })
}

fn ty_for(attrs: &BondAttributes) -> BondResult<f64> {
    let schedule = attrs.schedule()?;
    schedule
        .final_compounding_year_days()
        .map(|days| days as f64)
        .ok_or_else(|| {
            BondError::degenerate_evaluation(format!(
                "{}: could not determine final compounding year length",
                attrs.bond_code
            ))
        })
}

fn assemble(_attrs: &BondAttributes, ctx: &Context, ytm: f64, dirty_price: f64) -> PricingResult {
    // The reference pricer applies the same cash-flow-weighted duration
    // formula whether or not the valuation date is inside the final coupon
    // period (it never special-cases duration the way price and YTM are
    // special-cased); `ctx.n` is always >= 1 once the date has passed
    // `Schedule::bracket`'s validity check.
    let modified_duration =
        formulas::modified_duration_outside_final_period(ctx.m, ctx.c, ctx.f, ytm, ctx.n as u32, ctx.ts, ctx.d_next);

    PricingResult {
        ytm,
        dirty_price,
        clean_price: dirty_price - ctx.accrued,
        accrued: ctx.accrued,
        modified_duration,
        remaining_cp_num: ctx.n,
        pre_cp_date: ctx.pre_cp,
        next_cp_date: ctx.next_cp,
        days_to_maturity: ctx.days_to_maturity as i64,
    }
}

/// Computes dirty/clean price, accrued interest, and duration from a known
/// yield to maturity.
///
/// # Errors
///
/// Returns `BondError::Core` (`UnsupportedInterestType`) for non-fixed bonds,
/// `BondError::DateOutOfRange` if `d` is outside `[carry_date, maturity_date)`,
/// or `BondError::DegenerateEvaluation` if the final compounding year cannot
/// be determined for a bond priced inside its last coupon period.
pub fn price_from_ytm(attrs: &BondAttributes, d: Date, ytm: f64) -> BondResult<PricingResult> {
    let ctx = build_context(attrs, d)?;

    let dirty_price = if ctx.n > 1 {
        formulas::price_outside_final_period(ctx.m, ctx.c, ctx.f, ytm, ctx.n as u32, ctx.ts, ctx.d_next)
    } else {
        let fv = ctx.m + ctx.c / ctx.f;
        let ty = ty_for(attrs)?;
        formulas::price_inside_final_period(ytm, fv, ctx.days_to_maturity, ty)
    };

    Ok(assemble(attrs, &ctx, ytm, dirty_price))
}

/// Computes yield to maturity, and the remaining analytics, from a known
/// dirty price.
///
/// # Errors
///
/// See [`price_from_ytm`]; additionally returns `BondError::Math` wrapping
/// `MathError::ConvergenceFailed` or `MathError::InvalidBracket` if the
/// root-finder fails to invert the price outside the final coupon period.
pub fn ytm_from_dirty_price(attrs: &BondAttributes, d: Date, dirty_price: f64) -> BondResult<PricingResult> {
    let ctx = build_context(attrs, d)?;

    let ytm = if ctx.n > 1 {
        let (m, c, f, n, ts, d_next) = (ctx.m, ctx.c, ctx.f, ctx.n as u32, ctx.ts, ctx.d_next);
        let target = dirty_price;
        let f_of_y = move |y: f64| formulas::price_outside_final_period(m, c, f, y, n, ts, d_next) - target;

        let (lo, hi) = YTM_BRACKET;
        let result = brent(f_of_y, lo, hi, &SolverConfig::default())?;
        result.root
    } else {
        let fv = ctx.m + ctx.c / ctx.f;
        let ty = ty_for(attrs)?;
        formulas::ytm_inside_final_period(dirty_price, fv, ctx.days_to_maturity, ty)
    };

    Ok(assemble(attrs, &ctx, ytm, dirty_price))
}

/// Computes yield to maturity from a clean price, adding back accrued
/// interest obtained from the valuation date's coupon bracket.
///
/// # Errors
///
/// See [`ytm_from_dirty_price`].
pub fn ytm_from_clean_price(attrs: &BondAttributes, d: Date, clean_price: f64) -> BondResult<PricingResult> {
    let ctx = build_context(attrs, d)?;
    ytm_from_dirty_price(attrs, d, clean_price + ctx.accrued)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cnbond_core::types::{CouponType, Market};

    fn bond_220012() -> BondAttributes {
        BondAttributes::new(
            "220012.IB",
            Market::Interbank,
            "22附息国债12",
            100.0,
            CouponType::CouponBearing,
            InterestType::Fixed,
            0.0275,
            1,
            Date::from_ymd(2022, 6, 15).unwrap(),
            Date::from_ymd(2029, 6, 15).unwrap(),
            "ACT/ACT",
        )
        .unwrap()
    }

    #[test]
    fn test_price_round_trip_scenario() {
        let bond = bond_220012();
        let d = Date::from_ymd(2022, 11, 18).unwrap();

        let priced = price_from_ytm(&bond, d, 0.0279).unwrap();
        assert_relative_eq!(priced.dirty_price, 100.9288, epsilon = 1e-3);
        assert_relative_eq!(priced.clean_price, 99.7535, epsilon = 1e-3);

        let inverted = ytm_from_dirty_price(&bond, d, priced.dirty_price).unwrap();
        assert_relative_eq!(inverted.ytm, 0.0279, epsilon = 1e-6);
    }

    #[test]
    fn test_clean_plus_accrued_equals_dirty() {
        let bond = bond_220012();
        let d = Date::from_ymd(2022, 11, 18).unwrap();
        let priced = price_from_ytm(&bond, d, 0.0279).unwrap();
        assert_relative_eq!(priced.clean_price + priced.accrued, priced.dirty_price, epsilon = 1e-9);
    }

    #[test]
    fn test_duration_positive() {
        let bond = bond_220012();
        let d = Date::from_ymd(2022, 11, 18).unwrap();
        let priced = price_from_ytm(&bond, d, 0.0279).unwrap();
        assert!(priced.modified_duration > 0.0);
    }

    #[test]
    fn test_unsupported_interest_type() {
        let mut bond = bond_220012();
        bond.interest_type = InterestType::Floating;
        let d = Date::from_ymd(2022, 11, 18).unwrap();
        assert!(price_from_ytm(&bond, d, 0.0279).is_err());
    }
}
