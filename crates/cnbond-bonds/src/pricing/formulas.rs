//! Closed-form primitive pricing formulas.
//!
//! Ported from the reference implementation's `prim/formulas.py`. Notation
//! matches the specification: `M` par, `C` annual coupon cash, `f` coupon
//! frequency, `y` yield, `n` remaining coupons, `TS` current period length in
//! days, `d_next` days to next coupon, `D` days to maturity, `TY` full
//! compounding year length in days.

/// Dirty price outside the final coupon period (`n > 1`).
#[must_use]
pub fn price_outside_final_period(m: f64, c: f64, f: f64, y: f64, n: u32, ts: f64, d_next: f64) -> f64 {
    let mut dirty = 0.0;
    for i in 0..n {
        let exponent = d_next / ts + i as f64;
        dirty += (c / f) * (1.0 + y / f).powf(-exponent);
    }
    let last_exponent = d_next / ts + (n as f64 - 1.0);
    dirty + m * (1.0 + y / f).powf(-last_exponent)
}

/// Modified duration outside the final coupon period, via the same cash-flow
/// decomposition as [`price_outside_final_period`].
#[must_use]
pub fn modified_duration_outside_final_period(m: f64, c: f64, f: f64, y: f64, n: u32, ts: f64, d_next: f64) -> f64 {
    let mut weighted_sum = 0.0;
    let mut cf_sum = 0.0;

    for i in 0..n {
        let exponent = d_next / ts + i as f64;
        let cf = (c / f) * (1.0 + y / f).powf(-exponent);
        let t = d_next / 365.0 + i as f64 / f;
        weighted_sum += t * cf;
        cf_sum += cf;
    }

    let last_exponent = d_next / ts + (n as f64 - 1.0);
    let principal_cf = m * (1.0 + y / f).powf(-last_exponent);
    let principal_t = d_next / 365.0 + (n as f64 - 1.0) / f;
    weighted_sum += principal_t * principal_cf;
    cf_sum += principal_cf;

    let macaulay = weighted_sum / cf_sum;
    macaulay / (1.0 + y / f)
}

/// Dirty price inside the final coupon period (`n <= 1`), closed form.
///
/// `fv` is the sum of remaining principal and final coupon cash
/// (`M + C/f`); `d` is days from valuation to maturity; `ty` is the full
/// compounding year length.
#[must_use]
pub fn price_inside_final_period(y: f64, fv: f64, d: f64, ty: f64) -> f64 {
    fv / (1.0 + y * d / ty)
}

/// Yield to maturity inside the final coupon period, closed form inverse of
/// [`price_inside_final_period`].
#[must_use]
pub fn ytm_inside_final_period(pv: f64, fv: f64, d: f64, ty: f64) -> f64 {
    (fv - pv) / pv * (ty / d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_inside_final_period_round_trip() {
        let fv = 101.0;
        let d = 30.0;
        let ty = 365.0;
        let price = price_inside_final_period(0.03, fv, d, ty);
        let y = ytm_inside_final_period(price, fv, d, ty);
        assert_relative_eq!(y, 0.03, epsilon = 1e-10);
    }

    #[test]
    fn test_outside_final_period_decreasing_in_yield() {
        let p_low = price_outside_final_period(100.0, 2.75, 1.0, 0.01, 6, 365.0, 200.0);
        let p_high = price_outside_final_period(100.0, 2.75, 1.0, 0.08, 6, 365.0, 200.0);
        assert!(p_low > p_high);
    }

    #[test]
    fn test_duration_positive() {
        let dur = modified_duration_outside_final_period(100.0, 2.75, 1.0, 0.03, 6, 365.0, 200.0);
        assert!(dur > 0.0);
    }
}
