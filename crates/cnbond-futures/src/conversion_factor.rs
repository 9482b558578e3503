//! CFFEX conversion-factor formula.

/// Default fictitious (notional) coupon rate CFFEX uses for all treasury
/// futures products, 3%.
pub const DEFAULT_FICTITIOUS_COUPON_RATE: f64 = 0.03;

/// Computes the CFFEX conversion factor for a deliverable bond against a
/// treasury futures contract.
///
/// `remaining_cp_after_delivery` (`n`) is the deliverable's remaining coupon
/// count after the delivery date; `coupon_rate` (`c`) and `inst_freq` (`f`)
/// are the deliverable's own terms; `months_to_next_cp_after_delivery` (`x`)
/// is the month count from the delivery month to the month of the next
/// coupon after delivery. Result is rounded to four decimals, matching the
/// precision CFFEX publishes.
#[must_use]
pub fn conversion_factor(
    remaining_cp_after_delivery: u32,
    coupon_rate: f64,
    inst_freq: u32,
    months_to_next_cp_after_delivery: i64,
    fictitious_coupon_rate: f64,
) -> f64 {
    let n = remaining_cp_after_delivery as f64;
    let c = coupon_rate;
    let f = inst_freq as f64;
    let x = months_to_next_cp_after_delivery as f64;
    let r = fictitious_coupon_rate;

    let cf = (c / f + c / r + (1.0 - c / r) / (1.0 + r / f).powf(n - 1.0)) / (1.0 + r / f).powf(x * f / 12.0)
        - (1.0 - x * f / 12.0) * c / f;

    (cf * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_on_the_run_10y_is_rational() {
        // A typical on-the-run deliverable against T-futures: semi-annual,
        // coupon near the fictitious 3%, ~18 remaining coupons, 3 months to
        // next coupon after delivery.
        let cf = conversion_factor(18, 0.0275, 2, 3, DEFAULT_FICTITIOUS_COUPON_RATE);
        assert!(cf > 0.8 && cf < 1.2, "cf = {cf} out of rational range");
    }

    #[test]
    fn test_at_the_money_coupon_close_to_one() {
        let cf = conversion_factor(20, 0.03, 2, 0, DEFAULT_FICTITIOUS_COUPON_RATE);
        assert_relative_eq!(cf, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_rounded_to_four_decimals() {
        let cf = conversion_factor(18, 0.0275, 2, 3, DEFAULT_FICTITIOUS_COUPON_RATE);
        let scaled = cf * 10_000.0;
        assert_relative_eq!(scaled, scaled.round(), epsilon = 1e-9);
    }
}
