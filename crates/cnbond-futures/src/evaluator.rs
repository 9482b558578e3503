//! Treasury-bond futures basis/carry/IRR/implied-YTM evaluation.

use std::sync::Arc;

use cnbond_bonds::pricing::{price_from_ytm, ytm_from_dirty_price};
use cnbond_bonds::BondAttributes;
use cnbond_core::types::Date;

use crate::calendar::{month_delta, FuturesContract};
use crate::conversion_factor::{conversion_factor, DEFAULT_FICTITIOUS_COUPON_RATE};
use crate::error::{FuturesError, FuturesResult};

/// Selects how the forward (delivery-date-implied) bond YTM is computed in
/// the final step of [`TfEvaluator::calc`].
#[derive(Clone)]
pub enum ForwardYtmAlgo {
    /// `tmp_clean = cf * f_px + carry`; invert at the delivery date.
    Carry,
    /// Discounts the invoice price back to the evaluating date at `disc_rate`
    /// and inverts there instead of at the delivery date.
    Discount {
        /// Continuous discount rate applied over `remaining_days / 365`.
        disc_rate: f64,
    },
    /// Caller-supplied algorithm, given the fully computed state and the
    /// underlying bond, returning the forward YTM directly.
    Custom(Arc<dyn Fn(&TfEvaluatorState, &BondAttributes) -> FuturesResult<f64> + Send + Sync>),
}

impl std::fmt::Debug for ForwardYtmAlgo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Carry => write!(f, "Carry"),
            Self::Discount { disc_rate } => f.debug_struct("Discount").field("disc_rate", disc_rate).finish(),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// The inputs a [`TfEvaluator`] was constructed or updated with.
#[derive(Debug, Clone)]
pub struct TfEvaluatorInputs<'a> {
    /// Valuation date for both the bond and the futures basis.
    pub evaluating_date: Date,
    /// Futures contract code, e.g. `T2212`.
    pub futures_code: String,
    /// Quoted futures price.
    pub futures_price: f64,
    /// The deliverable bond's static attributes.
    pub bond: &'a BondAttributes,
    /// The bond's YTM at `evaluating_date`.
    pub bond_ytm: f64,
    /// Funding (capital) cost rate used in the carry computation.
    pub capital_rate: f64,
    /// Optional coupon-reinvestment rate; changes the IRR formula when present.
    pub reinvest_rate: Option<f64>,
    /// Which algorithm computes the forward-implied bond YTM.
    pub forward_ytm_algo: ForwardYtmAlgo,
}

impl<'a> TfEvaluatorInputs<'a> {
    /// Convenience constructor defaulting `forward_ytm_algo` to `Carry` and
    /// `reinvest_rate` to `None`.
    #[must_use]
    pub fn new(
        evaluating_date: Date,
        futures_code: impl Into<String>,
        futures_price: f64,
        bond: &'a BondAttributes,
        bond_ytm: f64,
        capital_rate: f64,
    ) -> Self {
        Self {
            evaluating_date,
            futures_code: futures_code.into(),
            futures_price,
            bond,
            bond_ytm,
            capital_rate,
            reinvest_rate: None,
            forward_ytm_algo: ForwardYtmAlgo::Carry,
        }
    }
}

/// The full set of derived analytics produced by [`TfEvaluator::calc`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TfEvaluatorState {
    /// Bond dirty price at `evaluating_date`.
    pub bond_dirty_price: f64,
    /// Bond clean price at `evaluating_date`.
    pub bond_clean_price: f64,
    /// Bond accrued interest at `evaluating_date`.
    pub bond_accrued: f64,
    /// CFFEX conversion factor.
    pub conversion_factor: f64,
    /// Futures contract's payment (delivery) date.
    pub delivery_date: Date,
    /// Coupon date preceding `delivery_date`.
    pub delivery_pre_cp_date: Date,
    /// Coupon date following `delivery_date`.
    pub delivery_next_cp_date: Date,
    /// Accrued interest at `delivery_date`, rounded to 7 decimals per CFFEX convention.
    pub delivery_accrued: f64,
    /// `futures_price * conversion_factor + delivery_accrued`.
    pub invoice_price: f64,
    /// Calendar days from `evaluating_date` to `delivery_date`.
    pub remaining_days: i64,
    /// Count of coupon dates strictly between `evaluating_date` and `delivery_date`.
    pub remaining_cp_count: usize,
    /// Sum of coupon cash paid strictly between `evaluating_date` and `delivery_date`.
    pub remaining_cp: f64,
    /// Time-weighted sum of those interim coupons (weight = days-to-delivery / 365).
    pub remaining_cp_weighted: f64,
    /// `bond_dirty_price - remaining_cp`.
    pub delivery_cost: f64,
    /// `invoice_price - delivery_cost`.
    pub futures_bond_spread: f64,
    /// `bond_clean_price - futures_price * conversion_factor`.
    pub basis_spread: f64,
    /// Expected cost-of-carry gain from holding the bond to delivery.
    pub carry: f64,
    /// `basis_spread - carry`.
    pub net_basis_spread: f64,
    /// Implied repo rate.
    pub irr: f64,
    /// Forward (delivery-date-implied) bond YTM, via `forward_ytm_algo`.
    pub forward_ytm: f64,
}

/// A futures/bond basis evaluator, modeled as a small state machine: either
/// `Unpriced` (inputs only) or `Priced` (inputs plus the last `calc()` result).
#[derive(Debug, Clone)]
pub enum TfEvaluator<'a> {
    /// No analytics computed yet for the current inputs.
    Unpriced(TfEvaluatorInputs<'a>),
    /// `calc()` has run; carries both the inputs it ran with and the result.
    Priced(TfEvaluatorInputs<'a>, TfEvaluatorState),
}

impl<'a> TfEvaluator<'a> {
    /// Builds a fresh, unpriced evaluator.
    #[must_use]
    pub fn new(inputs: TfEvaluatorInputs<'a>) -> Self {
        Self::Unpriced(inputs)
    }

    /// The evaluator's current inputs, regardless of pricing state.
    #[must_use]
    pub fn inputs(&self) -> &TfEvaluatorInputs<'a> {
        match self {
            Self::Unpriced(inputs) | Self::Priced(inputs, _) => inputs,
        }
    }

    /// The last computed state, if `calc()` has run since the last `update()`.
    #[must_use]
    pub fn state(&self) -> Option<&TfEvaluatorState> {
        match self {
            Self::Unpriced(_) => None,
            Self::Priced(_, state) => Some(state),
        }
    }

    /// Patches the inputs and returns a fresh `Unpriced` evaluator, discarding
    /// any previously computed state.
    #[must_use]
    pub fn update(self, patch: impl FnOnce(&mut TfEvaluatorInputs<'a>)) -> Self {
        let mut inputs = match self {
            Self::Unpriced(inputs) | Self::Priced(inputs, _) => inputs,
        };
        patch(&mut inputs);
        Self::Unpriced(inputs)
    }

    /// Runs the full basis/carry/IRR/implied-YTM computation, consuming
    /// `self` and returning a `Priced` evaluator.
    ///
    /// # Errors
    ///
    /// Returns `FuturesError::InvalidFuturesCode` if `futures_code` cannot be
    /// parsed, `FuturesError::Bond` for any bond-pricing failure, and
    /// `FuturesError::DegenerateEvaluation` if `remaining_days` is zero, or
    /// the IRR denominator is zero or non-finite.
    pub fn calc(self) -> FuturesResult<Self> {
        let inputs = match self {
            Self::Unpriced(inputs) | Self::Priced(inputs, _) => inputs,
        };
        let state = compute(&inputs)?;
        Ok(Self::Priced(inputs, state))
    }
}

fn compute(inputs: &TfEvaluatorInputs<'_>) -> FuturesResult<TfEvaluatorState> {
    let bond = inputs.bond;

    let bond_priced = price_from_ytm(bond, inputs.evaluating_date, inputs.bond_ytm)?;

    let contract = FuturesContract::parse(&inputs.futures_code)?;
    let delivery_date = contract.delivery_day();
    let schedule = bond.schedule()?;
    let (delivery_pre_cp, delivery_next_cp) = schedule.bracket(delivery_date)?;

    let c = bond.coupon_cash();
    let org_delivery_accrued =
        c * delivery_pre_cp.days_between(&delivery_date) as f64 / delivery_pre_cp.days_between(&delivery_next_cp) as f64;
    let delivery_accrued = round_to(org_delivery_accrued, 7);

    let remaining_cp_after_delivery = schedule.remaining_count_after(delivery_date) as u32;
    let months_to_next_cp = month_delta(delivery_date, delivery_next_cp);
    let cf = conversion_factor(
        remaining_cp_after_delivery,
        bond.coupon_rate,
        bond.inst_freq,
        months_to_next_cp,
        DEFAULT_FICTITIOUS_COUPON_RATE,
    );

    let invoice_price = inputs.futures_price * cf + delivery_accrued;
    let remaining_days = inputs.evaluating_date.days_between(&delivery_date);
    if remaining_days == 0 {
        return Err(FuturesError::degenerate_evaluation(
            "evaluating_date equals delivery_date",
        ));
    }

    let interim_cp_dates = schedule.dates_in_open_interval(inputs.evaluating_date, delivery_date);
    let (remaining_cp, remaining_cp_weighted) = if interim_cp_dates.is_empty() {
        (0.0, 0.0)
    } else {
        let remaining_cp = interim_cp_dates.len() as f64 * c;
        let remaining_cp_weighted: f64 = interim_cp_dates
            .iter()
            .map(|d| d.days_between(&delivery_date) as f64 / 365.0)
            .sum::<f64>()
            * c;
        (remaining_cp, remaining_cp_weighted)
    };

    let delivery_cost = bond_priced.dirty_price - remaining_cp;
    let futures_bond_spread = invoice_price - delivery_cost;
    let basis_spread = bond_priced.clean_price - inputs.futures_price * cf;
    let carry = (delivery_accrued - bond_priced.accrued + remaining_cp)
        + inputs.capital_rate * (remaining_cp_weighted - bond_priced.dirty_price * remaining_days as f64 / 365.0);
    let net_basis_spread = basis_spread - carry;

    let irr = if let Some(reinvest_rate) = inputs.reinvest_rate {
        ((invoice_price + remaining_cp + remaining_cp_weighted * reinvest_rate) / bond_priced.dirty_price - 1.0) * 365.0
            / remaining_days as f64
    } else {
        let denom = bond_priced.dirty_price * remaining_days as f64 / 365.0 - remaining_cp_weighted;
        if denom == 0.0 || !denom.is_finite() {
            return Err(FuturesError::degenerate_evaluation(
                "IRR denominator is zero or non-finite",
            ));
        }
        (invoice_price + remaining_cp - bond_priced.dirty_price) / denom
    };

    let mut state = TfEvaluatorState {
        bond_dirty_price: bond_priced.dirty_price,
        bond_clean_price: bond_priced.clean_price,
        bond_accrued: bond_priced.accrued,
        conversion_factor: cf,
        delivery_date,
        delivery_pre_cp_date: delivery_pre_cp,
        delivery_next_cp_date: delivery_next_cp,
        delivery_accrued,
        invoice_price,
        remaining_days,
        remaining_cp_count: interim_cp_dates.len(),
        remaining_cp,
        remaining_cp_weighted,
        delivery_cost,
        futures_bond_spread,
        basis_spread,
        carry,
        net_basis_spread,
        irr,
        forward_ytm: 0.0,
    };

    state.forward_ytm = forward_ytm(&inputs.forward_ytm_algo, inputs, &state)?;
    Ok(state)
}

fn forward_ytm(
    algo: &ForwardYtmAlgo,
    inputs: &TfEvaluatorInputs<'_>,
    state: &TfEvaluatorState,
) -> FuturesResult<f64> {
    match algo {
        ForwardYtmAlgo::Carry => {
            let tmp_clean = state.conversion_factor * inputs.futures_price + state.carry;
            let tmp_dirty = tmp_clean + state.delivery_accrued;
            let priced = ytm_from_dirty_price(inputs.bond, state.delivery_date, tmp_dirty)?;
            Ok(priced.ytm)
        }
        ForwardYtmAlgo::Discount { disc_rate } => {
            let tmp_dirty = state.conversion_factor * inputs.futures_price + state.delivery_accrued;
            let disc_dirty = tmp_dirty * (-disc_rate * state.remaining_days as f64 / 365.0).exp();
            let priced = ytm_from_dirty_price(inputs.bond, inputs.evaluating_date, disc_dirty)?;
            Ok(priced.ytm)
        }
        ForwardYtmAlgo::Custom(f) => f(state, inputs.bond),
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cnbond_core::types::{CouponType, InterestType, Market};

    fn bond_220021() -> BondAttributes {
        BondAttributes::new(
            "220021.IB",
            Market::Interbank,
            "22附息国债21",
            100.0,
            CouponType::CouponBearing,
            InterestType::Fixed,
            0.0235,
            2,
            Date::from_ymd(2022, 10, 28).unwrap(),
            Date::from_ymd(2032, 10, 28).unwrap(),
            "ACT/ACT",
        )
        .unwrap()
    }

    fn bond_200006() -> BondAttributes {
        BondAttributes::new(
            "200006.IB",
            Market::Interbank,
            "20附息国债06",
            100.0,
            CouponType::CouponBearing,
            InterestType::Fixed,
            0.0292,
            2,
            Date::from_ymd(2020, 8, 15).unwrap(),
            Date::from_ymd(2030, 8, 15).unwrap(),
            "ACT/ACT",
        )
        .unwrap()
    }

    #[test]
    fn test_no_interim_coupon_scenario() {
        let bond = bond_220021();
        let inputs = TfEvaluatorInputs::new(
            Date::from_ymd(2022, 10, 28).unwrap(),
            "T2212",
            101.65,
            &bond,
            0.026625,
            0.0199,
        );
        let evaluator = TfEvaluator::new(inputs).calc().unwrap();
        let state = evaluator.state().unwrap();
        assert_eq!(state.remaining_cp_count, 0);
        assert_relative_eq!(state.remaining_cp, 0.0);
        assert_relative_eq!(state.remaining_cp_weighted, 0.0);
    }

    #[test]
    fn test_invoice_price_and_basis_identity() {
        let bond = bond_200006();
        let inputs = TfEvaluatorInputs::new(
            Date::from_ymd(2022, 9, 9).unwrap(),
            "T2212",
            101.39,
            &bond,
            0.026761,
            0.26,
        );
        let evaluator = TfEvaluator::new(inputs).calc().unwrap();
        let state = evaluator.state().unwrap();

        assert_relative_eq!(
            state.invoice_price,
            101.39 * state.conversion_factor + state.delivery_accrued,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            state.net_basis_spread + state.carry,
            state.basis_spread,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_update_discards_prior_state() {
        let bond = bond_220021();
        let inputs = TfEvaluatorInputs::new(
            Date::from_ymd(2022, 10, 28).unwrap(),
            "T2212",
            101.65,
            &bond,
            0.026625,
            0.0199,
        );
        let evaluator = TfEvaluator::new(inputs).calc().unwrap();
        assert!(evaluator.state().is_some());

        let reset = evaluator.update(|inputs| inputs.futures_price = 102.0);
        assert!(reset.state().is_none());
        assert_relative_eq!(reset.inputs().futures_price, 102.0);
    }

    #[test]
    fn test_invalid_futures_code_errors() {
        let bond = bond_220021();
        let inputs = TfEvaluatorInputs::new(
            Date::from_ymd(2022, 10, 28).unwrap(),
            "NOTACODE",
            101.65,
            &bond,
            0.026625,
            0.0199,
        );
        assert!(TfEvaluator::new(inputs).calc().is_err());
    }
}
