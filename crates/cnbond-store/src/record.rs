//! JSON wire format for a bond attribute record, and its conversion to/from
//! the in-memory [`BondAttributes`](cnbond_bonds::BondAttributes) type.

use cnbond_bonds::{BondAttributes, BondResult};
use cnbond_core::types::{CouponType, Date, InterestType, Market};
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// On-disk JSON representation of a bond's static attributes.
///
/// Field names and enum spellings match the vendor-neutral wire format this
/// crate persists; they intentionally differ from the Rust-idiomatic field
/// and variant names used by [`BondAttributes`] and its component types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BondAttributesRecord {
    /// Bond identifier, `NNNNNN.XX`.
    pub bond_code: String,
    /// Market suffix: `IB`, `SH`, or `SZ`.
    pub mkt: String,
    /// Human-readable short name.
    pub abbr: String,
    /// Face value per unit.
    pub par_value: f64,
    /// Coupon structure: `Coupon_Bear`, `Zero_Coupon`, or `One_Time`.
    pub cp_type: String,
    /// Interest structure: `Fixed`, `Floating`, `Progressive`, or `Zero`.
    pub interest_type: String,
    /// Annual coupon rate as a fraction.
    pub cp_rate_1st: f64,
    /// Floating-rate base rate; unused by the primitive pricer, carried for round-tripping.
    #[serde(default)]
    pub base_rate: Option<f64>,
    /// Floating-rate spread over base; unused by the primitive pricer, carried for round-tripping.
    #[serde(default)]
    pub rate_spread: Option<f64>,
    /// Coupons per year.
    pub inst_freq: u32,
    /// Issue / first-accrual date, `YYYY-MM-DD`.
    pub carry_date: String,
    /// Final payment date, `YYYY-MM-DD`.
    pub maturity_date: String,
    /// Day-count convention string.
    pub day_count: String,
}

fn cp_type_to_wire(cp_type: CouponType) -> &'static str {
    match cp_type {
        CouponType::CouponBearing => "Coupon_Bear",
        CouponType::ZeroCoupon => "Zero_Coupon",
        CouponType::OneTimeAtMaturity => "One_Time",
    }
}

fn cp_type_from_wire(code: &str, s: &str) -> StoreResult<CouponType> {
    match s {
        "Coupon_Bear" => Ok(CouponType::CouponBearing),
        "Zero_Coupon" => Ok(CouponType::ZeroCoupon),
        "One_Time" => Ok(CouponType::OneTimeAtMaturity),
        other => Err(StoreError::malformed_record(
            code,
            format!("unrecognized cp_type: {other}"),
        )),
    }
}

fn interest_type_from_wire(code: &str, s: &str) -> StoreResult<InterestType> {
    match s {
        "Fixed" => Ok(InterestType::Fixed),
        "Floating" => Ok(InterestType::Floating),
        "Progressive" => Ok(InterestType::Progressive),
        "Zero" => Ok(InterestType::Zero),
        other => Err(StoreError::malformed_record(
            code,
            format!("unrecognized interest_type: {other}"),
        )),
    }
}

impl BondAttributesRecord {
    /// Converts a wire record into a validated [`BondAttributes`].
    ///
    /// # Errors
    ///
    /// Returns `StoreError::MalformedRecord` for an unparseable market, date,
    /// coupon type, or interest type, and `StoreError::Bond` if the
    /// resulting attributes violate a data-model invariant.
    pub fn into_attributes(self) -> StoreResult<BondAttributes> {
        let market = Market::from_suffix(&self.mkt)
            .map_err(|e| StoreError::malformed_record(&self.bond_code, e.to_string()))?;
        let cp_type = cp_type_from_wire(&self.bond_code, &self.cp_type)?;
        let interest_type = interest_type_from_wire(&self.bond_code, &self.interest_type)?;
        let carry_date = Date::parse(&self.carry_date)
            .map_err(|e| StoreError::malformed_record(&self.bond_code, e.to_string()))?;
        let maturity_date = Date::parse(&self.maturity_date)
            .map_err(|e| StoreError::malformed_record(&self.bond_code, e.to_string()))?;

        let attrs: BondResult<BondAttributes> = BondAttributes::new(
            self.bond_code,
            market,
            self.abbr,
            self.par_value,
            cp_type,
            interest_type,
            self.cp_rate_1st,
            self.inst_freq,
            carry_date,
            maturity_date,
            self.day_count,
        );
        Ok(attrs?)
    }
}

impl From<&BondAttributes> for BondAttributesRecord {
    fn from(attrs: &BondAttributes) -> Self {
        Self {
            bond_code: attrs.bond_code.clone(),
            mkt: attrs.market.suffix().to_string(),
            abbr: attrs.abbr.clone(),
            par_value: attrs.par_value,
            cp_type: cp_type_to_wire(attrs.coupon_type).to_string(),
            interest_type: attrs.interest_type.to_string(),
            cp_rate_1st: attrs.coupon_rate,
            base_rate: None,
            rate_spread: None,
            inst_freq: attrs.inst_freq,
            carry_date: attrs.carry_date.to_string(),
            maturity_date: attrs.maturity_date.to_string(),
            day_count: attrs.day_count.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> BondAttributesRecord {
        BondAttributesRecord {
            bond_code: "240018.IB".to_string(),
            mkt: "IB".to_string(),
            abbr: "24附息国债18".to_string(),
            par_value: 100.0,
            cp_type: "Coupon_Bear".to_string(),
            interest_type: "Fixed".to_string(),
            cp_rate_1st: 0.0285,
            base_rate: None,
            rate_spread: None,
            inst_freq: 2,
            carry_date: "2024-08-15".to_string(),
            maturity_date: "2034-08-15".to_string(),
            day_count: "ACT/ACT".to_string(),
        }
    }

    #[test]
    fn test_round_trip() {
        let record = sample_record();
        let attrs = record.clone().into_attributes().unwrap();
        let back = BondAttributesRecord::from(&attrs);
        assert_eq!(back.bond_code, record.bond_code);
        assert_eq!(back.mkt, record.mkt);
        assert_eq!(back.cp_type, record.cp_type);
        assert_eq!(back.interest_type, record.interest_type);
    }

    #[test]
    fn test_json_serde() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: BondAttributesRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.bond_code, record.bond_code);
    }

    #[test]
    fn test_rejects_bad_market() {
        let mut record = sample_record();
        record.mkt = "XX".to_string();
        assert!(record.into_attributes().is_err());
    }
}
