//! Coupon payment frequency.

use std::fmt;

/// Coupon payments per year.
///
/// Chinese government bonds pay annually or semi-annually; zero-coupon and
/// one-time instruments carry no periodic frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Frequency {
    /// No periodic coupon (zero-coupon instruments).
    Zero,
    /// One payment per year.
    Annual,
    /// Two payments per year.
    SemiAnnual,
}

impl Frequency {
    /// Number of coupon payments per year (0 for `Zero`).
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Zero => 0,
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
        }
    }

    /// Number of months between successive coupon dates (0 for `Zero`).
    #[must_use]
    pub fn months_per_period(&self) -> u32 {
        match self {
            Frequency::Zero => 0,
            Frequency::Annual => 12,
            Frequency::SemiAnnual => 6,
        }
    }

    /// Builds a `Frequency` from the raw `inst_freq` integer used in bond attribute records.
    #[must_use]
    pub fn from_inst_freq(inst_freq: u32) -> Self {
        match inst_freq {
            0 => Frequency::Zero,
            1 => Frequency::Annual,
            _ => Frequency::SemiAnnual,
        }
    }

    /// Whether this frequency carries no coupons.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Frequency::Zero)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Frequency::Zero => "zero",
            Frequency::Annual => "annual",
            Frequency::SemiAnnual => "semi-annual",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periods_per_year() {
        assert_eq!(Frequency::SemiAnnual.periods_per_year(), 2);
        assert_eq!(Frequency::Annual.periods_per_year(), 1);
        assert_eq!(Frequency::Zero.periods_per_year(), 0);
    }

    #[test]
    fn test_from_inst_freq() {
        assert_eq!(Frequency::from_inst_freq(2), Frequency::SemiAnnual);
        assert_eq!(Frequency::from_inst_freq(1), Frequency::Annual);
        assert_eq!(Frequency::from_inst_freq(0), Frequency::Zero);
    }
}
