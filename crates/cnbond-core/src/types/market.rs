//! Market classification for Chinese bond listings.

use std::fmt;

use crate::error::{CoreError, CoreResult};

/// The market a bond is listed and traded on.
///
/// Derived from the two-letter suffix of a bond code (`NNNNNN.XX`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Market {
    /// China Interbank Bond Market (suffix `IB`).
    Interbank,
    /// Shanghai Stock Exchange (suffix `SH`).
    ShanghaiExchange,
    /// Shenzhen Stock Exchange (suffix `SZ`).
    ShenzhenExchange,
}

impl Market {
    /// Resolves a market from a bond code's trailing suffix (`IB`, `SH`, `SZ`).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidBondCode` if the suffix is unrecognized.
    pub fn from_suffix(suffix: &str) -> CoreResult<Self> {
        match suffix {
            "IB" => Ok(Market::Interbank),
            "SH" => Ok(Market::ShanghaiExchange),
            "SZ" => Ok(Market::ShenzhenExchange),
            other => Err(CoreError::invalid_bond_code(other)),
        }
    }

    /// Whether this market uses exchange-style ("head and tail") accrued-interest counting.
    ///
    /// Both SSE and SZSE bonds share the same day-counting rule; only the
    /// interbank market differs.
    #[must_use]
    pub fn is_exchange(&self) -> bool {
        matches!(self, Market::ShanghaiExchange | Market::ShenzhenExchange)
    }

    /// The bond-code suffix for this market.
    #[must_use]
    pub fn suffix(&self) -> &'static str {
        match self {
            Market::Interbank => "IB",
            Market::ShanghaiExchange => "SH",
            Market::ShenzhenExchange => "SZ",
        }
    }
}

/// Validates that `code` matches `NNNNNN.{IB|SH|SZ}` and that its suffix
/// names `market`.
///
/// # Errors
///
/// Returns `CoreError::InvalidBondCode` if `code` is not six ASCII digits
/// followed by `.` and a recognized market suffix, or if that suffix names a
/// different market than `market`.
pub fn validate_bond_code(code: &str, market: Market) -> CoreResult<()> {
    let (digits, suffix) = code
        .split_once('.')
        .ok_or_else(|| CoreError::invalid_bond_code(code))?;

    let digits_ok = digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_digit());
    if !digits_ok {
        return Err(CoreError::invalid_bond_code(code));
    }

    let suffix_market = Market::from_suffix(suffix).map_err(|_| CoreError::invalid_bond_code(code))?;
    if suffix_market != market {
        return Err(CoreError::invalid_bond_code(code));
    }

    Ok(())
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

/// Coupon structure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum CouponType {
    /// Periodic coupon payments plus principal at maturity.
    CouponBearing,
    /// No coupon; issued at a discount to par.
    ZeroCoupon,
    /// Single payment of principal and accrued interest at maturity.
    OneTimeAtMaturity,
}

/// Interest-rate structure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum InterestType {
    /// Fixed coupon rate for the life of the bond. The only variant the
    /// primitive pricer supports.
    Fixed,
    /// Floating-rate coupon, reset against a reference index.
    Floating,
    /// Coupon rate that steps up/down on a schedule.
    Progressive,
    /// No periodic interest (zero-coupon instruments).
    Zero,
}

impl InterestType {
    /// Whether the primitive pricer in this crate supports the variant.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        matches!(self, InterestType::Fixed)
    }
}

impl fmt::Display for InterestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InterestType::Fixed => "Fixed",
            InterestType::Floating => "Floating",
            InterestType::Progressive => "Progressive",
            InterestType::Zero => "Zero",
        };
        write!(f, "{s}")
    }
}
