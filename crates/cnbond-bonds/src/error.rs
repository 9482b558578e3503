//! Error types for bond attribute, schedule, and pricing operations.

use cnbond_core::CoreError;
use cnbond_math::MathError;
use thiserror::Error;

/// A specialized `Result` type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur while building or pricing a bond.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// Wraps a core-level error (invalid date, invalid code, unsupported interest type).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Wraps a root-finding failure from the math crate.
    #[error(transparent)]
    Math(#[from] MathError),

    /// The requested date is outside `[carry_date, maturity_date)`.
    #[error("date {date} is out of range [{carry_date}, {maturity_date})")]
    DateOutOfRange {
        /// The offending date.
        date: String,
        /// The bond's carry (first accrual) date.
        carry_date: String,
        /// The bond's maturity date.
        maturity_date: String,
    },

    /// Neither a YTM nor a price was supplied to the pricer.
    #[error("neither yield nor price was supplied")]
    UnderSpecified,

    /// An IRR/carry computation divided by a zero or non-finite denominator.
    #[error("degenerate evaluation: {reason}")]
    DegenerateEvaluation {
        /// Description of which denominator degenerated.
        reason: String,
    },
}

impl BondError {
    /// Creates a date-out-of-range error.
    #[must_use]
    pub fn date_out_of_range(
        date: impl Into<String>,
        carry_date: impl Into<String>,
        maturity_date: impl Into<String>,
    ) -> Self {
        Self::DateOutOfRange {
            date: date.into(),
            carry_date: carry_date.into(),
            maturity_date: maturity_date.into(),
        }
    }

    /// Creates a degenerate-evaluation error.
    #[must_use]
    pub fn degenerate_evaluation(reason: impl Into<String>) -> Self {
        Self::DegenerateEvaluation {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BondError::date_out_of_range("2030-01-01", "2020-01-01", "2029-01-01");
        assert!(err.to_string().contains("out of range"));
    }
}
