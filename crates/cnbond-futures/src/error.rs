//! Error types for futures calendar, conversion factor, and evaluation.

use cnbond_bonds::BondError;
use thiserror::Error;

/// A specialized `Result` type for futures operations.
pub type FuturesResult<T> = Result<T, FuturesError>;

/// Errors that can occur while resolving futures dates or evaluating a
/// futures/bond pair.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FuturesError {
    /// Wraps a bond-level pricing error.
    #[error(transparent)]
    Bond(#[from] BondError),

    /// The futures contract code did not match `^[A-Z]+[0-9]{4}$`.
    #[error("invalid futures code: {code}")]
    InvalidFuturesCode {
        /// The offending code.
        code: String,
    },

    /// An IRR/carry/basis computation divided by a zero or non-finite denominator.
    #[error("degenerate evaluation: {reason}")]
    DegenerateEvaluation {
        /// Description of which denominator degenerated.
        reason: String,
    },
}

impl FuturesError {
    /// Creates an invalid-futures-code error.
    #[must_use]
    pub fn invalid_futures_code(code: impl Into<String>) -> Self {
        Self::InvalidFuturesCode { code: code.into() }
    }

    /// Creates a degenerate-evaluation error.
    #[must_use]
    pub fn degenerate_evaluation(reason: impl Into<String>) -> Self {
        Self::DegenerateEvaluation {
            reason: reason.into(),
        }
    }
}
