//! Error types for attribute storage.

use cnbond_bonds::BondError;
use thiserror::Error;

/// A specialized `Result` type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while looking up or persisting bond attributes.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No attribute record is available for the requested bond code.
    #[error("unknown bond: {code}")]
    UnknownBond {
        /// The bond code that was not found.
        code: String,
    },

    /// The record on disk did not deserialize into a valid attribute record.
    #[error("malformed attribute record for {code}: {reason}")]
    MalformedRecord {
        /// The bond code the malformed record belongs to.
        code: String,
        /// Description of the parse failure.
        reason: String,
    },

    /// Wraps a bond-construction failure (an invariant violation in a stored record).
    #[error(transparent)]
    Bond(#[from] BondError),

    /// A filesystem read or write failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Creates an unknown-bond error.
    #[must_use]
    pub fn unknown_bond(code: impl Into<String>) -> Self {
        Self::UnknownBond { code: code.into() }
    }

    /// Creates a malformed-record error.
    #[must_use]
    pub fn malformed_record(code: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            code: code.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::unknown_bond("240018.IB");
        assert!(err.to_string().contains("240018.IB"));
    }
}
