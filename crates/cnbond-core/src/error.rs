//! Error types shared across the cnbond workspace.

use thiserror::Error;

/// A specialized `Result` type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core date and attribute handling.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A date component or string did not form a valid calendar date.
    #[error("invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A bond code did not match `NNNNNN.{IB|SH|SZ}`.
    #[error("invalid bond code: {code}")]
    InvalidBondCode {
        /// The offending code.
        code: String,
    },

    /// An interest type other than `Fixed` was requested of the primitive pricer.
    #[error("unsupported interest type: {interest_type}")]
    UnsupportedInterestType {
        /// The unsupported variant, as encountered.
        interest_type: String,
    },

    /// A bond attribute value violated a data-model invariant.
    #[error("invalid bond attribute: {reason}")]
    InvalidAttribute {
        /// Description of the violated invariant.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid bond code error.
    #[must_use]
    pub fn invalid_bond_code(code: impl Into<String>) -> Self {
        Self::InvalidBondCode { code: code.into() }
    }

    /// Creates an unsupported interest type error.
    #[must_use]
    pub fn unsupported_interest_type(interest_type: impl Into<String>) -> Self {
        Self::UnsupportedInterestType {
            interest_type: interest_type.into(),
        }
    }

    /// Creates an invalid-attribute error.
    #[must_use]
    pub fn invalid_attribute(reason: impl Into<String>) -> Self {
        Self::InvalidAttribute {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("invalid date"));
    }
}
