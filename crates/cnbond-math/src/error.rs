//! Error types for numerical operations.

use thiserror::Error;

/// A specialized `Result` type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during root-finding.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// The solver exhausted its iteration budget without converging.
    #[error("convergence failed after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
    },

    /// The bracket endpoints did not have opposite-signed function values.
    #[error("invalid bracket: f({a}) = {fa:.2e} and f({b}) = {fb:.2e} have the same sign")]
    InvalidBracket {
        /// Lower bound of the bracket.
        a: f64,
        /// Upper bound of the bracket.
        b: f64,
        /// Function value at `a`.
        fa: f64,
        /// Function value at `b`.
        fb: f64,
    },
}

impl MathError {
    /// Creates a convergence-failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::convergence_failed(100, 1e-6);
        assert!(err.to_string().contains("100 iterations"));
    }
}
