//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A date argument did not parse as `YYYY-MM-DD`.
    #[error("invalid date: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Wraps a bond attribute or pricing failure.
    #[error(transparent)]
    Bond(#[from] cnbond_bonds::BondError),

    /// Wraps a futures evaluation failure.
    #[error(transparent)]
    Futures(#[from] cnbond_futures::FuturesError),

    /// Wraps an attribute-store lookup failure.
    #[error(transparent)]
    Store(#[from] cnbond_store::StoreError),

    /// Output serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A CSV write failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl CliError {
    /// Maps this error to the process exit code documented for `cnbond-cli`:
    /// 2 for unknown/invalid bond or contract codes, 3 for numerical
    /// failures, 4 for missing attribute data.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidDate(_) => 2,
            Self::Bond(cnbond_bonds::BondError::Core(cnbond_core::CoreError::InvalidBondCode { .. })) => 2,
            Self::Futures(cnbond_futures::FuturesError::InvalidFuturesCode { .. }) => 2,
            Self::Bond(cnbond_bonds::BondError::Math(_)) => 3,
            Self::Bond(cnbond_bonds::BondError::DegenerateEvaluation { .. }) => 3,
            Self::Futures(cnbond_futures::FuturesError::DegenerateEvaluation { .. }) => 3,
            Self::Store(cnbond_store::StoreError::UnknownBond { .. }) => 4,
            _ => 1,
        }
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_exit_code() {
        assert_eq!(CliError::InvalidDate("x".to_string()).exit_code(), 2);
    }

    #[test]
    fn test_unknown_bond_exit_code() {
        let err = CliError::Store(cnbond_store::StoreError::unknown_bond("X.IB"));
        assert_eq!(err.exit_code(), 4);
    }
}
