//! Root-finding used to invert price→YTM.

mod brent;

pub use brent::brent;

/// Default convergence tolerance on the residual `|f(y)|`.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum number of Brent iterations.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for the root finder.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Convergence tolerance on the residual.
    pub tolerance: f64,
    /// Maximum number of iterations before giving up.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }
}

/// Result of a successful root-find.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Residual `f(root)`.
    pub residual: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_config_default() {
        let config = SolverConfig::default();
        assert_eq!(config.tolerance, 1e-10);
        assert_eq!(config.max_iterations, 100);
    }
}
