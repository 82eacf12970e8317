//! Error types for ngram-dice.
//!
//! Scoring itself never fails; errors only report caller contract violations
//! so that a bad argument is never mistaken for a low similarity score.

use thiserror::Error;

/// Main error type for ngram-dice operations.
#[derive(Debug, Error)]
pub enum DiceError {
    /// Cutoff score outside [0, 1] or NaN
    #[error("Invalid cutoff: {0} (expected a score in [0, 1])")]
    InvalidCutoff(f64),

    /// Negative result count from a signed caller surface
    #[error("Invalid top_n: {0} (expected a non-negative count)")]
    InvalidTopN(i64),

    /// Any other invalid argument
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DiceError {
    /// Convert a signed count into a `top_n`, rejecting negatives.
    pub fn check_top_n(top_n: i64) -> Result<usize> {
        usize::try_from(top_n).map_err(|_| crate::log_error!(DiceError::InvalidTopN(top_n)))
    }
}

/// Result type alias for ngram-dice operations
pub type Result<T> = std::result::Result<T, DiceError>;

/// Convert ngram-dice errors to PyO3 exceptions
#[cfg(feature = "python-ext")]
impl From<DiceError> for pyo3::PyErr {
    fn from(err: DiceError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
