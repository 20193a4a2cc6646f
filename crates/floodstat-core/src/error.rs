//! Error type shared by the estimation core.
//!
//! Every failure mode is a distinct variant — nothing is coerced into NaN
//! or a default value that could pass for a valid answer.

use thiserror::Error;

/// Failures reported by fitting, model evaluation, ranking, and ingestion.
#[derive(Debug, Error)]
pub enum FrequencyError {
    /// Series too short or degenerate (zero variance) for fitting.
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// Numerical optimization did not converge within the iteration budget.
    #[error("fit did not converge within {max_iter} iterations")]
    FitDivergence { max_iter: usize },

    /// Probability, density, or parameter argument outside its mathematical domain.
    #[error("domain error: {0}")]
    Domain(String),

    /// Malformed caller input (return period, geometry, count).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Empirical rank estimate falls outside the available data.
    #[error("rank {rank} outside available data (valid ranks 1..={n})")]
    OutOfRange { rank: i64, n: usize },

    /// Underlying I/O failure while reading observation data.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FrequencyError>;
