//! Error types for ta-batch.

use thiserror::Error;

use ta_core::CoreError;
use ta_sampling::SamplingError;

/// Errors that abort a batch step.  Per-trip sampling failures are not
/// among them; they are collected in `Dataset::failures`.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("trip table parse error: {0}")]
    Parse(String),

    #[error("feature row has {got} values, expected {expected}")]
    RowWidth { got: usize, expected: usize },

    #[error(transparent)]
    Config(#[from] CoreError),

    #[error(transparent)]
    Sampling(#[from] SamplingError),
}

/// Alias for `Result<T, BatchError>`.
pub type BatchResult<T> = Result<T, BatchError>;
