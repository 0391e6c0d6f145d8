//! Sampling-subsystem error type.

use thiserror::Error;

use ta_core::AreaId;
use ta_network::NetworkError;

/// Errors produced by `ta-sampling`.  All of them are local to one query.
#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("area {0} has no crossings in the street graph")]
    EmptyArea(AreaId),

    #[error("sample size must be at least 1, got {0}")]
    InvalidSampleSize(usize),

    #[error(transparent)]
    Network(#[from] NetworkError),
}

pub type SamplingResult<T> = Result<T, SamplingError>;
