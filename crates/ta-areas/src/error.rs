//! Area-catalog error type.

use thiserror::Error;

use ta_core::AreaId;

/// Errors produced while loading area boundaries.  All of them are fatal to
/// catalog construction.
#[derive(Debug, Error)]
pub enum AreaError {
    #[error("invalid geometry for area {area}: {reason}")]
    Geometry { area: String, reason: String },

    #[error("area {0} defined more than once")]
    DuplicateArea(AreaId),

    #[error("area feature #{index}: {reason}")]
    Feature { index: usize, reason: String },

    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] ::geojson::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AreaError {
    pub(crate) fn geometry(area: impl ToString, reason: impl Into<String>) -> Self {
        AreaError::Geometry { area: area.to_string(), reason: reason.into() }
    }
}

pub type AreaResult<T> = Result<T, AreaError>;
