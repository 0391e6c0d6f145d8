//! Geographic coordinate type.
//!
//! `GeoPoint` stores WGS-84 longitude/latitude as `f64`.  Area membership is
//! decided by exact point-in-polygon tests against published boundaries, so
//! the extra precision over `f32` matters for crossings that sit on or near a
//! district border.

/// A (longitude, latitude) coordinate, in that order, matching GeoJSON.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// `false` if either component is NaN or infinite.  Such points never
    /// fall inside any area.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }

    /// `[lon, lat]`, the layout used by the R-tree envelopes.
    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

impl From<(f64, f64)> for GeoPoint {
    #[inline]
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}
