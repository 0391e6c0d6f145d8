//! Edge metrics and street categories.

use std::str::FromStr;

use crate::CoreError;

/// The edge attribute used as routing weight and as the attributed quantity.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Metric {
    /// Segment length in metres.
    Distance,
    /// Free-flow travel time in seconds.
    #[default]
    TravelTime,
}

impl Metric {
    /// Human-readable label, useful for CSV column values and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Distance   => "distance",
            Metric::TravelTime => "travel_time",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "distance" => Ok(Metric::Distance),
            "travel_time" | "traveltime" => Ok(Metric::TravelTime),
            other => Err(CoreError::Parse(format!(
                "unknown metric {other:?}: expected \"distance\" or \"travel_time\""
            ))),
        }
    }
}

// ── StreetCategory ────────────────────────────────────────────────────────────

/// Official street category, which determines the assumed speed limit.
///
/// | Code | Category | Speed    |
/// |------|----------|----------|
/// | `G`  | local    | 30 km/h  |
/// | `L`  | main     | 50 km/h  |
/// | `B`  | federal  | 70 km/h  |
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StreetCategory {
    Local,
    Main,
    Federal,
}

impl StreetCategory {
    /// Parse a category code.  Accepts the single-letter codes of the source
    /// feed as well as the spelled-out names.
    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        match code.trim() {
            "G" | "g" | "local"   => Ok(StreetCategory::Local),
            "L" | "l" | "main"    => Ok(StreetCategory::Main),
            "B" | "b" | "federal" => Ok(StreetCategory::Federal),
            other => Err(CoreError::Parse(format!(
                "unknown street category {other:?}: expected G, L or B"
            ))),
        }
    }

    #[inline]
    pub fn speed_kmh(self) -> f64 {
        match self {
            StreetCategory::Local   => 30.0,
            StreetCategory::Main    => 50.0,
            StreetCategory::Federal => 70.0,
        }
    }

    /// Free-flow travel time in seconds for a segment of `distance_m` metres.
    ///
    /// Evaluated as `distance / speed / 1000 * 3600` in that order so the
    /// values agree bit-for-bit with previously exported datasets.
    #[inline]
    pub fn travel_secs(self, distance_m: f64) -> f64 {
        distance_m / self.speed_kmh() / 1000.0 * 60.0 * 60.0
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StreetCategory::Local   => "local",
            StreetCategory::Main    => "main",
            StreetCategory::Federal => "federal",
        }
    }
}

impl std::fmt::Display for StreetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
