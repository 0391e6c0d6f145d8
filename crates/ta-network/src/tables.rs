//! CSV loaders for the cleaned crossing and segment tables.
//!
//! # CSV formats
//!
//! Crossings, one row per street crossing:
//!
//! ```csv
//! id,lng,lat
//! 102938,16.3725,48.2084
//! ```
//!
//! Segments, one row per street segment:
//!
//! ```csv
//! node_from,node_to,distance,category,frc,fow
//! 102938,102940,84.5,G,7,3
//! ```
//!
//! **`category`** selects the speed limit used for travel time:
//!
//! | Value            | Speed   |
//! |------------------|---------|
//! | `G` / `local`    | 30 km/h |
//! | `L` / `main`     | 50 km/h |
//! | `B` / `federal`  | 70 km/h |
//!
//! `frc` and `fow` are optional.  When present they are used to drop
//! pedestrian-only rows (see [`SegmentRecord::is_walkway`]).

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ta_areas::AreaCatalog;
use ta_core::{CrossingId, GeoPoint, StreetCategory};

use crate::network::{BuildReport, StreetGraph, StreetGraphBuilder};
use crate::{NetworkError, NetworkResult};

/// Functional road classes that only carry pedestrians.
const WALKWAY_FRC: [u16; 3] = [10, 12, 45];

/// Forms of way for sidewalks, stairs, and pedestrian zones.
const WALKWAY_FOW: [u16; 4] = [6, 12, 14, 15];

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CrossingRecord {
    pub id:  i64,
    pub lng: f64,
    pub lat: f64,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SegmentRecord {
    pub node_from: i64,
    pub node_to:   i64,
    /// Length in metres.
    pub distance:  f64,
    pub category:  String,
    #[serde(default)]
    pub frc: Option<u16>,
    #[serde(default)]
    pub fow: Option<u16>,
}

impl SegmentRecord {
    /// `true` for sidewalks, stairs and other rows cars cannot use.
    pub fn is_walkway(&self) -> bool {
        self.frc.is_some_and(|c| WALKWAY_FRC.contains(&c))
            || self.fow.is_some_and(|c| WALKWAY_FOW.contains(&c))
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

pub fn load_crossings_csv(path: &Path) -> NetworkResult<Vec<CrossingRecord>> {
    let file = std::fs::File::open(path).map_err(NetworkError::Io)?;
    load_crossings_reader(file)
}

/// Like [`load_crossings_csv`] but accepts any `Read` source.
pub fn load_crossings_reader<R: Read>(reader: R) -> NetworkResult<Vec<CrossingRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<CrossingRecord>()
        .map(|row| row.map_err(|e| NetworkError::Parse(e.to_string())))
        .collect()
}

/// Load street segments, dropping walkway rows.
pub fn load_segments_csv(path: &Path) -> NetworkResult<Vec<SegmentRecord>> {
    let file = std::fs::File::open(path).map_err(NetworkError::Io)?;
    load_segments_reader(file)
}

/// Like [`load_segments_csv`] but accepts any `Read` source.
pub fn load_segments_reader<R: Read>(reader: R) -> NetworkResult<Vec<SegmentRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut segments = Vec::new();
    let mut walkways = 0usize;

    for result in csv_reader.deserialize::<SegmentRecord>() {
        let row = result.map_err(|e| NetworkError::Parse(e.to_string()))?;
        if row.is_walkway() {
            walkways += 1;
            continue;
        }
        segments.push(row);
    }

    if walkways > 0 {
        log::debug!("dropped {walkways} walkway segments");
    }
    Ok(segments)
}

/// Fill a builder from typed records.  Fails on an unknown category code.
pub fn builder_from_records(
    crossings: &[CrossingRecord],
    segments: &[SegmentRecord],
) -> NetworkResult<StreetGraphBuilder> {
    let mut builder = StreetGraphBuilder::with_capacity(crossings.len(), segments.len());
    for c in crossings {
        builder.add_crossing(CrossingId(c.id), GeoPoint::new(c.lng, c.lat));
    }
    for s in segments {
        let category = StreetCategory::from_code(&s.category)?;
        builder.add_street(CrossingId(s.node_from), CrossingId(s.node_to), s.distance, category);
    }
    Ok(builder)
}

/// Load both tables and build the pruned, area-tagged graph.
pub fn load_network_csv(
    crossings: &Path,
    segments: &Path,
    catalog: &AreaCatalog,
) -> NetworkResult<(StreetGraph, BuildReport)> {
    let crossings = load_crossings_csv(crossings)?;
    let segments = load_segments_csv(segments)?;
    log::info!("loaded {} crossings and {} segments", crossings.len(), segments.len());
    builder_from_records(&crossings, &segments)?.build_with_report(catalog)
}
