//! Observed-trip table loader.
//!
//! # CSV format
//!
//! One row per origin/destination pair of the ride-hailing movement
//! statistics.  Extra columns are ignored.
//!
//! ```csv
//! sourceid,dstid,mean_travel_time
//! 1,12,947.5
//! 0001,0012,951.0
//! ```
//!
//! Area ids may be written with or without zero padding.

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ta_core::AreaId;

use crate::{BatchError, BatchResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TripRecord {
    sourceid:         String,
    dstid:            String,
    mean_travel_time: f64,
}

/// One observed origin/destination pair and its measured mean travel time
/// (seconds), the regression target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Trip {
    pub source:      AreaId,
    pub destination: AreaId,
    pub target:      f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

pub fn load_trips_csv(path: &Path) -> BatchResult<Vec<Trip>> {
    let file = std::fs::File::open(path)?;
    load_trips_reader(file)
}

/// Like [`load_trips_csv`] but accepts any `Read` source.
pub fn load_trips_reader<R: Read>(reader: R) -> BatchResult<Vec<Trip>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut trips = Vec::new();

    for (row, result) in csv_reader.deserialize::<TripRecord>().enumerate() {
        let record = result.map_err(|e| BatchError::Parse(e.to_string()))?;
        let area = |raw: &str| {
            raw.parse::<AreaId>()
                .map_err(|e| BatchError::Parse(format!("row {}: {e}", row + 1)))
        };
        trips.push(Trip {
            source:      area(&record.sourceid)?,
            destination: area(&record.dstid)?,
            target:      record.mean_travel_time,
        });
    }
    Ok(trips)
}

/// Drop trips whose source or destination area owns no crossing in the
/// street graph.
pub fn retain_known_areas(mut trips: Vec<Trip>, known: &BTreeSet<AreaId>) -> Vec<Trip> {
    let before = trips.len();
    trips.retain(|t| known.contains(&t.source) && known.contains(&t.destination));
    if trips.len() < before {
        log::info!(
            "dropped {} of {} trips with an area outside the street graph",
            before - trips.len(),
            before
        );
    }
    trips
}
