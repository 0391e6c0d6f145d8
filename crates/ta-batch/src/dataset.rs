//! The feature matrix produced by a batch run.

use ta_core::AreaId;
use ta_sampling::SamplingError;

use crate::Trip;

/// A trip whose query failed, with the reason.
#[derive(Debug)]
pub struct TripFailure {
    /// Position of the trip in the input slice.
    pub index: usize,
    pub trip:  Trip,
    pub error: SamplingError,
}

/// Per-area attributions of successful trips, aligned with their targets.
///
/// `rows[i][j]` is the share of trip `i`'s median route attributed to
/// `columns[j]`; `targets[i]` is that trip's observed travel time.
#[derive(Debug, Default)]
pub struct Dataset {
    /// Every area of the street graph, ascending.
    pub columns:  Vec<AreaId>,
    pub rows:     Vec<Vec<f64>>,
    pub targets:  Vec<f64>,
    pub failures: Vec<TripFailure>,
}

impl Dataset {
    pub fn new(columns: Vec<AreaId>) -> Self {
        Self { columns, ..Self::default() }
    }

    /// Number of successful trips.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push(&mut self, row: Vec<f64>, target: f64) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
        self.targets.push(target);
    }

    /// Column of `area`, if the graph has it.
    pub fn column(&self, area: AreaId) -> Option<usize> {
        self.columns.binary_search(&area).ok()
    }
}
