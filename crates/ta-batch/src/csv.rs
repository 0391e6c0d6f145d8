//! CSV export of a [`Dataset`].
//!
//! Creates two files in the output directory:
//! - `features.csv`: one column per area (zero-padded id), one row per trip
//! - `targets.csv`: a single `mean_travel_time` column, rows aligned

use std::fs::File;
use std::path::Path;

use csv::Writer;

use ta_core::AreaId;

use crate::{BatchError, BatchResult, Dataset};

/// Writes the feature matrix and targets to two CSV files.
pub struct DatasetWriter {
    features: Writer<File>,
    targets:  Writer<File>,
    width:    usize,
    finished: bool,
}

impl DatasetWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path, columns: &[AreaId]) -> BatchResult<Self> {
        let mut features = Writer::from_path(dir.join("features.csv"))?;
        features.write_record(columns.iter().map(|a| a.code()))?;

        let mut targets = Writer::from_path(dir.join("targets.csv"))?;
        targets.write_record(["mean_travel_time"])?;

        Ok(Self {
            features,
            targets,
            width: columns.len(),
            finished: false,
        })
    }

    /// Append one trip.  `row` must have one value per header column.
    pub fn write_row(&mut self, row: &[f64], target: f64) -> BatchResult<()> {
        if row.len() != self.width {
            return Err(BatchError::RowWidth { got: row.len(), expected: self.width });
        }
        self.features.write_record(row.iter().map(f64::to_string))?;
        self.targets.write_record([target.to_string()])?;
        Ok(())
    }

    /// Append every successful trip of `dataset`, then flush.
    pub fn write_dataset(&mut self, dataset: &Dataset) -> BatchResult<()> {
        for (row, &target) in dataset.rows.iter().zip(&dataset.targets) {
            self.write_row(row, target)?;
        }
        self.finish()
    }

    /// Flush both files.  Calling it again is a no-op.
    pub fn finish(&mut self) -> BatchResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.features.flush()?;
        self.targets.flush()?;
        Ok(())
    }
}
