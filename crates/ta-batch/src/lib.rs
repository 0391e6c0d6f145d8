//! `ta-batch`: turns a table of observed trips into the per-area feature
//! matrix consumed by the coefficient optimizer.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`trips`]     | `Trip`, trip CSV loader, `retain_known_areas`            |
//! | [`runner`]    | `BatchRunner`: one median-path query per trip            |
//! | [`dataset`]   | `Dataset`, `TripFailure`                                 |
//! | [`csv`]       | `DatasetWriter` (`features.csv`, `targets.csv`)          |
//! | [`error`]     | `BatchError`, `BatchResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Runs trip queries on a Rayon pool.                      |
//!
//! # Example
//!
//! ```ignore
//! let catalog = AreaCatalog::from_geojson_path(areas, DEFAULT_ID_PROPERTY)?;
//! let (graph, _) = load_network_csv(crossings, segments, &catalog)?;
//! let trips = retain_known_areas(load_trips_csv(rides)?, &graph.all_areas());
//! let dataset = BatchRunner::new(&graph, StudyConfig::default())?.run(&trips)?;
//! DatasetWriter::new(out_dir, &dataset.columns)?.write_dataset(&dataset)?;
//! ```

pub mod csv;
pub mod dataset;
pub mod error;
pub mod runner;
pub mod trips;

#[cfg(test)]
mod tests;

pub use crate::csv::DatasetWriter;
pub use dataset::{Dataset, TripFailure};
pub use error::{BatchError, BatchResult};
pub use runner::BatchRunner;
pub use trips::{load_trips_csv, load_trips_reader, retain_known_areas, Trip};
