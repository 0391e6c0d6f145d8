//! `ta-sampling`: representative routes between areas and their per-area
//! attribution.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`sampler`]     | `AreaNodeSampler`: uniform crossing draw within an area   |
//! | [`median`]      | `PathSampler`, `MedianPath`, `Candidate`                  |
//! | [`attribution`] | `RouteSummary`, `AreaMetricVector`, `AreaCounts`          |
//! | [`error`]       | `SamplingError`, `SamplingResult<T>`                      |
//!
//! Every function here reads the graph and writes nothing but its own
//! return value, so independent queries may run on separate threads as long
//! as each owns its `SampleRng`.

pub mod attribution;
pub mod error;
pub mod median;
pub mod sampler;


pub use attribution::{areas_by_count, areas_by_metric, summary, AreaCounts, AreaMetricVector, RouteSummary};
pub use error::{SamplingError, SamplingResult};
pub use median::{Candidate, MedianPath, PathSampler};
pub use sampler::AreaNodeSampler;
