//! `ta-core`: foundational types for the traffic-areas workspace.
//!
//! This crate is a dependency of every other `ta-*` crate.  It intentionally
//! has no `ta-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`, `SegmentId`, `CrossingId`                   |
//! | [`area`]        | `AreaId` (zero-padded statistical area identifier)    |
//! | [`geo`]         | `GeoPoint` (longitude/latitude)                       |
//! | [`metric`]      | `Metric`, `StreetCategory`                            |
//! | [`rng`]         | `SampleRng` (seedable, per-query derivable)           |
//! | [`config`]      | `StudyConfig`                                         |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod area;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod metric;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use area::AreaId;
pub use config::StudyConfig;
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{CrossingId, NodeId, SegmentId};
pub use metric::{Metric, StreetCategory};
pub use rng::SampleRng;
