//! `ta-network`: street graph, area tagging, pruning, and routing.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`network`]    | `StreetGraph` (CSR), `StreetGraphBuilder`, `BuildReport`  |
//! | [`tagging`]    | Area resolution, neighbour fill, segment area tags        |
//! | [`components`] | Connected components, largest-component pruning          |
//! | [`router`]     | `Router` trait, `Path`, `DijkstraRouter`                  |
//! | [`tables`]     | CSV loaders for the cleaned crossing/segment tables       |
//! | [`error`]      | `NetworkError`, `NetworkResult<T>`                        |
//!
//! # Lifecycle
//!
//! A graph is built once per run, pruned once, and read-only afterwards.
//! `StreetGraph` is `Send + Sync`, so any number of query threads can share
//! a reference to it.

pub mod components;
pub mod error;
pub mod network;
pub mod router;
pub mod tables;
pub mod tagging;


pub use components::PruneStats;
pub use error::{NetworkError, NetworkResult};
pub use network::{BuildReport, Segment, StreetGraph, StreetGraphBuilder};
pub use router::{DijkstraRouter, Path, Router};
pub use tables::{load_network_csv, CrossingRecord, SegmentRecord};
