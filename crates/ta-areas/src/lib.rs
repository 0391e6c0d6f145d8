//! `ta-areas`: statistical area boundaries and point-in-area lookup.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`catalog`] | `AreaCatalog` (polygons + envelope R-tree), `Area`          |
//! | [`loader`]  | GeoJSON `FeatureCollection` loader                          |
//! | [`error`]   | `AreaError`, `AreaResult<T>`                                |
//!
//! The catalog is loaded once and is immutable afterwards.  Catalog order is
//! significant: a point lying in several polygons (shared borders) belongs
//! to the first of them.

pub mod catalog;
pub mod error;
pub mod loader;


pub use catalog::{Area, AreaCatalog};
pub use error::{AreaError, AreaResult};
pub use loader::DEFAULT_ID_PROPERTY;
