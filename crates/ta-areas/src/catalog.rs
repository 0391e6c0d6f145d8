//! Area polygons and point-in-area lookup.
//!
//! # Membership rule
//!
//! A point belongs to an area if it lies inside the area's polygon **or on
//! its boundary**.  Crossings are frequently placed exactly on district
//! borders; those resolve to the first bordering area in catalog order.
//!
//! # Spatial index
//!
//! Polygon bounding boxes are kept in an R-tree (via `rstar`).  A lookup
//! collects every area whose box contains the point, runs the exact test on
//! those, and returns the lowest catalog position among the hits, which is
//! the same answer a linear scan in catalog order would give.

use std::collections::HashMap;

use geo::{Coord, Intersects, LineString, Point, Polygon};
use rstar::{RTree, RTreeObject, AABB};

use ta_core::{AreaId, GeoPoint};

use crate::{AreaError, AreaResult};

// ── R-tree envelope entry ─────────────────────────────────────────────────────

/// Bounding box of one area, tagged with its catalog position.
#[derive(Clone, Debug)]
struct AreaEnvelope {
    bbox: AABB<[f64; 2]>,
    slot: usize,
}

impl RTreeObject for AreaEnvelope {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        self.bbox
    }
}

// ── Area ──────────────────────────────────────────────────────────────────────

/// One statistical area: its id, the boundary ring as published (closing
/// vertex removed) and the polygon used for membership tests.
#[derive(Clone, Debug)]
pub struct Area {
    pub id: AreaId,
    pub ring: Vec<GeoPoint>,
    polygon: Polygon<f64>,
}

impl Area {
    /// Validate and normalise `ring`.
    ///
    /// A trailing vertex equal to the first is dropped.  Fails with
    /// [`AreaError::Geometry`] if any coordinate is non-finite or fewer than
    /// three distinct vertices remain.
    pub fn new(id: AreaId, mut ring: Vec<GeoPoint>) -> AreaResult<Self> {
        if ring.len() >= 2 && ring.first() == ring.last() {
            ring.pop();
        }
        if let Some(bad) = ring.iter().find(|p| !p.is_finite()) {
            return Err(AreaError::geometry(id, format!("non-finite vertex {bad}")));
        }
        let mut distinct: Vec<(u64, u64)> = ring
            .iter()
            .map(|p| (p.lon.to_bits(), p.lat.to_bits()))
            .collect();
        distinct.sort_unstable();
        distinct.dedup();
        if distinct.len() < 3 {
            return Err(AreaError::geometry(
                id,
                format!("ring has {} distinct vertices, need at least 3", distinct.len()),
            ));
        }

        let exterior: LineString<f64> = ring
            .iter()
            .map(|p| Coord { x: p.lon, y: p.lat })
            .collect();
        let polygon = Polygon::new(exterior, vec![]);
        Ok(Self { id, ring, polygon })
    }

    /// Boundary-inclusive point-in-polygon test.  Non-finite points are
    /// never contained.
    #[inline]
    pub fn contains(&self, point: GeoPoint) -> bool {
        point.is_finite() && self.polygon.intersects(&Point::new(point.lon, point.lat))
    }

    fn bbox(&self) -> AABB<[f64; 2]> {
        let (min, max) = self.ring.iter().fold(
            ([f64::INFINITY; 2], [f64::NEG_INFINITY; 2]),
            |(min, max), p| {
                (
                    [min[0].min(p.lon), min[1].min(p.lat)],
                    [max[0].max(p.lon), max[1].max(p.lat)],
                )
            },
        );
        AABB::from_corners(min, max)
    }
}

// ── AreaCatalog ───────────────────────────────────────────────────────────────

/// Ordered collection of area polygons.
///
/// Build with [`AreaCatalog::insert`] or one of the loaders in
/// [`crate::loader`]; the catalog is read-only once graph construction
/// starts.
#[derive(Debug, Default)]
pub struct AreaCatalog {
    areas: Vec<Area>,
    by_id: HashMap<AreaId, usize>,
    index: RTree<AreaEnvelope>,
}

impl AreaCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from `(id, ring)` pairs, keeping their order.
    pub fn from_rings<I>(rings: I) -> AreaResult<Self>
    where
        I: IntoIterator<Item = (AreaId, Vec<GeoPoint>)>,
    {
        let mut catalog = Self::new();
        for (id, ring) in rings {
            catalog.insert(id, ring)?;
        }
        Ok(catalog)
    }

    /// Append an area at the end of the catalog order.
    pub fn insert(&mut self, id: AreaId, ring: Vec<GeoPoint>) -> AreaResult<()> {
        if self.by_id.contains_key(&id) {
            return Err(AreaError::DuplicateArea(id));
        }
        let area = Area::new(id, ring)?;
        let slot = self.areas.len();
        self.index.insert(AreaEnvelope { bbox: area.bbox(), slot });
        self.by_id.insert(id, slot);
        self.areas.push(area);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn get(&self, id: AreaId) -> Option<&Area> {
        self.by_id.get(&id).map(|&slot| &self.areas[slot])
    }

    /// Area ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = AreaId> + '_ {
        self.areas.iter().map(|a| a.id)
    }

    /// Every area's boundary ring, in catalog order.
    pub fn area_boundaries(&self) -> impl Iterator<Item = (AreaId, &[GeoPoint])> + '_ {
        self.areas.iter().map(|a| (a.id, a.ring.as_slice()))
    }

    /// `true` if `point` lies inside or on the boundary of area `id`.
    /// Unknown ids and non-finite points yield `false`.
    pub fn contains(&self, point: GeoPoint, id: AreaId) -> bool {
        self.get(id).is_some_and(|area| area.contains(point))
    }

    /// The first area in catalog order containing `point`, if any.
    pub fn locate(&self, point: GeoPoint) -> Option<AreaId> {
        if !point.is_finite() {
            return None;
        }
        let probe = AABB::from_point(point.to_array());
        self.index
            .locate_in_envelope_intersecting(&probe)
            .map(|entry| entry.slot)
            .filter(|&slot| self.areas[slot].contains(point))
            .min()
            .map(|slot| self.areas[slot].id)
    }
}
