//! GeoJSON area loader.
//!
//! Reads a `FeatureCollection` in which every feature is one statistical
//! area.  For each feature the first exterior ring is used: ring 0 of a
//! `Polygon`, or ring 0 of the first member of a `MultiPolygon`.  Positions
//! are truncated to 2-D (longitude, latitude).  Holes and further members are
//! ignored.
//!
//! ```json
//! { "type": "FeatureCollection",
//!   "features": [
//!     { "type": "Feature",
//!       "properties": { "MOVEMENT_ID": "1" },
//!       "geometry": { "type": "Polygon",
//!                     "coordinates": [[[16.3, 48.2], [16.4, 48.2], [16.4, 48.3], [16.3, 48.2]]] } }
//!   ] }
//! ```

use std::path::Path;

use ::geojson::{Feature, GeoJson, Value};
use serde_json::Value as JsonValue;

use ta_core::{AreaId, GeoPoint};

use crate::{AreaCatalog, AreaError, AreaResult};

/// Property holding the area id in the published statistical-areas file.
pub const DEFAULT_ID_PROPERTY: &str = "MOVEMENT_ID";

impl AreaCatalog {
    /// Load a catalog from a GeoJSON file.  See [`AreaCatalog::from_geojson_str`].
    pub fn from_geojson_path(path: &Path, id_property: &str) -> AreaResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_geojson_str(&text, id_property)
    }

    /// Load a catalog from GeoJSON text, keeping feature order as catalog
    /// order.  `id_property` names the feature property carrying the area id
    /// (string or integer).
    pub fn from_geojson_str(text: &str, id_property: &str) -> AreaResult<Self> {
        let collection = match text.parse::<GeoJson>()? {
            GeoJson::FeatureCollection(fc) => fc,
            _ => {
                return Err(AreaError::Feature {
                    index:  0,
                    reason: "expected a FeatureCollection".into(),
                });
            }
        };

        let mut catalog = AreaCatalog::new();
        for (index, feature) in collection.features.iter().enumerate() {
            let id = feature_id(index, feature, id_property)?;
            let ring = exterior_ring(id, feature)?;
            catalog.insert(id, ring)?;
        }

        log::info!("loaded {} areas from GeoJSON", catalog.len());
        Ok(catalog)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn feature_id(index: usize, feature: &Feature, id_property: &str) -> AreaResult<AreaId> {
    let value = feature.property(id_property).ok_or_else(|| AreaError::Feature {
        index,
        reason: format!("missing property {id_property:?}"),
    })?;

    let parsed = match value {
        JsonValue::String(s) => s.parse::<AreaId>().ok(),
        JsonValue::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()).map(AreaId),
        _ => None,
    };
    parsed.ok_or_else(|| AreaError::Feature {
        index,
        reason: format!("property {id_property:?} is not an area id: {value}"),
    })
}

fn exterior_ring(id: AreaId, feature: &Feature) -> AreaResult<Vec<GeoPoint>> {
    let geometry = feature
        .geometry
        .as_ref()
        .ok_or_else(|| AreaError::geometry(id, "feature has no geometry"))?;

    let ring = match &geometry.value {
        Value::Polygon(rings) => rings.first(),
        Value::MultiPolygon(polygons) => polygons.first().and_then(|rings| rings.first()),
        _ => {
            return Err(AreaError::geometry(id, "expected a Polygon or MultiPolygon"));
        }
    }
    .ok_or_else(|| AreaError::geometry(id, "geometry has no exterior ring"))?;

    ring.iter()
        .map(|position| match position.as_slice() {
            [lon, lat, ..] => Ok(GeoPoint::new(*lon, *lat)),
            _ => Err(AreaError::geometry(id, "position with fewer than 2 coordinates")),
        })
        .collect()
}
