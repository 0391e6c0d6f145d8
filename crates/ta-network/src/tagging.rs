//! Area assignment for crossings and segments.
//!
//! All three passes work on crossing-table positions (`usize`) rather than
//! `NodeId`s because they run before the graph is laid out.

use ta_areas::AreaCatalog;
use ta_core::{AreaId, GeoPoint};

/// Resolve each active crossing to the first catalog area containing it.
///
/// Inactive positions (crossings not referenced by any segment) are left
/// `None` without a polygon test.
pub fn resolve_areas(
    positions: &[GeoPoint],
    active: &[bool],
    catalog: &AreaCatalog,
) -> Vec<Option<AreaId>> {
    positions
        .iter()
        .zip(active)
        .map(|(&pos, &active)| if active { catalog.locate(pos) } else { None })
        .collect()
}

/// Give every unresolved crossing the largest area id among its directly
/// adjacent, polygon-resolved neighbours.  Returns how many were filled.
///
/// Neighbours are read from a snapshot taken before the pass, so a crossing
/// filled here never feeds another fill.  A crossing whose neighbours are
/// all unresolved stays `None`.
pub fn fill_from_neighbours(areas: &mut [Option<AreaId>], links: &[(usize, usize)]) -> usize {
    let resolved = areas.to_vec();
    let mut best: Vec<Option<AreaId>> = vec![None; areas.len()];

    for &(a, b) in links {
        for (here, there) in [(a, b), (b, a)] {
            if resolved[here].is_none() && resolved[there].is_some() {
                // `None < Some(_)`, so max keeps the largest resolved id.
                best[here] = best[here].max(resolved[there]);
            }
        }
    }

    let mut filled = 0;
    for (slot, candidate) in areas.iter_mut().zip(best) {
        if slot.is_none() && candidate.is_some() {
            *slot = candidate;
            filled += 1;
        }
    }
    filled
}

/// `(area_from, area_to)` for every link.  When exactly one endpoint is
/// resolved its area is used for both ends.
pub fn tag_segments(
    areas: &[Option<AreaId>],
    links: &[(usize, usize)],
) -> Vec<(Option<AreaId>, Option<AreaId>)> {
    links
        .iter()
        .map(|&(from, to)| {
            let (af, at) = (areas[from], areas[to]);
            (af.or(at), at.or(af))
        })
        .collect()
}
