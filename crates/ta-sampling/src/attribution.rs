//! Per-area attribution of a route's statistics.
//!
//! # Half-split rule
//!
//! A segment's weight is shared equally between the areas of its two stored
//! endpoints (`area_from`, `area_to`).  A segment inside one area gives that
//! area its full weight in two halves; a border segment gives each side half.
//!
//! Halves are accumulated in two passes over the path, first every
//! `area_to` half, then every `area_from` half.  Changing that order changes
//! the low bits of the result.
//!
//! The output is restricted to the areas visited by the path's nodes, in
//! first-visit order.

use std::collections::BTreeSet;

use ta_core::{AreaId, Metric};
use ta_network::{Path, StreetGraph};

// ── RouteSummary ──────────────────────────────────────────────────────────────

/// Whole-route totals.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RouteSummary {
    /// Number of segments traversed.
    pub crossings: usize,
    pub distance_m: f64,
    pub travel_secs: f64,
}

impl RouteSummary {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Distance   => self.distance_m,
            Metric::TravelTime => self.travel_secs,
        }
    }
}

/// Totals of `path`, summed in path order.
pub fn summary(graph: &StreetGraph, path: &Path) -> RouteSummary {
    RouteSummary {
        crossings:   path.segments.len(),
        distance_m:  path.cost(graph, Metric::Distance),
        travel_secs: path.cost(graph, Metric::TravelTime),
    }
}

// ── AreaMetricVector ──────────────────────────────────────────────────────────

/// Ordered `(area, value)` pairs for the areas a path visits.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AreaMetricVector {
    entries: Vec<(AreaId, f64)>,
}

impl AreaMetricVector {
    pub fn get(&self, area: AreaId) -> Option<f64> {
        self.entries.iter().find(|(a, _)| *a == area).map(|&(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (AreaId, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn areas(&self) -> impl Iterator<Item = AreaId> + '_ {
        self.entries.iter().map(|&(a, _)| a)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|&(_, v)| v).sum()
    }

    /// One value per area of `all_areas`, ascending; areas the path did not
    /// visit get `0.0`.
    pub fn reindex(&self, all_areas: &BTreeSet<AreaId>) -> Vec<f64> {
        all_areas.iter().map(|&a| self.get(a).unwrap_or(0.0)).collect()
    }
}

// ── AreaCounts ────────────────────────────────────────────────────────────────

/// Ordered `(area, nodes)` pairs: how many of the path's crossings fall in
/// each visited area.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AreaCounts {
    entries: Vec<(AreaId, usize)>,
}

impl AreaCounts {
    pub fn get(&self, area: AreaId) -> Option<usize> {
        self.entries.iter().find(|(a, _)| *a == area).map(|&(_, n)| n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (AreaId, usize)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── Attribution ───────────────────────────────────────────────────────────────

/// Distinct areas of the path's nodes in first-visit order.
pub fn visited_areas(graph: &StreetGraph, path: &Path) -> Vec<AreaId> {
    let mut seen: Vec<AreaId> = Vec::new();
    for &node in &path.nodes {
        let area = graph.node_area(node);
        if !seen.contains(&area) {
            seen.push(area);
        }
    }
    seen
}

/// Split every segment's `metric` weight between its two endpoint areas.
pub fn areas_by_metric(graph: &StreetGraph, path: &Path, metric: Metric) -> AreaMetricVector {
    let mut entries: Vec<(AreaId, f64)> =
        visited_areas(graph, path).into_iter().map(|a| (a, 0.0)).collect();

    let mut credit = |area: AreaId, value: f64| {
        if let Some((_, total)) = entries.iter_mut().find(|(a, _)| *a == area) {
            *total += value;
        }
    };
    for &segment in &path.segments {
        credit(graph.seg_area_to[segment.index()], graph.edge_weight(segment, metric) / 2.0);
    }
    for &segment in &path.segments {
        credit(graph.seg_area_from[segment.index()], graph.edge_weight(segment, metric) / 2.0);
    }

    AreaMetricVector { entries }
}

/// Count the path's crossings per visited area.
pub fn areas_by_count(graph: &StreetGraph, path: &Path) -> AreaCounts {
    let mut entries: Vec<(AreaId, usize)> = Vec::new();
    for &node in &path.nodes {
        let area = graph.node_area(node);
        match entries.iter_mut().find(|(a, _)| *a == area) {
            Some((_, n)) => *n += 1,
            None => entries.push((area, 1)),
        }
    }
    AreaCounts { entries }
}
