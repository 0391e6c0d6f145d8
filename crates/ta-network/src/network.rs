//! Street graph representation and builder.
//!
//! # Data layout
//!
//! Segments are undirected.  Each one is stored once in the `seg_*` arrays
//! (indexed by `SegmentId`) and appears twice in the **Compressed Sparse
//! Row (CSR)** adjacency, once from each endpoint.  Given a `NodeId n`, its
//! incident arcs occupy:
//!
//! ```text
//! adj_node   [ node_adj_start[n] .. node_adj_start[n+1] ]   // neighbour
//! adj_segment[ node_adj_start[n] .. node_adj_start[n+1] ]   // via segment
//! ```
//!
//! Iteration over a node's neighbours is therefore a contiguous memory scan,
//! which is what Dijkstra's inner loop wants.
//!
//! # Construction pipeline
//!
//! [`StreetGraphBuilder::build`] runs, in order:
//!
//! 1. table validation (duplicate / unknown crossings abort the build),
//! 2. area resolution against the [`AreaCatalog`],
//! 3. neighbour fill for crossings outside every polygon,
//! 4. segment area tagging,
//! 5. removal of crossings that are still unresolved,
//! 6. pruning to the largest connected component.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use ta_areas::AreaCatalog;
use ta_core::{AreaId, CrossingId, GeoPoint, Metric, NodeId, SegmentId, StreetCategory};

use crate::components::PruneStats;
use crate::tagging;
use crate::{NetworkError, NetworkResult};

// ── Assembly rows ─────────────────────────────────────────────────────────────

/// A crossing with its final area, ready to be laid out.
pub(crate) struct NodeRow {
    pub(crate) crossing: CrossingId,
    pub(crate) pos:      GeoPoint,
    pub(crate) area:     AreaId,
}

/// A segment between two `NodeRow` positions.
pub(crate) struct SegmentRow {
    pub(crate) from:        usize,
    pub(crate) to:          usize,
    pub(crate) length_m:    f64,
    pub(crate) travel_secs: f64,
    pub(crate) area_from:   AreaId,
    pub(crate) area_to:     AreaId,
}

// ── Segment ───────────────────────────────────────────────────────────────────

/// Owned snapshot of one segment's attributes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    pub from:        NodeId,
    pub to:          NodeId,
    pub length_m:    f64,
    pub travel_secs: f64,
    pub area_from:   AreaId,
    pub area_to:     AreaId,
}

// ── StreetGraph ───────────────────────────────────────────────────────────────

/// Undirected, simple, connected street graph with every crossing tagged by
/// its statistical area.
///
/// All array fields are `pub` for direct indexed access on hot paths.  Do
/// not construct directly; use [`StreetGraphBuilder`].
pub struct StreetGraph {
    // ── Node data (indexed by NodeId) ─────────────────────────────────────
    /// External id of each crossing.
    pub node_crossing: Vec<CrossingId>,

    /// Geographic position of each crossing.
    pub node_pos: Vec<GeoPoint>,

    /// Resolved area of each crossing.  Total: every retained node has one.
    pub node_area: Vec<AreaId>,

    // ── CSR adjacency ─────────────────────────────────────────────────────
    /// CSR row pointer.  Length = `node_count + 1`.
    pub node_adj_start: Vec<u32>,

    /// Neighbour reached by each arc.
    pub adj_node: Vec<NodeId>,

    /// Segment traversed by each arc.
    pub adj_segment: Vec<SegmentId>,

    // ── Segment data (indexed by SegmentId) ───────────────────────────────
    /// Endpoints as given by the source table.  Orientation carries no
    /// routing meaning; it only decides which end is `area_from`.
    pub seg_from: Vec<NodeId>,
    pub seg_to:   Vec<NodeId>,

    /// Segment length in metres.  Strictly positive.
    pub seg_length_m: Vec<f64>,

    /// Free-flow travel time in seconds.  Strictly positive.
    pub seg_travel_secs: Vec<f64>,

    /// Area of `seg_from` / `seg_to`.
    pub seg_area_from: Vec<AreaId>,
    pub seg_area_to:   Vec<AreaId>,

    // ── Lookups ───────────────────────────────────────────────────────────
    crossing_index: HashMap<CrossingId, NodeId>,
    area_nodes:     BTreeMap<AreaId, Vec<NodeId>>,
}

impl StreetGraph {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_crossing.len()
    }

    pub fn segment_count(&self) -> usize {
        self.seg_from.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_crossing.is_empty()
    }

    #[inline]
    pub fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// `(neighbour, segment)` pairs of every segment incident to `node`.
    ///
    /// A contiguous index range; no heap allocation.
    #[inline]
    pub fn neighbours(&self, node: NodeId) -> impl Iterator<Item = (NodeId, SegmentId)> + '_ {
        let start = self.node_adj_start[node.index()] as usize;
        let end   = self.node_adj_start[node.index() + 1] as usize;
        self.adj_node[start..end]
            .iter()
            .copied()
            .zip(self.adj_segment[start..end].iter().copied())
    }

    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        let start = self.node_adj_start[node.index()] as usize;
        let end   = self.node_adj_start[node.index() + 1] as usize;
        end - start
    }

    // ── Node queries ──────────────────────────────────────────────────────

    /// The area a retained crossing belongs to.
    #[inline]
    pub fn node_area(&self, node: NodeId) -> AreaId {
        self.node_area[node.index()]
    }

    #[inline]
    pub fn crossing(&self, node: NodeId) -> CrossingId {
        self.node_crossing[node.index()]
    }

    /// Look up a node by its external crossing id.  Crossings dropped during
    /// construction (unresolved or pruned) are not found.
    pub fn node_by_crossing(&self, crossing: CrossingId) -> NetworkResult<NodeId> {
        self.crossing_index
            .get(&crossing)
            .copied()
            .ok_or(NetworkError::CrossingNotFound(crossing))
    }

    // ── Area queries ──────────────────────────────────────────────────────

    /// Every area that owns at least one retained crossing, ascending.
    pub fn all_areas(&self) -> BTreeSet<AreaId> {
        self.area_nodes.keys().copied().collect()
    }

    /// Retained crossings of `area`, ascending by `NodeId`.  Empty if the
    /// area owns none.
    pub fn nodes_in_area(&self, area: AreaId) -> &[NodeId] {
        self.area_nodes.get(&area).map_or(&[], Vec::as_slice)
    }

    // ── Segment queries ───────────────────────────────────────────────────

    /// Weight of `segment` under `metric`.
    #[inline]
    pub fn edge_weight(&self, segment: SegmentId, metric: Metric) -> f64 {
        match metric {
            Metric::Distance   => self.seg_length_m[segment.index()],
            Metric::TravelTime => self.seg_travel_secs[segment.index()],
        }
    }

    /// All stored attributes of `segment`.
    pub fn segment(&self, segment: SegmentId) -> Segment {
        let i = segment.index();
        Segment {
            from:        self.seg_from[i],
            to:          self.seg_to[i],
            length_m:    self.seg_length_m[i],
            travel_secs: self.seg_travel_secs[i],
            area_from:   self.seg_area_from[i],
            area_to:     self.seg_area_to[i],
        }
    }

    /// `(area_from, area_to)` of `segment`.
    #[inline]
    pub fn segment_areas(&self, segment: SegmentId) -> (AreaId, AreaId) {
        (self.seg_area_from[segment.index()], self.seg_area_to[segment.index()])
    }

    // ── Assembly ──────────────────────────────────────────────────────────

    /// Lay out `nodes` and `segments` into CSR form and build the lookups.
    pub(crate) fn assemble(nodes: Vec<NodeRow>, segments: Vec<SegmentRow>) -> Self {
        let node_count = nodes.len();
        let arc_count  = segments.len() * 2;

        // Build CSR row pointer from per-node degree.
        let mut node_adj_start = vec![0u32; node_count + 1];
        for s in &segments {
            node_adj_start[s.from + 1] += 1;
            node_adj_start[s.to + 1] += 1;
        }
        for i in 1..=node_count {
            node_adj_start[i] += node_adj_start[i - 1];
        }
        debug_assert_eq!(node_adj_start[node_count] as usize, arc_count);

        // Scatter both arcs of every segment into their rows.
        let mut cursor: Vec<u32> = node_adj_start[..node_count].to_vec();
        let mut adj_node    = vec![NodeId::INVALID; arc_count];
        let mut adj_segment = vec![SegmentId::INVALID; arc_count];
        for (i, s) in segments.iter().enumerate() {
            let segment = SegmentId(i as u32);
            for (here, there) in [(s.from, s.to), (s.to, s.from)] {
                let slot = cursor[here] as usize;
                adj_node[slot]    = NodeId(there as u32);
                adj_segment[slot] = segment;
                cursor[here] += 1;
            }
        }

        let mut crossing_index = HashMap::with_capacity(node_count);
        let mut area_nodes: BTreeMap<AreaId, Vec<NodeId>> = BTreeMap::new();
        for (i, n) in nodes.iter().enumerate() {
            let id = NodeId(i as u32);
            crossing_index.insert(n.crossing, id);
            area_nodes.entry(n.area).or_default().push(id);
        }

        StreetGraph {
            node_crossing:   nodes.iter().map(|n| n.crossing).collect(),
            node_pos:        nodes.iter().map(|n| n.pos).collect(),
            node_area:       nodes.iter().map(|n| n.area).collect(),
            node_adj_start,
            adj_node,
            adj_segment,
            seg_from:        segments.iter().map(|s| NodeId(s.from as u32)).collect(),
            seg_to:          segments.iter().map(|s| NodeId(s.to as u32)).collect(),
            seg_length_m:    segments.iter().map(|s| s.length_m).collect(),
            seg_travel_secs: segments.iter().map(|s| s.travel_secs).collect(),
            seg_area_from:   segments.iter().map(|s| s.area_from).collect(),
            seg_area_to:     segments.iter().map(|s| s.area_to).collect(),
            crossing_index,
            area_nodes,
        }
    }

    /// Copy out the rows of every node with `keep[n] == true` and every
    /// segment whose endpoints are both kept, renumbered densely.
    pub(crate) fn retained_rows(&self, keep: &[bool]) -> (Vec<NodeRow>, Vec<SegmentRow>) {
        let mut remap = vec![usize::MAX; self.node_count()];
        let mut nodes = Vec::new();
        for (i, _) in keep.iter().enumerate().filter(|(_, k)| **k) {
            remap[i] = nodes.len();
            nodes.push(NodeRow {
                crossing: self.node_crossing[i],
                pos:      self.node_pos[i],
                area:     self.node_area[i],
            });
        }

        let segments = (0..self.segment_count())
            .filter_map(|i| {
                let from = remap[self.seg_from[i].index()];
                let to   = remap[self.seg_to[i].index()];
                (from != usize::MAX && to != usize::MAX).then(|| SegmentRow {
                    from,
                    to,
                    length_m:    self.seg_length_m[i],
                    travel_secs: self.seg_travel_secs[i],
                    area_from:   self.seg_area_from[i],
                    area_to:     self.seg_area_to[i],
                })
            })
            .collect();

        (nodes, segments)
    }
}

// ── BuildReport ───────────────────────────────────────────────────────────────

/// What construction discarded, and why.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Segments whose two ends are the same crossing.
    pub self_loops: usize,
    /// Segments with a non-positive or non-finite length or travel time.
    pub invalid_segments: usize,
    /// Segments that repeated an already-seen crossing pair (last one wins).
    pub parallel_segments: usize,
    /// Crossings not referenced by any segment.
    pub isolated_crossings: usize,
    /// Crossings outside every polygon that took a neighbour's area.
    pub filled: usize,
    /// Crossings that stayed unresolved and were dropped with their segments.
    pub unresolved: Vec<CrossingId>,
    /// Segments dropped because an endpoint was unresolved.
    pub unresolved_segments: usize,
    /// Outcome of the largest-component pruning pass.
    pub pruned: PruneStats,
}

impl BuildReport {
    /// The unresolved crossings as [`NetworkError::Unresolved`] values, for
    /// callers that log or collect per-crossing issues.
    pub fn unresolved_errors(&self) -> impl Iterator<Item = NetworkError> + '_ {
        self.unresolved.iter().map(|&c| NetworkError::Unresolved(c))
    }
}

// ── StreetGraphBuilder ────────────────────────────────────────────────────────

/// Construct a [`StreetGraph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use ta_areas::AreaCatalog;
/// use ta_core::{AreaId, CrossingId, GeoPoint};
/// use ta_network::StreetGraphBuilder;
///
/// let square = vec![
///     GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0),
///     GeoPoint::new(1.0, 1.0), GeoPoint::new(0.0, 1.0),
/// ];
/// let catalog = AreaCatalog::from_rings([(AreaId(1), square)]).unwrap();
///
/// let mut b = StreetGraphBuilder::new();
/// b.add_crossing(CrossingId(10), GeoPoint::new(0.2, 0.5));
/// b.add_crossing(CrossingId(11), GeoPoint::new(0.8, 0.5));
/// b.add_segment(CrossingId(10), CrossingId(11), 120.0, 14.4);
/// let graph = b.build(&catalog).unwrap();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.segment_count(), 1);
/// ```
#[derive(Default)]
pub struct StreetGraphBuilder {
    crossings: Vec<(CrossingId, GeoPoint)>,
    segments:  Vec<RawSegment>,
}

struct RawSegment {
    from:        CrossingId,
    to:          CrossingId,
    length_m:    f64,
    travel_secs: f64,
}

/// A validated segment between two crossing-table positions.
struct Link {
    from:        usize,
    to:          usize,
    length_m:    f64,
    travel_secs: f64,
}

impl StreetGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of crossings and segments.
    pub fn with_capacity(crossings: usize, segments: usize) -> Self {
        Self {
            crossings: Vec::with_capacity(crossings),
            segments:  Vec::with_capacity(segments),
        }
    }

    pub fn add_crossing(&mut self, id: CrossingId, pos: GeoPoint) {
        self.crossings.push((id, pos));
    }

    /// Add an undirected segment with explicit length (m) and travel time (s).
    pub fn add_segment(&mut self, from: CrossingId, to: CrossingId, length_m: f64, travel_secs: f64) {
        self.segments.push(RawSegment { from, to, length_m, travel_secs });
    }

    /// Convenience: add a segment whose travel time follows from the street
    /// category's speed limit.
    pub fn add_street(&mut self, from: CrossingId, to: CrossingId, length_m: f64, category: StreetCategory) {
        self.add_segment(from, to, length_m, category.travel_secs(length_m));
    }

    pub fn crossing_count(&self) -> usize { self.crossings.len() }
    pub fn segment_count(&self) -> usize { self.segments.len() }

    /// Consume the builder and produce a pruned, area-tagged [`StreetGraph`].
    pub fn build(self, catalog: &AreaCatalog) -> NetworkResult<StreetGraph> {
        self.build_with_report(catalog).map(|(graph, _)| graph)
    }

    /// Like [`build`](Self::build) but also returns what was discarded.
    pub fn build_with_report(self, catalog: &AreaCatalog) -> NetworkResult<(StreetGraph, BuildReport)> {
        let mut report = BuildReport::default();
        let crossing_count = self.crossings.len();

        // ── Index crossings ───────────────────────────────────────────────
        let mut index: HashMap<CrossingId, usize> = HashMap::with_capacity(crossing_count);
        for (i, &(id, _)) in self.crossings.iter().enumerate() {
            if index.insert(id, i).is_some() {
                return Err(NetworkError::DuplicateCrossing(id));
            }
        }

        // ── Validate and deduplicate segments ─────────────────────────────
        let mut links: Vec<Link> = Vec::with_capacity(self.segments.len());
        let mut by_pair: HashMap<(usize, usize), usize> = HashMap::with_capacity(self.segments.len());
        for (i, raw) in self.segments.iter().enumerate() {
            let lookup = |crossing: CrossingId| {
                index
                    .get(&crossing)
                    .copied()
                    .ok_or(NetworkError::UnknownCrossing { segment: i, crossing })
            };
            let from = lookup(raw.from)?;
            let to   = lookup(raw.to)?;

            if from == to {
                report.self_loops += 1;
                continue;
            }
            let positive = |v: f64| v.is_finite() && v > 0.0;
            if !positive(raw.length_m) || !positive(raw.travel_secs) {
                report.invalid_segments += 1;
                continue;
            }

            let link = Link { from, to, length_m: raw.length_m, travel_secs: raw.travel_secs };
            match by_pair.entry((from.min(to), from.max(to))) {
                Entry::Occupied(slot) => {
                    links[*slot.get()] = link;
                    report.parallel_segments += 1;
                }
                Entry::Vacant(slot) => {
                    slot.insert(links.len());
                    links.push(link);
                }
            }
        }
        if report.self_loops + report.invalid_segments > 0 {
            log::warn!(
                "skipped {} self-loop and {} non-positive segments",
                report.self_loops,
                report.invalid_segments
            );
        }

        // ── Only crossings with at least one segment belong to the network ──
        let mut referenced = vec![false; crossing_count];
        for l in &links {
            referenced[l.from] = true;
            referenced[l.to] = true;
        }
        report.isolated_crossings = referenced.iter().filter(|r| !**r).count();

        // ── Area resolution, neighbour fill, segment tags ─────────────────
        let positions: Vec<GeoPoint> = self.crossings.iter().map(|&(_, pos)| pos).collect();
        let pairs: Vec<(usize, usize)> = links.iter().map(|l| (l.from, l.to)).collect();

        let mut areas = tagging::resolve_areas(&positions, &referenced, catalog);
        report.filled = tagging::fill_from_neighbours(&mut areas, &pairs);
        let tags = tagging::tag_segments(&areas, &pairs);

        // ── Drop crossings that are still unresolved ──────────────────────
        let mut remap = vec![usize::MAX; crossing_count];
        let mut nodes: Vec<NodeRow> = Vec::with_capacity(crossing_count);
        for (i, &(crossing, pos)) in self.crossings.iter().enumerate() {
            if !referenced[i] {
                continue;
            }
            match areas[i] {
                Some(area) => {
                    remap[i] = nodes.len();
                    nodes.push(NodeRow { crossing, pos, area });
                }
                None => report.unresolved.push(crossing),
            }
        }

        let segments: Vec<SegmentRow> = links
            .iter()
            .zip(&tags)
            .filter_map(|(l, &(area_from, area_to))| {
                let (from, to) = (remap[l.from], remap[l.to]);
                if from == usize::MAX || to == usize::MAX {
                    return None;
                }
                Some(SegmentRow {
                    from,
                    to,
                    length_m:    l.length_m,
                    travel_secs: l.travel_secs,
                    area_from:   area_from?,
                    area_to:     area_to?,
                })
            })
            .collect();
        report.unresolved_segments = links.len() - segments.len();

        if !report.unresolved.is_empty() {
            log::warn!(
                "{} crossings lie outside every area and have no assigned neighbour; \
                 dropped with {} segments",
                report.unresolved.len(),
                report.unresolved_segments
            );
            for issue in report.unresolved_errors() {
                log::debug!("{issue}");
            }
        }
        if nodes.is_empty() {
            return Err(NetworkError::EmptyNetwork);
        }

        // ── Lay out and prune ─────────────────────────────────────────────
        let mut graph = StreetGraph::assemble(nodes, segments);
        report.pruned = graph.prune_disconnected();

        log::info!(
            "street graph built: {} crossings, {} segments, {} areas ({} filled from neighbours)",
            graph.node_count(),
            graph.segment_count(),
            graph.area_nodes.len(),
            report.filled
        );
        Ok((graph, report))
    }
}
