//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The samplers call routing via the [`Router`] trait, so callers can swap in
//! a bidirectional search or a contraction hierarchy without touching the
//! attribution code.  The default [`DijkstraRouter`] is a plain single-pair
//! Dijkstra with early exit.
//!
//! # Cost units
//!
//! Costs are `f64` in the unit of the chosen [`Metric`]: metres for
//! `Distance`, seconds for `TravelTime`.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ta_core::{Metric, NodeId, SegmentId};

use crate::network::StreetGraph;
use crate::{NetworkError, NetworkResult};

// ── Path ──────────────────────────────────────────────────────────────────────

/// A shortest path: the visited nodes in order and the segments between them.
///
/// `segments.len() == nodes.len() - 1`; `segments[i]` joins `nodes[i]` and
/// `nodes[i + 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub nodes:    Vec<NodeId>,
    pub segments: Vec<SegmentId>,
}

impl Path {
    pub fn source(&self) -> NodeId {
        self.nodes[0]
    }

    pub fn destination(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    /// Sum of segment weights under `metric`, accumulated in path order.
    pub fn cost(&self, graph: &StreetGraph, metric: Metric) -> f64 {
        self.segments.iter().map(|&s| graph.edge_weight(s, metric)).sum()
    }

    /// `true` if the source and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.segments.is_empty()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one router can be shared across
/// Rayon workers during a batch run.
pub trait Router: Send + Sync {
    /// Compute a shortest path from `from` to `to` under `metric`.
    ///
    /// `from == to` yields a single-node path of cost 0.  Unreachable
    /// targets yield [`NetworkError::NoPath`].
    fn route(
        &self,
        graph: &StreetGraph,
        from: NodeId,
        to: NodeId,
        metric: Metric,
    ) -> NetworkResult<Path>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the CSR street graph.
///
/// Ties between equal-cost frontier entries are broken by the lower
/// `NodeId`, so the returned path is deterministic for a given graph.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(
        &self,
        graph: &StreetGraph,
        from: NodeId,
        to: NodeId,
        metric: Metric,
    ) -> NetworkResult<Path> {
        dijkstra(graph, from, to, metric)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Heap entry, ordered so `BinaryHeap` pops the smallest cost first and
/// then the smallest node.
#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node: NodeId,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn dijkstra(graph: &StreetGraph, from: NodeId, to: NodeId, metric: Metric) -> NetworkResult<Path> {
    for node in [from, to] {
        if !graph.contains_node(node) {
            return Err(NetworkError::NodeNotFound(node));
        }
    }
    if from == to {
        return Ok(Path { nodes: vec![from], segments: vec![] });
    }

    let n = graph.node_count();
    // dist[v] = best known cost to reach v.
    let mut dist = vec![f64::INFINITY; n];
    // prev_segment[v] = segment that reached v; INVALID for unreached nodes.
    let mut prev_node    = vec![NodeId::INVALID; n];
    let mut prev_segment = vec![SegmentId::INVALID; n];

    dist[from.index()] = 0.0;
    let mut heap = BinaryHeap::new();
    heap.push(State { cost: 0.0, node: from });

    while let Some(State { cost, node }) = heap.pop() {
        if node == to {
            return Ok(reconstruct(&prev_node, &prev_segment, from, to));
        }

        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        for (neighbour, segment) in graph.neighbours(node) {
            let new_cost = cost + graph.edge_weight(segment, metric);
            if new_cost < dist[neighbour.index()] {
                dist[neighbour.index()] = new_cost;
                prev_node[neighbour.index()] = node;
                prev_segment[neighbour.index()] = segment;
                heap.push(State { cost: new_cost, node: neighbour });
            }
        }
    }

    Err(NetworkError::NoPath { from, to })
}

fn reconstruct(prev_node: &[NodeId], prev_segment: &[SegmentId], from: NodeId, to: NodeId) -> Path {
    let mut nodes = vec![to];
    let mut segments = Vec::new();
    let mut cur = to;
    while cur != from {
        segments.push(prev_segment[cur.index()]);
        cur = prev_node[cur.index()];
        nodes.push(cur);
    }
    nodes.reverse();
    segments.reverse();
    Path { nodes, segments }
}
