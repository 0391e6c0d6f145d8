//! Median-of-samples route selection.
//!
//! Travel cost between two statistical areas depends on which crossings are
//! picked inside them.  Instead of routing all pairs, [`PathSampler`] draws a
//! handful of `(start, end)` pairs, routes each, and keeps the one whose cost
//! ranks in the middle.

use std::cmp::Ordering;

use ta_core::{AreaId, Metric, NodeId, SampleRng};
use ta_network::{DijkstraRouter, Path, Router, StreetGraph};

use crate::sampler::AreaNodeSampler;
use crate::{SamplingError, SamplingResult};

/// One sampled `(start, end)` pair and its shortest-path cost.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate {
    pub start: NodeId,
    pub end:   NodeId,
    pub cost:  f64,
}

/// The selected route together with every candidate that was considered.
#[derive(Clone, Debug)]
pub struct MedianPath {
    pub path: Path,
    /// Cost of `path` under the query metric.
    pub cost: f64,
    /// All candidates, sorted ascending by cost.
    pub candidates: Vec<Candidate>,
}

/// Samples candidate routes between two areas over a fixed graph.
///
/// Generic over the [`Router`] so the search algorithm can be swapped; the
/// default is [`DijkstraRouter`].
pub struct PathSampler<'g, R: Router = DijkstraRouter> {
    graph:  &'g StreetGraph,
    router: R,
}

impl<'g> PathSampler<'g, DijkstraRouter> {
    pub fn new(graph: &'g StreetGraph) -> Self {
        Self { graph, router: DijkstraRouter }
    }
}

impl<'g, R: Router> PathSampler<'g, R> {
    pub fn with_router(graph: &'g StreetGraph, router: R) -> Self {
        Self { graph, router }
    }

    pub fn graph(&self) -> &'g StreetGraph {
        self.graph
    }

    /// Draw `sample_size` crossing pairs, route each, and return the path at
    /// rank `sample_size / 2` of the cost-sorted candidates (the lower median
    /// for even sizes).
    ///
    /// Candidates with equal cost are ordered by the external ids of their
    /// start and end crossings.  Any failed draw or route fails the whole
    /// query.
    pub fn median_path(
        &self,
        from_area: AreaId,
        to_area: AreaId,
        metric: Metric,
        sample_size: usize,
        rng: &mut SampleRng,
    ) -> SamplingResult<MedianPath> {
        if sample_size == 0 {
            return Err(SamplingError::InvalidSampleSize(sample_size));
        }

        let sampler = AreaNodeSampler::new(self.graph);
        let mut candidates = Vec::with_capacity(sample_size);
        for _ in 0..sample_size {
            let start = sampler.sample(from_area, rng)?;
            let end = sampler.sample(to_area, rng)?;
            let path = self.router.route(self.graph, start, end, metric)?;
            candidates.push(Candidate { start, end, cost: path.cost(self.graph, metric) });
        }
        candidates.sort_by(|a, b| self.rank(a, b));

        let chosen = candidates[sample_size / 2];
        let path = self.router.route(self.graph, chosen.start, chosen.end, metric)?;
        log::debug!(
            "median {metric} path {from_area} -> {to_area}: cost {:.3} over {} segments",
            chosen.cost,
            path.segments.len()
        );

        Ok(MedianPath { path, cost: chosen.cost, candidates })
    }

    fn rank(&self, a: &Candidate, b: &Candidate) -> Ordering {
        let g = self.graph;
        a.cost
            .total_cmp(&b.cost)
            .then_with(|| g.crossing(a.start).cmp(&g.crossing(b.start)))
            .then_with(|| g.crossing(a.end).cmp(&g.crossing(b.end)))
    }
}
