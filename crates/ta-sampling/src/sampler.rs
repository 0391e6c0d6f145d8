//! Uniform crossing draw within one area.

use ta_core::{AreaId, NodeId, SampleRng};
use ta_network::StreetGraph;

use crate::{SamplingError, SamplingResult};

/// Draws crossings uniformly at random from the retained nodes of an area.
#[derive(Copy, Clone)]
pub struct AreaNodeSampler<'g> {
    graph: &'g StreetGraph,
}

impl<'g> AreaNodeSampler<'g> {
    pub fn new(graph: &'g StreetGraph) -> Self {
        Self { graph }
    }

    /// One crossing of `area`, chosen with `rng`.
    ///
    /// Fails with [`SamplingError::EmptyArea`] if the area owns no crossing
    /// in the pruned graph.
    pub fn sample(&self, area: AreaId, rng: &mut SampleRng) -> SamplingResult<NodeId> {
        rng.choose(self.graph.nodes_in_area(area))
            .copied()
            .ok_or(SamplingError::EmptyArea(area))
    }
}
