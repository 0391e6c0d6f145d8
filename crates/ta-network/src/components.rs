//! Connected components and largest-component pruning.

use ta_core::NodeId;

use crate::network::StreetGraph;

/// Outcome of [`StreetGraph::prune_disconnected`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PruneStats {
    /// Number of components found before pruning.
    pub components: usize,
    pub nodes_removed: usize,
    pub segments_removed: usize,
}

impl StreetGraph {
    /// Label every node with its component index.  Labels are assigned in
    /// order of each component's lowest `NodeId`, starting at 0.
    pub fn component_labels(&self) -> Vec<u32> {
        let n = self.node_count();
        let mut label = vec![u32::MAX; n];
        let mut stack: Vec<NodeId> = Vec::new();
        let mut next = 0u32;

        for root in 0..n {
            if label[root] != u32::MAX {
                continue;
            }
            label[root] = next;
            stack.push(NodeId(root as u32));
            while let Some(node) = stack.pop() {
                for (nb, _) in self.neighbours(node) {
                    if label[nb.index()] == u32::MAX {
                        label[nb.index()] = next;
                        stack.push(nb);
                    }
                }
            }
            next += 1;
        }
        label
    }

    pub fn component_count(&self) -> usize {
        self.component_labels().into_iter().max().map_or(0, |m| m as usize + 1)
    }

    /// Keep only the component with the most nodes; ties go to the
    /// component containing the lowest `NodeId`.  A connected graph is left
    /// untouched, so calling this twice is the same as calling it once.
    pub fn prune_disconnected(&mut self) -> PruneStats {
        let labels = self.component_labels();
        let components = labels.iter().max().map_or(0, |&m| m as usize + 1);
        if components <= 1 {
            return PruneStats { components, ..PruneStats::default() };
        }

        let mut sizes = vec![0usize; components];
        for &l in &labels {
            sizes[l as usize] += 1;
        }
        // First maximum wins, and labels follow lowest-NodeId order.
        let mut largest = 0;
        for (l, &size) in sizes.iter().enumerate() {
            if size > sizes[largest] {
                largest = l;
            }
        }

        let keep: Vec<bool> = labels.iter().map(|&l| l as usize == largest).collect();
        let (nodes, segments) = self.retained_rows(&keep);
        let stats = PruneStats {
            components,
            nodes_removed:    self.node_count() - nodes.len(),
            segments_removed: self.segment_count() - segments.len(),
        };
        *self = StreetGraph::assemble(nodes, segments);

        log::info!(
            "pruned {} of {} components: removed {} crossings and {} segments",
            components - 1,
            components,
            stats.nodes_removed,
            stats.segments_removed
        );
        stats
    }
}
