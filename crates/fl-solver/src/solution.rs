//! Solver output types.

use fl_core::{EdgeId, Flow, NodeId};

/// One augmentation step: the path found by BFS and the amount pushed along it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentingPath {
    /// Nodes from source to sink. Consecutive nodes may be joined by a
    /// reverse arc (cancelling flow on the edge `next -> prev`).
    pub nodes: Vec<NodeId>,
    pub bottleneck: Flow,
}

/// Source-side node set of a minimum cut and the edges crossing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinCut {
    pub source_side: Vec<NodeId>,
    /// Edges from the source side to the sink side, in edge-list order.
    pub edges: Vec<EdgeId>,
    pub capacity: Flow,
}

impl MinCut {
    pub fn contains(&self, node: NodeId) -> bool {
        self.source_side.binary_search(&node).is_ok()
    }
}

/// A maximum flow and the trace that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxFlow {
    pub value: Flow,
    /// Flow on each edge, indexed by `EdgeId`.
    pub edge_flows: Vec<Flow>,
    pub augmenting_paths: Vec<AugmentingPath>,
    pub min_cut: MinCut,
}

impl MaxFlow {
    /// Flow on one edge (zero for an unknown id).
    pub fn flow_on(&self, edge: EdgeId) -> Flow {
        self.edge_flows.get(edge.as_usize()).copied().unwrap_or(0)
    }

    /// Number of augmentations performed.
    pub fn augmentations(&self) -> usize {
        self.augmenting_paths.len()
    }
}
