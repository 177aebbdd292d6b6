//! User-proposed flow values keyed by edge endpoints.

use std::collections::BTreeMap;

use fl_core::{Flow, NodeId};
use fl_graph::Graph;

/// Flow per directed edge `(from, to)`.
///
/// Untrusted: values are not checked on insert. Edges without an entry carry
/// zero flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowAssignment {
    flows: BTreeMap<(NodeId, NodeId), Flow>,
}

impl FlowAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(from, to, flow)` triples; a repeated pair keeps the last value.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u32, u32, Flow)>,
    {
        let mut assignment = Self::new();
        for (from, to, flow) in pairs {
            assignment.insert(from, to, flow);
        }
        assignment
    }

    /// Take per-edge flows (indexed by edge id, as the solver reports them).
    pub fn from_edge_flows(graph: &Graph, edge_flows: &[Flow]) -> Self {
        let flows = graph
            .edges()
            .iter()
            .zip(edge_flows)
            .map(|(edge, &flow)| ((edge.from, edge.to), flow))
            .collect();
        Self { flows }
    }

    /// Set the flow on `from -> to`, returning the previous value.
    pub fn insert(&mut self, from: u32, to: u32, flow: Flow) -> Option<Flow> {
        self.flows
            .insert((NodeId::from_index(from), NodeId::from_index(to)), flow)
    }

    /// Flow on `from -> to`, zero when absent.
    pub fn get(&self, from: NodeId, to: NodeId) -> Flow {
        self.flows.get(&(from, to)).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Entries in `(from, to)` order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, NodeId, Flow)> + '_ {
        self.flows.iter().map(|(&(from, to), &flow)| (from, to, flow))
    }
}
