//! Graph-specific error types.

use fl_core::{EdgeId, Flow, NodeId};
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Reasons a graph definition is rejected.
///
/// Every variant is a malformed input; nothing here is repaired silently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The graph has no nodes.
    #[error("Graph must have at least one node")]
    Empty,

    /// Source or sink is not a node of the graph.
    #[error("{role} {node} is out of range (graph has {node_count} nodes)")]
    TerminalOutOfRange {
        role: &'static str,
        node: NodeId,
        node_count: usize,
    },

    /// More nodes than a `NodeId` can address.
    #[error("Graph has {node_count} nodes, more than node ids can address")]
    TooManyNodes { node_count: usize },

    /// More edges than an `EdgeId` can address.
    #[error("Graph has {edge_count} edges, more than edge ids can address")]
    TooManyEdges { edge_count: usize },

    /// Source and sink are the same node.
    #[error("Source and sink are both node {node}")]
    SourceIsSink { node: NodeId },

    /// An edge references a node that doesn't exist.
    #[error("Edge {edge} references node {node} (graph has {node_count} nodes)")]
    EdgeEndpointOutOfRange {
        edge: EdgeId,
        node: NodeId,
        node_count: usize,
    },

    /// An edge starts and ends at the same node.
    #[error("Edge {edge} is a self loop on node {node}")]
    SelfLoop { edge: EdgeId, node: NodeId },

    /// An edge has zero or negative capacity.
    #[error("Edge {edge} ({from}-{to}) has non-positive capacity {capacity}")]
    NonPositiveCapacity {
        edge: EdgeId,
        from: NodeId,
        to: NodeId,
        capacity: Flow,
    },

    /// Two edges share the same ordered endpoint pair.
    #[error("Edge {edge} duplicates edge {first} ({from}-{to})")]
    DuplicateEdge {
        edge: EdgeId,
        first: EdgeId,
        from: NodeId,
        to: NodeId,
    },

    /// The capacities add up to more than the flow type can hold.
    #[error("Total edge capacity overflows the flow type")]
    CapacityOverflow,
}
