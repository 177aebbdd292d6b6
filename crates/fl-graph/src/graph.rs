//! Core graph data structures.

use std::collections::HashMap;

use fl_core::{EdgeId, Flow, NodeId};

use crate::builder::GraphBuilder;
use crate::error::GraphResult;

/// A directed arc with a positive integer capacity.
///
/// `(u, v)` and `(v, u)` are independent edges, each with its own capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    pub capacity: Flow,
}

/// A validated, immutable flow network.
///
/// The graph stores:
/// - The edge list in input order (an edge's id is its position).
/// - Compact adjacency: for each node, its outgoing and incoming edge ids, in
///   edge-list order.
/// - A lookup from `(from, to)` to the edge id.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) node_count: usize,
    pub(crate) source: NodeId,
    pub(crate) sink: NodeId,
    pub(crate) edges: Vec<Edge>,

    /// Node i's outgoing edges are `out_edges[out_offsets[i]..out_offsets[i + 1]]`.
    pub(crate) out_offsets: Vec<usize>,
    pub(crate) out_edges: Vec<EdgeId>,

    /// Same layout as the outgoing lists, keyed by head node.
    pub(crate) in_offsets: Vec<usize>,
    pub(crate) in_edges: Vec<EdgeId>,

    pub(crate) by_endpoints: HashMap<(NodeId, NodeId), EdgeId>,
}

impl Graph {
    /// Validate and index a graph from raw `(from, to, capacity)` triples.
    pub fn new<I>(node_count: usize, edges: I, source: u32, sink: u32) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (u32, u32, Flow)>,
    {
        let mut builder = GraphBuilder::new(node_count, source, sink);
        for (from, to, capacity) in edges {
            builder.add_edge(from, to, capacity);
        }
        builder.build()
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn sink(&self) -> NodeId {
        self.sink
    }

    /// All node ids, in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_count as u32).map(NodeId::from_index)
    }

    /// Whether `node` is the source or the sink.
    pub fn is_terminal(&self, node: NodeId) -> bool {
        node == self.source || node == self.sink
    }

    /// All edges, in input order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get an edge by id (returns None if out of bounds).
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.as_usize())
    }

    /// Find the edge `from -> to`, if the graph has one.
    pub fn find_edge(&self, from: NodeId, to: NodeId) -> Option<&Edge> {
        self.by_endpoints
            .get(&(from, to))
            .and_then(|&id| self.edge(id))
    }

    /// Edges leaving `node`, in edge-list order.
    pub fn outgoing(&self, node: NodeId) -> &[EdgeId] {
        Self::slice(&self.out_offsets, &self.out_edges, node)
    }

    /// Edges entering `node`, in edge-list order.
    pub fn incoming(&self, node: NodeId) -> &[EdgeId] {
        Self::slice(&self.in_offsets, &self.in_edges, node)
    }

    /// Total capacity of the edges leaving the source (an upper bound on any flow).
    pub fn source_capacity(&self) -> Flow {
        self.outgoing(self.source)
            .iter()
            .map(|&id| self.edges[id.as_usize()].capacity)
            .sum()
    }

    /// Total capacity of the edges entering the sink (an upper bound on any flow).
    pub fn sink_capacity(&self) -> Flow {
        self.incoming(self.sink)
            .iter()
            .map(|&id| self.edges[id.as_usize()].capacity)
            .sum()
    }

    fn slice<'a>(offsets: &[usize], flat: &'a [EdgeId], node: NodeId) -> &'a [EdgeId] {
        let idx = node.as_usize();
        if idx + 1 >= offsets.len() {
            return &[];
        }
        &flat[offsets[idx]..offsets[idx + 1]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Graph {
        Graph::new(4, [(0, 1, 3), (0, 2, 2), (1, 3, 2), (2, 3, 3)], 0, 3).unwrap()
    }

    #[test]
    fn terminals_and_nodes() {
        let graph = diamond();
        assert_eq!(graph.source(), NodeId::from_index(0));
        assert_eq!(graph.sink(), NodeId::from_index(3));
        assert!(graph.is_terminal(NodeId::from_index(3)));
        assert!(!graph.is_terminal(NodeId::from_index(1)));
        assert_eq!(graph.nodes().count(), 4);
    }

    #[test]
    fn find_edge_is_directed() {
        let graph = diamond();
        let edge = graph
            .find_edge(NodeId::from_index(1), NodeId::from_index(3))
            .unwrap();
        assert_eq!(edge.id, EdgeId::from_index(2));
        assert_eq!(edge.capacity, 2);
        assert!(graph
            .find_edge(NodeId::from_index(3), NodeId::from_index(1))
            .is_none());
    }

    #[test]
    fn out_of_range_node_has_no_adjacency() {
        let graph = diamond();
        assert!(graph.outgoing(NodeId::from_index(42)).is_empty());
        assert!(graph.incoming(NodeId::from_index(42)).is_empty());
    }

    #[test]
    fn cut_bounds() {
        let graph = diamond();
        assert_eq!(graph.source_capacity(), 5);
        assert_eq!(graph.sink_capacity(), 5);
    }
}
