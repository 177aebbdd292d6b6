//! Incremental graph builder.

use fl_core::{EdgeId, Flow, NodeId};

use crate::error::GraphResult;
use crate::graph::{Edge, Graph};
use crate::validate;

/// Builder for constructing a graph edge by edge.
///
/// Use `add_edge` to build up the edge list, then call `build()` to validate
/// and freeze it into an immutable `Graph`. Nothing is checked until `build()`.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    node_count: usize,
    source: NodeId,
    sink: NodeId,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Create a builder for a graph with `node_count` nodes and the given terminals.
    pub fn new(node_count: usize, source: u32, sink: u32) -> Self {
        Self {
            node_count,
            source: NodeId::from_index(source),
            sink: NodeId::from_index(sink),
            edges: Vec::new(),
        }
    }

    /// Append an edge and return the id it will have in the built graph.
    ///
    /// Past the `EdgeId` range the id saturates; `build()` then fails with
    /// `TooManyEdges`, so no such id ever reaches a `Graph`.
    pub fn add_edge(&mut self, from: u32, to: u32, capacity: Flow) -> EdgeId {
        let id = EdgeId::from_index(u32::try_from(self.edges.len()).unwrap_or(u32::MAX));
        self.edges.push(Edge {
            id,
            from: NodeId::from_index(from),
            to: NodeId::from_index(to),
            capacity,
        });
        id
    }

    /// Number of edges added so far.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Build and validate the graph, returning an immutable `Graph`.
    ///
    /// This performs validation and constructs compact adjacency lists.
    pub fn build(self) -> GraphResult<Graph> {
        validate::validate_terminals(self.node_count, self.source, self.sink)?;
        let by_endpoints = validate::validate_edges(self.node_count, &self.edges)?;

        let (out_offsets, out_edges) = Self::build_adjacency(self.node_count, &self.edges, |e| e.from);
        let (in_offsets, in_edges) = Self::build_adjacency(self.node_count, &self.edges, |e| e.to);

        Ok(Graph {
            node_count: self.node_count,
            source: self.source,
            sink: self.sink,
            edges: self.edges,
            out_offsets,
            out_edges,
            in_offsets,
            in_edges,
            by_endpoints,
        })
    }

    /// Bucket edge ids by the node `key` picks, keeping edge-list order inside
    /// each bucket. Returns (offsets, flat ids) with `offsets.len() == node_count + 1`.
    fn build_adjacency(
        node_count: usize,
        edges: &[Edge],
        key: impl Fn(&Edge) -> NodeId,
    ) -> (Vec<usize>, Vec<EdgeId>) {
        let mut counts = vec![0_usize; node_count];
        for edge in edges {
            counts[key(edge).as_usize()] += 1;
        }

        let mut offsets = Vec::with_capacity(node_count + 1);
        offsets.push(0);
        for count in &counts {
            let last = offsets[offsets.len() - 1];
            offsets.push(last + count);
        }

        let mut cursor = offsets[..node_count].to_vec();
        let mut flat = vec![EdgeId::from_index(0); edges.len()];
        for edge in edges {
            let slot = &mut cursor[key(edge).as_usize()];
            flat[*slot] = edge.id;
            *slot += 1;
        }

        (offsets, flat)
    }
}
