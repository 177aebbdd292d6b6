//! Wire definitions -> validated core values.

use fl_graph::{Graph, GraphBuilder};
use fl_project::{FlowMapDef, GraphDef, parse_flow_key};
use fl_verify::FlowAssignment;

use crate::error::{AppError, AppResult};

/// Size limits for graphs arriving from untrusted input.
///
/// Adjacency storage is proportional to the node count, which a request can
/// set freely; edges are bounded by the request body itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphLimits {
    pub max_nodes: usize,
}

impl Default for GraphLimits {
    fn default() -> Self {
        Self { max_nodes: 100_000 }
    }
}

/// Build a validated graph from its wire form under the default limits.
pub fn compile_graph(def: &GraphDef) -> AppResult<Graph> {
    compile_graph_with_limits(def, GraphLimits::default())
}

/// Build a validated graph from its wire form.
///
/// Negative or oversized integers are rejected here; everything else is
/// checked by the graph builder.
pub fn compile_graph_with_limits(def: &GraphDef, limits: GraphLimits) -> AppResult<Graph> {
    let nodes = usize::try_from(def.nodes)
        .map_err(|_| AppError::InvalidGraph(format!("node count {} is negative", def.nodes)))?;
    if nodes > limits.max_nodes {
        return Err(AppError::InvalidGraph(format!(
            "node count {nodes} exceeds the limit of {}",
            limits.max_nodes
        )));
    }
    let source = node_index(def.source, "source")?;
    let sink = node_index(def.sink, "sink")?;

    let mut builder = GraphBuilder::new(nodes, source, sink);
    for edge in &def.edges {
        builder.add_edge(
            node_index(edge.from, "edge start")?,
            node_index(edge.to, "edge end")?,
            edge.capacity,
        );
    }

    Ok(builder.build()?)
}

/// Parse `"from-to"` keys into a flow assignment.
pub fn compile_flows(flows: &FlowMapDef) -> AppResult<FlowAssignment> {
    let mut assignment = FlowAssignment::new();
    for (key, &value) in flows {
        let (from, to) = parse_flow_key(key)?;
        assignment.insert(from, to, value);
    }
    Ok(assignment)
}

fn node_index(value: i64, what: &str) -> AppResult<u32> {
    u32::try_from(value)
        .map_err(|_| AppError::InvalidGraph(format!("{what} {value} is not a valid node id")))
}
