//! Graph validation logic.

use std::collections::HashMap;

use fl_core::{EdgeId, NodeId, checked_flow_sum};

use crate::error::{GraphError, GraphResult};
use crate::graph::Edge;

/// Validate the node count and the source/sink pair.
pub(crate) fn validate_terminals(node_count: usize, source: NodeId, sink: NodeId) -> GraphResult<()> {
    if node_count < 1 {
        return Err(GraphError::Empty);
    }
    if node_count > u32::MAX as usize {
        return Err(GraphError::TooManyNodes { node_count });
    }

    for (role, node) in [("Source", source), ("Sink", sink)] {
        if node.as_usize() >= node_count {
            return Err(GraphError::TerminalOutOfRange {
                role,
                node,
                node_count,
            });
        }
    }

    if source == sink {
        return Err(GraphError::SourceIsSink { node: source });
    }

    Ok(())
}

/// Edge ids are `u32`; `u32::MAX` is kept free for the builder's saturated id.
pub(crate) fn validate_edge_count(edge_count: usize) -> GraphResult<()> {
    if edge_count > u32::MAX as usize {
        return Err(GraphError::TooManyEdges { edge_count });
    }
    Ok(())
}

/// Validate every edge in list order and index them by endpoints.
///
/// The first offending edge decides the error.
pub(crate) fn validate_edges(
    node_count: usize,
    edges: &[Edge],
) -> GraphResult<HashMap<(NodeId, NodeId), EdgeId>> {
    validate_edge_count(edges.len())?;

    let mut by_endpoints = HashMap::with_capacity(edges.len());

    for edge in edges {
        for node in [edge.from, edge.to] {
            if node.as_usize() >= node_count {
                return Err(GraphError::EdgeEndpointOutOfRange {
                    edge: edge.id,
                    node,
                    node_count,
                });
            }
        }

        if edge.from == edge.to {
            return Err(GraphError::SelfLoop {
                edge: edge.id,
                node: edge.from,
            });
        }

        if edge.capacity <= 0 {
            return Err(GraphError::NonPositiveCapacity {
                edge: edge.id,
                from: edge.from,
                to: edge.to,
                capacity: edge.capacity,
            });
        }

        if let Some(&first) = by_endpoints.get(&(edge.from, edge.to)) {
            return Err(GraphError::DuplicateEdge {
                edge: edge.id,
                first,
                from: edge.from,
                to: edge.to,
            });
        }
        by_endpoints.insert((edge.from, edge.to), edge.id);
    }

    // Every flow total (and the solver's running sum) is bounded by this.
    checked_flow_sum(edges.iter().map(|e| e.capacity), "total capacity")
        .map_err(|_| GraphError::CapacityOverflow)?;

    Ok(by_endpoints)
}
