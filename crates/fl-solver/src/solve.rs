//! High-level solver interface.

use fl_core::{EdgeId, Flow, NodeId};
use fl_graph::Graph;
use tracing::debug;

use crate::edmonds_karp::{SolverConfig, augment_to_saturation};
use crate::error::SolverResult;
use crate::residual::ResidualGraph;
use crate::solution::{MaxFlow, MinCut};

/// Maximum flow value from source to sink.
///
/// Zero when the sink cannot be reached. Never touches `graph`; the residual
/// network lives only for the duration of the call.
pub fn solve(graph: &Graph) -> SolverResult<Flow> {
    solve_with_config(graph, None)
}

pub fn solve_with_config(graph: &Graph, config: Option<SolverConfig>) -> SolverResult<Flow> {
    max_flow(graph, config).map(|flow| flow.value)
}

/// Solve and keep everything the run produced.
///
/// This function:
/// 1. Builds the residual network (one forward/reverse arc pair per edge)
/// 2. Augments along BFS-shortest paths until the sink is unreachable
/// 3. Reads the optimal flow off the reverse arcs
/// 4. Takes the nodes still reachable from the source as the min-cut side
pub fn max_flow(graph: &Graph, config: Option<SolverConfig>) -> SolverResult<MaxFlow> {
    let cfg = config.unwrap_or_default();
    let mut residual = ResidualGraph::from_graph(graph);

    let (value, augmenting_paths) = augment_to_saturation(graph, &mut residual, &cfg)?;

    let edge_flows = graph
        .edges()
        .iter()
        .map(|edge| residual.edge_flow(edge.id))
        .collect();
    let min_cut = min_cut(graph, &residual);

    debug!(
        value,
        augmentations = augmenting_paths.len(),
        cut_edges = min_cut.edges.len(),
        "max flow solved"
    );

    Ok(MaxFlow {
        value,
        edge_flows,
        augmenting_paths,
        min_cut,
    })
}

fn min_cut(graph: &Graph, residual: &ResidualGraph) -> MinCut {
    let reachable = residual.reachable_from(graph.source());

    let source_side: Vec<NodeId> = graph.nodes().filter(|n| reachable[n.as_usize()]).collect();
    let edges: Vec<EdgeId> = graph
        .edges()
        .iter()
        .filter(|e| reachable[e.from.as_usize()] && !reachable[e.to.as_usize()])
        .map(|e| e.id)
        .collect();
    let capacity = edges
        .iter()
        .filter_map(|&id| graph.edge(id))
        .map(|e| e.capacity)
        .sum();

    MinCut {
        source_side,
        edges,
        capacity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_edge() {
        let graph = Graph::new(2, [(0, 1, 5)], 0, 1).unwrap();
        assert_eq!(solve(&graph).unwrap(), 5);
    }

    #[test]
    fn min_cut_matches_value() {
        let graph = Graph::new(4, [(0, 1, 3), (0, 2, 2), (1, 3, 2), (2, 3, 3)], 0, 3).unwrap();
        let flow = max_flow(&graph, None).unwrap();

        assert_eq!(flow.value, 4);
        assert_eq!(flow.min_cut.capacity, flow.value);
        // {0, 1} | {2, 3}: cut edges 0-2 and 1-3
        assert!(flow.min_cut.contains(NodeId::from_index(1)));
        assert!(!flow.min_cut.contains(NodeId::from_index(2)));
        assert_eq!(
            flow.min_cut.edges,
            vec![EdgeId::from_index(1), EdgeId::from_index(2)]
        );
    }

    #[test]
    fn graph_is_left_untouched() {
        let graph = Graph::new(3, [(0, 1, 2), (1, 2, 1)], 0, 2).unwrap();
        let before: Vec<_> = graph.edges().to_vec();
        solve(&graph).unwrap();
        assert_eq!(graph.edges(), before.as_slice());
    }
}
