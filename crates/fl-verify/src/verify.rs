//! The verification pipeline.

use fl_core::{EdgeId, Flow, saturating_flow_sum};
use fl_graph::Graph;
use fl_solver::SolverConfig;
use tracing::{debug, warn};

use crate::assignment::FlowAssignment;
use crate::error::{VerifyError, VerifyResult};
use crate::verdict::{CapacityViolation, ConservationViolation, Verdict, VerdictStatus};

/// Check a user flow against the graph and its true maximum flow.
pub fn verify(graph: &Graph, assignment: &FlowAssignment) -> VerifyResult<Verdict> {
    verify_with_config(graph, assignment, None)
}

/// Same as [`verify`], with explicit solver limits.
///
/// Steps:
/// 1. Reject entries for edges the graph doesn't have
/// 2. Collect edges whose flow is outside `[0, capacity]`
/// 3. Collect non-terminal nodes where inflow != outflow
/// 4. Sum the flow leaving the source
/// 5. Solve the graph independently and compare
pub fn verify_with_config(
    graph: &Graph,
    assignment: &FlowAssignment,
    config: Option<SolverConfig>,
) -> VerifyResult<Verdict> {
    for (from, to, _) in assignment.iter() {
        if graph.find_edge(from, to).is_none() {
            return Err(VerifyError::UnknownEdge { from, to });
        }
    }

    let capacity_violations = check_capacities(graph, assignment);
    let conservation_violations = check_conservation(graph, assignment);
    let user_flow = source_outflow(graph, assignment);
    let max_flow = fl_solver::solve_with_config(graph, config)?;

    let status = if !capacity_violations.is_empty() {
        VerdictStatus::CapacityViolated
    } else if !conservation_violations.is_empty() {
        VerdictStatus::ConservationViolated
    } else if user_flow > max_flow {
        warn!(
            user_flow,
            max_flow, "feasible assignment exceeds maximum flow"
        );
        VerdictStatus::Inconsistent
    } else if user_flow < max_flow {
        VerdictStatus::SubMaximal
    } else {
        VerdictStatus::Optimal
    };

    debug!(?status, user_flow, max_flow, "flow verified");

    Ok(Verdict::new(
        status,
        max_flow,
        user_flow,
        capacity_violations,
        conservation_violations,
    ))
}

/// Edges whose assigned flow is negative or above capacity, in edge-list order.
pub fn check_capacities(graph: &Graph, assignment: &FlowAssignment) -> Vec<CapacityViolation> {
    graph
        .edges()
        .iter()
        .filter_map(|edge| {
            let flow = assignment.get(edge.from, edge.to);
            (!(0..=edge.capacity).contains(&flow)).then_some(CapacityViolation {
                edge: edge.id,
                from: edge.from,
                to: edge.to,
                flow,
                capacity: edge.capacity,
            })
        })
        .collect()
}

/// Non-terminal nodes whose inflow and outflow differ, in node order.
///
/// Sums clamp at the `Flow` range. They can only get there when some edge is
/// already outside `[0, capacity]`, since a valid graph's total capacity fits.
pub fn check_conservation(
    graph: &Graph,
    assignment: &FlowAssignment,
) -> Vec<ConservationViolation> {
    graph
        .nodes()
        .filter(|&n| !graph.is_terminal(n))
        .filter_map(|node| {
            let in_flow = sum_over(graph, graph.incoming(node), assignment);
            let out_flow = sum_over(graph, graph.outgoing(node), assignment);
            (in_flow != out_flow).then_some(ConservationViolation {
                node,
                in_flow,
                out_flow,
            })
        })
        .collect()
}

/// Total flow on edges leaving the source, clamped like the conservation sums.
pub fn source_outflow(graph: &Graph, assignment: &FlowAssignment) -> Flow {
    sum_over(graph, graph.outgoing(graph.source()), assignment)
}

fn sum_over(graph: &Graph, edges: &[EdgeId], assignment: &FlowAssignment) -> Flow {
    saturating_flow_sum(
        edges
            .iter()
            .filter_map(|&id| graph.edge(id))
            .map(|edge| assignment.get(edge.from, edge.to)),
    )
}
