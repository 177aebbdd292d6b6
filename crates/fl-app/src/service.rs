//! Solve and verify requests.

use fl_project::{
    AugmentingPathDef, Catalog, FlowMapDef, GraphDef, LevelRef, MinCutDef, SolveResponseDef,
    VerifyRequestDef, VerifyResponseDef, ViolationDef, flow_key,
};
use fl_core::EdgeId;
use fl_graph::Graph;
use fl_solver::MaxFlow;
use fl_verify::{Verdict, VerifyError};
use rayon::prelude::*;
use tracing::{debug, error, info};

use crate::compile::{compile_flows, compile_graph};
use crate::error::{AppError, AppResult};

/// Compute the maximum flow of a graph definition.
///
/// With `detailed`, the response also carries the optimal edge flows, the
/// augmenting paths in order and the minimum cut.
pub fn solve_graph(def: &GraphDef, detailed: bool) -> AppResult<SolveResponseDef> {
    let graph = compile_graph(def)?;
    let flow = fl_solver::max_flow(&graph, None)
        .inspect_err(|err| error!(%err, "max-flow solver failed"))?;
    debug!(max_flow = flow.value, "solve request handled");

    if detailed {
        Ok(detailed_response(&graph, &flow))
    } else {
        Ok(SolveResponseDef::value_only(flow.value))
    }
}

/// Check a user flow map against a graph definition.
pub fn verify_flows(def: &GraphDef, flows: &FlowMapDef) -> AppResult<VerifyResponseDef> {
    let graph = compile_graph(def)?;
    let assignment = compile_flows(flows)?;
    let verdict = fl_verify::verify(&graph, &assignment).inspect_err(|err| {
        if let VerifyError::Solver(inner) = err {
            error!(err = %inner, "max-flow solver failed during verification");
        }
    })?;
    Ok(verify_response(verdict))
}

/// Pick the graph a request refers to: a catalog level or its inline data.
pub fn resolve_graph<'a>(catalog: &'a Catalog, request: &'a VerifyRequestDef) -> AppResult<&'a GraphDef> {
    match request.level_id {
        LevelRef::Id(id) => catalog
            .find(id)
            .map(|level| &level.graph)
            .ok_or(AppError::LevelNotFound(id)),
        LevelRef::Custom(_) => request.level_data.as_ref().ok_or(AppError::MissingLevelData),
    }
}

/// Handle one verify request end to end.
pub fn handle_verify(catalog: &Catalog, request: &VerifyRequestDef) -> AppResult<VerifyResponseDef> {
    let graph = resolve_graph(catalog, request)?;
    let response = verify_flows(graph, &request.flows)?;
    info!(
        level = ?request.level_id,
        is_valid = response.is_valid,
        user_flow = response.user_flow,
        max_flow = response.max_flow,
        "verify request handled"
    );
    Ok(response)
}

/// Handle independent verify requests in parallel; results keep input order.
pub fn verify_batch(
    catalog: &Catalog,
    requests: &[VerifyRequestDef],
) -> Vec<AppResult<VerifyResponseDef>> {
    requests
        .par_iter()
        .map(|request| handle_verify(catalog, request))
        .collect()
}

fn verify_response(verdict: Verdict) -> VerifyResponseDef {
    let capacity = verdict
        .capacity_violations
        .iter()
        .map(|v| ViolationDef::Capacity {
            edge: flow_key(v.from, v.to),
            flow: v.flow,
            capacity: v.capacity,
        });
    let conservation = verdict
        .conservation_violations
        .iter()
        .map(|v| ViolationDef::Conservation {
            node: v.node.index(),
            in_flow: v.in_flow,
            out_flow: v.out_flow,
        });
    let violations = capacity.chain(conservation).collect();

    VerifyResponseDef {
        is_valid: verdict.is_valid,
        message: verdict.message,
        max_flow: verdict.max_flow,
        user_flow: verdict.user_flow,
        violations,
    }
}

fn detailed_response(graph: &Graph, flow: &MaxFlow) -> SolveResponseDef {
    let edge_key = |id: EdgeId| {
        graph
            .edge(id)
            .map(|edge| flow_key(edge.from, edge.to))
            .unwrap_or_default()
    };

    SolveResponseDef {
        max_flow: flow.value,
        edge_flows: Some(
            graph
                .edges()
                .iter()
                .map(|edge| (flow_key(edge.from, edge.to), flow.flow_on(edge.id)))
                .collect(),
        ),
        augmenting_paths: Some(
            flow.augmenting_paths
                .iter()
                .map(|path| AugmentingPathDef {
                    nodes: path.nodes.iter().map(|n| n.index()).collect(),
                    bottleneck: path.bottleneck,
                })
                .collect(),
        ),
        min_cut: Some(MinCutDef {
            source_side: flow.min_cut.source_side.iter().map(|n| n.index()).collect(),
            edges: flow.min_cut.edges.iter().map(|&id| edge_key(id)).collect(),
            capacity: flow.min_cut.capacity,
        }),
    }
}
