//! Property tests for the max-flow solver.

use std::collections::{HashSet, VecDeque};

use fl_core::{Flow, NodeId};
use fl_graph::Graph;
use fl_solver::{max_flow, solve};
use proptest::prelude::*;

type RawEdge = (u32, u32, Flow);

/// Random small network: source 0, sink n-1, no self loops, no duplicate pairs.
fn arb_network() -> impl Strategy<Value = (usize, Vec<RawEdge>)> {
    (2_usize..8).prop_flat_map(|n| {
        let m = n as u32;
        prop::collection::vec((0..m, 0..m, 1_i64..25), 0..20).prop_map(move |raw| {
            let mut seen = HashSet::new();
            let edges = raw
                .into_iter()
                .filter(|&(u, v, _)| u != v && seen.insert((u, v)))
                .collect();
            (n, edges)
        })
    })
}

fn build(n: usize, edges: &[RawEdge]) -> Graph {
    Graph::new(n, edges.iter().copied(), 0, n as u32 - 1).unwrap()
}

fn sink_reachable(graph: &Graph) -> bool {
    let mut seen = vec![false; graph.node_count()];
    let mut queue = VecDeque::from([graph.source()]);
    seen[graph.source().as_usize()] = true;
    while let Some(u) = queue.pop_front() {
        for &id in graph.outgoing(u) {
            let to = graph.edges()[id.as_usize()].to;
            if !seen[to.as_usize()] {
                seen[to.as_usize()] = true;
                queue.push_back(to);
            }
        }
    }
    seen[graph.sink().as_usize()]
}

proptest! {
    #[test]
    fn value_is_nonnegative_and_idempotent((n, edges) in arb_network()) {
        let graph = build(n, &edges);
        let first = solve(&graph).unwrap();
        prop_assert!(first >= 0);
        prop_assert_eq!(first, solve(&graph).unwrap());
    }

    #[test]
    fn value_is_bounded_by_terminal_cuts((n, edges) in arb_network()) {
        let graph = build(n, &edges);
        let value = solve(&graph).unwrap();
        prop_assert!(value <= graph.source_capacity());
        prop_assert!(value <= graph.sink_capacity());
    }

    #[test]
    fn zero_iff_sink_unreachable((n, edges) in arb_network()) {
        let graph = build(n, &edges);
        let value = solve(&graph).unwrap();
        prop_assert_eq!(value == 0, !sink_reachable(&graph));
    }

    #[test]
    fn edge_flows_form_a_feasible_flow((n, edges) in arb_network()) {
        let graph = build(n, &edges);
        let flow = max_flow(&graph, None).unwrap();

        for edge in graph.edges() {
            let f = flow.flow_on(edge.id);
            prop_assert!((0..=edge.capacity).contains(&f));
        }
        for node in graph.nodes().filter(|&v| !graph.is_terminal(v)) {
            let inflow: Flow = graph.incoming(node).iter().map(|&e| flow.flow_on(e)).sum();
            let outflow: Flow = graph.outgoing(node).iter().map(|&e| flow.flow_on(e)).sum();
            prop_assert_eq!(inflow, outflow);
        }
        let source_out: Flow = graph.outgoing(graph.source()).iter().map(|&e| flow.flow_on(e)).sum();
        let source_in: Flow = graph.incoming(graph.source()).iter().map(|&e| flow.flow_on(e)).sum();
        prop_assert_eq!(source_out - source_in, flow.value);
    }

    #[test]
    fn min_cut_certifies_value((n, edges) in arb_network()) {
        let graph = build(n, &edges);
        let flow = max_flow(&graph, None).unwrap();
        prop_assert_eq!(flow.min_cut.capacity, flow.value);
        prop_assert!(flow.min_cut.contains(graph.source()));
        prop_assert!(!flow.min_cut.contains(graph.sink()));
        let bottlenecks: Flow = flow.augmenting_paths.iter().map(|p| p.bottleneck).sum();
        prop_assert_eq!(bottlenecks, flow.value);
    }

    #[test]
    fn raising_a_capacity_never_lowers_the_value(
        (n, edges) in arb_network(),
        pick in any::<prop::sample::Index>(),
        extra in 1_i64..10,
    ) {
        prop_assume!(!edges.is_empty());
        let before = solve(&build(n, &edges)).unwrap();

        let mut raised = edges.clone();
        raised[pick.index(edges.len())].2 += extra;
        let after = solve(&build(n, &raised)).unwrap();

        prop_assert!(after >= before);
    }
}

#[test]
fn source_side_never_holds_sink_on_tiny_graph() {
    let graph = Graph::new(2, [(0, 1, 1)], 0, 1).unwrap();
    let flow = max_flow(&graph, None).unwrap();
    assert_eq!(flow.min_cut.source_side, vec![NodeId::from_index(0)]);
}
