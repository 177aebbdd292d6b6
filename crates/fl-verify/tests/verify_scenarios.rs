//! Verification scenarios on small networks.

use fl_core::NodeId;
use fl_graph::Graph;
use fl_verify::{FlowAssignment, VerdictStatus, verify};

fn diamond() -> Graph {
    Graph::new(4, [(0, 1, 3), (0, 2, 2), (1, 3, 2), (2, 3, 3)], 0, 3).unwrap()
}

#[test]
fn maximal_balanced_flow_is_accepted() {
    let flows = FlowAssignment::from_pairs([(0, 1, 2), (0, 2, 2), (1, 3, 2), (2, 3, 2)]);
    let verdict = verify(&diamond(), &flows).unwrap();

    assert_eq!(verdict.status, VerdictStatus::Optimal);
    assert!(verdict.is_valid);
    assert_eq!(verdict.user_flow, 4);
    assert_eq!(verdict.max_flow, 4);
    assert!(verdict.conservation_violations.is_empty());
    assert!(verdict.message.starts_with("Correct!"));
}

#[test]
fn unbalanced_node_is_rejected() {
    let flows = FlowAssignment::from_pairs([(0, 1, 3), (0, 2, 0), (1, 3, 2), (2, 3, 0)]);
    let verdict = verify(&diamond(), &flows).unwrap();

    assert_eq!(verdict.status, VerdictStatus::ConservationViolated);
    assert!(!verdict.is_valid);
    assert_eq!(verdict.conservation_violations.len(), 1);
    let violation = verdict.conservation_violations[0];
    assert_eq!(violation.node, NodeId::from_index(1));
    assert_eq!((violation.in_flow, violation.out_flow), (3, 2));
    assert_eq!(verdict.user_flow, 3);
    assert_eq!(verdict.max_flow, 4);
}

#[test]
fn feasible_but_small_flow_is_submaximal() {
    let flows = FlowAssignment::from_pairs([(0, 1, 2), (1, 3, 2)]);
    let verdict = verify(&diamond(), &flows).unwrap();

    assert_eq!(verdict.status, VerdictStatus::SubMaximal);
    assert_eq!(verdict.user_flow, 2);
    assert!(verdict.message.contains("maximum flow is 4"));
}

#[test]
fn empty_assignment_is_zero_flow() {
    let verdict = verify(&diamond(), &FlowAssignment::new()).unwrap();
    assert_eq!(verdict.status, VerdictStatus::SubMaximal);
    assert_eq!(verdict.user_flow, 0);
}

#[test]
fn empty_assignment_is_optimal_when_disconnected() {
    let graph = Graph::new(3, [(0, 1, 2)], 0, 2).unwrap();
    let verdict = verify(&graph, &FlowAssignment::new()).unwrap();
    assert!(verdict.is_valid);
    assert_eq!(verdict.max_flow, 0);
}

#[test]
fn over_capacity_takes_precedence() {
    let flows = FlowAssignment::from_pairs([(0, 1, 3), (0, 2, 2), (1, 3, 3), (2, 3, 2)]);
    let verdict = verify(&diamond(), &flows).unwrap();

    assert_eq!(verdict.status, VerdictStatus::CapacityViolated);
    assert_eq!(verdict.capacity_violations.len(), 1);
    assert_eq!(verdict.capacity_violations[0].flow, 3);
    assert_eq!(verdict.capacity_violations[0].capacity, 2);
    assert!(verdict.message.contains("1-3"));
}

#[test]
fn negative_flow_is_a_capacity_violation() {
    let flows = FlowAssignment::from_pairs([(0, 1, -2), (1, 3, -2)]);
    let verdict = verify(&diamond(), &flows).unwrap();
    assert_eq!(verdict.status, VerdictStatus::CapacityViolated);
    assert_eq!(verdict.capacity_violations.len(), 2);
}

#[test]
fn circulation_through_source_is_inconsistent() {
    // 0 -> 1 -> 0 loop alongside a direct 0 -> 2 edge
    let graph = Graph::new(3, [(0, 2, 1), (0, 1, 5), (1, 0, 5)], 0, 2).unwrap();
    let flows = FlowAssignment::from_pairs([(0, 2, 1), (0, 1, 5), (1, 0, 5)]);
    let verdict = verify(&graph, &flows).unwrap();

    assert_eq!(verdict.status, VerdictStatus::Inconsistent);
    assert_eq!(verdict.user_flow, 6);
    assert_eq!(verdict.max_flow, 1);
    assert!(!verdict.is_valid);
}

#[test]
fn reverse_edge_flow_does_not_count_as_source_outflow() {
    let graph = Graph::new(2, [(0, 1, 4), (1, 0, 3)], 0, 1).unwrap();
    let flows = FlowAssignment::from_pairs([(0, 1, 4), (1, 0, 0)]);
    let verdict = verify(&graph, &flows).unwrap();
    assert!(verdict.is_valid);
}
