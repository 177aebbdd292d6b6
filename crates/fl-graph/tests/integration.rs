//! Integration tests for fl-graph.

use fl_core::{EdgeId, NodeId};
use fl_graph::{Graph, GraphBuilder, GraphError};

fn n(i: u32) -> NodeId {
    NodeId::from_index(i)
}

#[test]
fn build_diamond_graph() {
    // 0 -> {1, 2} -> 3
    let graph = Graph::new(4, [(0, 1, 3), (0, 2, 2), (1, 3, 2), (2, 3, 3)], 0, 3).unwrap();

    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.source(), n(0));
    assert_eq!(graph.sink(), n(3));

    // Edge ids follow input order
    for (i, edge) in graph.edges().iter().enumerate() {
        assert_eq!(edge.id.as_usize(), i);
    }

    assert_eq!(graph.outgoing(n(0)).len(), 2);
    assert_eq!(graph.incoming(n(3)).len(), 2);
    assert_eq!(graph.outgoing(n(1)), &[EdgeId::from_index(2)]);
    assert_eq!(graph.incoming(n(2)), &[EdgeId::from_index(1)]);
}

#[test]
fn antiparallel_edges_are_independent() {
    let graph = Graph::new(2, [(0, 1, 4), (1, 0, 3)], 0, 1).unwrap();

    assert_eq!(graph.find_edge(n(0), n(1)).unwrap().capacity, 4);
    assert_eq!(graph.find_edge(n(1), n(0)).unwrap().capacity, 3);
    assert_eq!(graph.source_capacity(), 4);
    assert_eq!(graph.sink_capacity(), 4);
}

#[test]
fn disconnected_graph_is_valid() {
    let graph = Graph::new(4, [(0, 1, 1), (2, 3, 1)], 0, 3).unwrap();
    assert_eq!(graph.edges().len(), 2);
}

#[test]
fn graph_without_edges_is_valid() {
    let graph = GraphBuilder::new(2, 0, 1).build().unwrap();
    assert!(graph.edges().is_empty());
    assert_eq!(graph.source_capacity(), 0);
}

#[test]
fn rejects_empty_graph() {
    assert_eq!(
        Graph::new(0, std::iter::empty(), 0, 0).unwrap_err(),
        GraphError::Empty
    );
}

#[test]
fn rejects_terminals_out_of_range() {
    assert!(matches!(
        Graph::new(3, [(0, 1, 1)], 0, 3),
        Err(GraphError::TerminalOutOfRange { role: "Sink", node_count: 3, .. })
    ));
    assert!(matches!(
        Graph::new(3, [(0, 1, 1)], 7, 1),
        Err(GraphError::TerminalOutOfRange { role: "Source", .. })
    ));
}

#[test]
fn rejects_source_equal_to_sink() {
    assert_eq!(
        Graph::new(3, [(0, 1, 1)], 1, 1).unwrap_err(),
        GraphError::SourceIsSink { node: n(1) }
    );
}

#[test]
fn rejects_bad_edges() {
    assert!(matches!(
        Graph::new(3, [(0, 5, 1)], 0, 2),
        Err(GraphError::EdgeEndpointOutOfRange { .. })
    ));
    assert!(matches!(
        Graph::new(3, [(2, 2, 1)], 0, 2),
        Err(GraphError::SelfLoop { .. })
    ));
    assert!(matches!(
        Graph::new(3, [(0, 1, -4)], 0, 2),
        Err(GraphError::NonPositiveCapacity { capacity: -4, .. })
    ));
}

#[test]
fn rejects_duplicate_edges() {
    let err = Graph::new(3, [(0, 1, 1), (1, 2, 1), (0, 1, 9)], 0, 2).unwrap_err();
    assert_eq!(
        err,
        GraphError::DuplicateEdge {
            edge: EdgeId::from_index(2),
            first: EdgeId::from_index(0),
            from: n(0),
            to: n(1),
        }
    );
    assert!(err.to_string().contains("duplicates edge 0"));
}
