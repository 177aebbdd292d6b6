//! Residual network stored as an arena of paired arcs.
//!
//! Edge `e` owns arcs `2e` (forward, `from -> to`) and `2e + 1` (reverse,
//! `to -> from`), so the partner of any arc is `arc ^ 1`. An anti-parallel
//! edge gets its own pair; the two directions never share residual capacity.

use std::collections::VecDeque;

use fl_core::{EdgeId, Flow, NodeId};
use fl_graph::Graph;
use tracing::trace;

/// Index of an arc in the residual arena.
pub type ArcId = usize;

#[derive(Debug, Clone, Copy)]
struct Arc {
    head: NodeId,
    residual: Flow,
}

/// Remaining capacity of every arc during one solve.
#[derive(Debug, Clone)]
pub struct ResidualGraph {
    arcs: Vec<Arc>,
    /// Arcs leaving each node, in creation (edge-list) order.
    adjacency: Vec<Vec<ArcId>>,
}

impl ResidualGraph {
    /// Build the initial residual network: full capacity forward, zero back.
    pub fn from_graph(graph: &Graph) -> Self {
        let mut arcs = Vec::with_capacity(graph.edges().len() * 2);
        let mut adjacency = vec![Vec::new(); graph.node_count()];

        for edge in graph.edges() {
            adjacency[edge.from.as_usize()].push(arcs.len());
            arcs.push(Arc {
                head: edge.to,
                residual: edge.capacity,
            });
            adjacency[edge.to.as_usize()].push(arcs.len());
            arcs.push(Arc {
                head: edge.from,
                residual: 0,
            });
        }

        Self { arcs, adjacency }
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Arcs leaving `node`.
    pub fn arcs_from(&self, node: NodeId) -> &[ArcId] {
        self.adjacency
            .get(node.as_usize())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn head(&self, arc: ArcId) -> NodeId {
        self.arcs[arc].head
    }

    pub fn tail(&self, arc: ArcId) -> NodeId {
        self.arcs[arc ^ 1].head
    }

    pub fn residual(&self, arc: ArcId) -> Flow {
        self.arcs[arc].residual
    }

    /// The edge an arc was created for.
    pub fn edge_of(&self, arc: ArcId) -> EdgeId {
        EdgeId::from_index((arc / 2) as u32)
    }

    /// Whether `arc` runs along its edge (as opposed to cancelling flow).
    pub fn is_forward(&self, arc: ArcId) -> bool {
        arc % 2 == 0
    }

    /// Current flow on `edge`: what has been pushed onto its reverse arc.
    pub fn edge_flow(&self, edge: EdgeId) -> Flow {
        self.arcs[edge.as_usize() * 2 + 1].residual
    }

    /// Send `amount` along `arc`, handing the same amount to its partner.
    ///
    /// Caller guarantees `amount <= residual(arc)`.
    pub fn push(&mut self, arc: ArcId, amount: Flow) {
        self.arcs[arc].residual -= amount;
        self.arcs[arc ^ 1].residual += amount;
    }

    /// Breadth-first search for the shortest augmenting path.
    ///
    /// Explores each node's arcs in creation order and keeps the first parent
    /// found for every node, so the result is deterministic. Returns the arcs
    /// from `source` to `sink`, or `None` when the sink is unreachable.
    pub fn shortest_augmenting_path(&self, source: NodeId, sink: NodeId) -> Option<Vec<ArcId>> {
        let mut parent: Vec<Option<ArcId>> = vec![None; self.adjacency.len()];
        let mut visited = vec![false; self.adjacency.len()];
        let mut queue = VecDeque::from([source]);
        visited[source.as_usize()] = true;

        'search: while let Some(u) = queue.pop_front() {
            trace!(node = %u, "bfs visit");
            for &arc in self.arcs_from(u) {
                let v = self.arcs[arc].head;
                if visited[v.as_usize()] || self.arcs[arc].residual <= 0 {
                    continue;
                }
                visited[v.as_usize()] = true;
                parent[v.as_usize()] = Some(arc);
                if v == sink {
                    break 'search;
                }
                queue.push_back(v);
            }
        }

        if !visited[sink.as_usize()] {
            return None;
        }

        let mut path = Vec::new();
        let mut v = sink;
        while v != source {
            let arc = parent[v.as_usize()]?;
            path.push(arc);
            v = self.tail(arc);
        }
        path.reverse();
        Some(path)
    }

    /// Nodes reachable from `start` over arcs with positive residual.
    pub fn reachable_from(&self, start: NodeId) -> Vec<bool> {
        let mut seen = vec![false; self.adjacency.len()];
        let mut queue = VecDeque::from([start]);
        seen[start.as_usize()] = true;

        while let Some(u) = queue.pop_front() {
            for &arc in self.arcs_from(u) {
                let v = self.arcs[arc].head;
                if !seen[v.as_usize()] && self.arcs[arc].residual > 0 {
                    seen[v.as_usize()] = true;
                    queue.push_back(v);
                }
            }
        }

        seen
    }
}
