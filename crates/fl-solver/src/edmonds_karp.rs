//! The augmentation loop.

use fl_core::{Flow, NodeId};
use fl_graph::Graph;
use tracing::{debug, error};

use crate::error::{SolverError, SolverResult};
use crate::residual::ResidualGraph;
use crate::solution::AugmentingPath;

/// Solver configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolverConfig {
    /// Maximum number of augmenting paths before giving up.
    /// `None` uses `node_count * edge_count` (at least 1), which Edmonds-Karp
    /// never reaches on a well-formed graph.
    pub max_augmentations: Option<usize>,
}

impl SolverConfig {
    /// Resolve the augmentation cap for a concrete graph.
    pub fn augmentation_limit(&self, graph: &Graph) -> usize {
        self.max_augmentations.unwrap_or_else(|| {
            graph
                .node_count()
                .saturating_mul(graph.edges().len())
                .max(1)
        })
    }
}

/// Augment along shortest paths until the sink is unreachable.
///
/// Returns the total pushed and the paths in the order they were used.
pub(crate) fn augment_to_saturation(
    graph: &Graph,
    residual: &mut ResidualGraph,
    config: &SolverConfig,
) -> SolverResult<(Flow, Vec<AugmentingPath>)> {
    let (source, sink) = (graph.source(), graph.sink());
    let limit = config.augmentation_limit(graph);

    let mut total: Flow = 0;
    let mut paths = Vec::new();

    while let Some(arcs) = residual.shortest_augmenting_path(source, sink) {
        if paths.len() >= limit {
            error!(limit, total, "max-flow augmentation limit exceeded");
            return Err(SolverError::IterationLimit { limit });
        }

        let bottleneck = arcs
            .iter()
            .map(|&arc| residual.residual(arc))
            .min()
            .ok_or_else(|| SolverError::Invariant {
                what: "empty augmenting path".to_string(),
            })?;

        for &arc in &arcs {
            residual.push(arc, bottleneck);
        }

        total = total
            .checked_add(bottleneck)
            .ok_or_else(|| SolverError::Invariant {
                what: "flow value overflow".to_string(),
            })?;

        let nodes: Vec<NodeId> = std::iter::once(source)
            .chain(arcs.iter().map(|&arc| residual.head(arc)))
            .collect();
        debug!(
            step = paths.len() + 1,
            path = ?nodes,
            bottleneck,
            total,
            "augmented"
        );

        paths.push(AugmentingPath { nodes, bottleneck });
    }

    Ok((total, paths))
}
