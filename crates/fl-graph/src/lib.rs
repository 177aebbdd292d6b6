//! fl-graph: the capacitated directed network.
//!
//! Provides:
//! - Core graph data structures (Edge, Graph)
//! - Incremental graph builder with validation
//! - Adjacency lookups (outgoing/incoming edges per node, edge by endpoints)
//!
//! # Example
//!
//! ```
//! use fl_graph::Graph;
//!
//! let graph = Graph::new(4, [(0, 1, 3), (0, 2, 2), (1, 3, 2), (2, 3, 3)], 0, 3).unwrap();
//!
//! assert_eq!(graph.node_count(), 4);
//! assert_eq!(graph.edges().len(), 4);
//! assert_eq!(graph.source_capacity(), 5);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, Graph};
