//! Maximum-flow solver for capacitated directed networks.
//!
//! This crate implements the Ford-Fulkerson method with breadth-first
//! augmenting paths (Edmonds-Karp). Besides the flow value it reports the
//! optimal per-edge flow, every augmenting path in the order it was found,
//! and the minimum cut that certifies optimality.

pub mod edmonds_karp;
pub mod error;
pub mod residual;
pub mod solution;
pub mod solve;

pub use edmonds_karp::SolverConfig;
pub use error::{SolverError, SolverResult};
pub use residual::{ArcId, ResidualGraph};
pub use solution::{AugmentingPath, MaxFlow, MinCut};
pub use solve::{max_flow, solve, solve_with_config};
