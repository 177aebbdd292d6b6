//! Shared application service layer for flowlab.
//!
//! Turns wire-level definitions into validated core values, runs the solver
//! or verifier, and shapes the answer back into wire responses. Any driver
//! (the CLI, a web handler) goes through here.

pub mod compile;
pub mod error;
pub mod levels;
pub mod service;

// Re-export key types for convenience
pub use compile::{GraphLimits, compile_flows, compile_graph, compile_graph_with_limits};
pub use error::{AppError, AppResult};
pub use levels::{LevelSummary, get_hint, get_level, list_levels};
pub use service::{handle_verify, resolve_graph, solve_graph, verify_batch, verify_flows};
