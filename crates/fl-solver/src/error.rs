//! Error types for solver operations.

use thiserror::Error;

/// Errors that can occur while computing a maximum flow.
///
/// None of these are reachable on a validated graph with a correct solver;
/// they turn a would-be hang or overflow into a reportable failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("Augmentation limit of {limit} exceeded")]
    IterationLimit { limit: usize },

    #[error("Solver invariant violated: {what}")]
    Invariant { what: String },
}

pub type SolverResult<T> = Result<T, SolverError>;
