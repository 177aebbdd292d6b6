//! Error types for flow verification.

use fl_core::NodeId;
use fl_solver::SolverError;
use thiserror::Error;

/// Failures that prevent a verdict from being produced at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error("Flow assignment references edge {from}-{to}, which is not in the graph")]
    UnknownEdge { from: NodeId, to: NodeId },

    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),
}

pub type VerifyResult<T> = Result<T, VerifyError>;
