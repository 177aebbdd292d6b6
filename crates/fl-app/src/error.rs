//! Error types for the fl-app service layer.

use fl_graph::GraphError;
use fl_project::ProjectError;
use fl_solver::SolverError;
use fl_verify::VerifyError;

/// Application error type that wraps errors from the core crates and gives
/// every driver the same vocabulary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Level not found: {0}")]
    LevelNotFound(u32),

    #[error("Custom level data required")]
    MissingLevelData,

    /// The solver gave up; details are in the log, not in the message.
    #[error("Internal error while computing the maximum flow")]
    Internal,

    #[error("Project error: {0}")]
    Project(String),
}

/// Result type for fl-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<GraphError> for AppError {
    fn from(err: GraphError) -> Self {
        AppError::InvalidGraph(err.to_string())
    }
}

impl From<SolverError> for AppError {
    fn from(_: SolverError) -> Self {
        AppError::Internal
    }
}

impl From<VerifyError> for AppError {
    fn from(err: VerifyError) -> Self {
        match err {
            VerifyError::Solver(inner) => inner.into(),
            other => AppError::InvalidInput(other.to_string()),
        }
    }
}

impl From<ProjectError> for AppError {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::InvalidFlowKey { .. } => AppError::InvalidInput(err.to_string()),
            other => AppError::Project(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solver_details_stay_out_of_the_message() {
        let err: AppError = SolverError::IterationLimit { limit: 3 }.into();
        assert!(matches!(err, AppError::Internal));
        assert!(!err.to_string().contains('3'));
    }

    #[test]
    fn verify_errors_split_by_kind() {
        let unknown = VerifyError::UnknownEdge {
            from: fl_core::NodeId::from_index(1),
            to: fl_core::NodeId::from_index(0),
        };
        assert!(matches!(AppError::from(unknown), AppError::InvalidInput(_)));

        let nested = VerifyError::Solver(SolverError::IterationLimit { limit: 1 });
        assert!(matches!(AppError::from(nested), AppError::Internal));
    }
}
