//! Verification outcome.

use fl_core::{EdgeId, Flow, NodeId};

/// Where a single verification ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerdictStatus {
    /// Feasible and equal to the maximum flow.
    Optimal,
    /// Feasible but below the maximum flow.
    SubMaximal,
    /// Some non-terminal node's inflow differs from its outflow.
    ConservationViolated,
    /// Some edge carries a value outside `[0, capacity]`.
    CapacityViolated,
    /// Structurally feasible yet above the maximum flow. Happens when flow
    /// circulates back into the source; reported, never clamped.
    Inconsistent,
}

impl VerdictStatus {
    pub fn is_valid(self) -> bool {
        self == VerdictStatus::Optimal
    }
}

/// An edge whose flow is negative or above its capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityViolation {
    pub edge: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    pub flow: Flow,
    pub capacity: Flow,
}

/// A non-terminal node where inflow and outflow differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConservationViolation {
    pub node: NodeId,
    pub in_flow: Flow,
    pub out_flow: Flow,
}

/// Result of checking a flow assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub status: VerdictStatus,
    pub is_valid: bool,
    pub message: String,
    pub max_flow: Flow,
    pub user_flow: Flow,
    pub capacity_violations: Vec<CapacityViolation>,
    pub conservation_violations: Vec<ConservationViolation>,
}

impl Verdict {
    pub(crate) fn new(
        status: VerdictStatus,
        max_flow: Flow,
        user_flow: Flow,
        capacity_violations: Vec<CapacityViolation>,
        conservation_violations: Vec<ConservationViolation>,
    ) -> Self {
        let message = match status {
            VerdictStatus::Optimal => {
                format!("Correct! You found the maximum flow of {max_flow} units.")
            }
            VerdictStatus::SubMaximal => format!(
                "Not quite. You have {user_flow} units, but the maximum flow is {max_flow}."
            ),
            VerdictStatus::ConservationViolated => {
                let nodes = join(conservation_violations.iter().map(|v| v.node.to_string()));
                format!("Flow is not conserved at node(s) {nodes}: inflow must equal outflow.")
            }
            VerdictStatus::CapacityViolated => {
                let edges = join(
                    capacity_violations
                        .iter()
                        .map(|v| format!("{}-{}", v.from, v.to)),
                );
                format!("Flow on edge(s) {edges} must be between 0 and the edge capacity.")
            }
            VerdictStatus::Inconsistent => format!(
                "Your flow of {user_flow} units leaves the source but exceeds the maximum \
                 flow of {max_flow}; some of it must be circulating back into the source."
            ),
        };

        Self {
            status,
            is_valid: status.is_valid(),
            message,
            max_flow,
            user_flow,
            capacity_violations,
            conservation_violations,
        }
    }
}

fn join(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(", ")
}
