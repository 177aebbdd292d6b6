//! Checks a user's flow assignment against a network.
//!
//! A verification is stateless: every call starts from "unverified" and ends
//! in one `VerdictStatus`. Capacity and conservation problems are expected
//! learner mistakes and come back as an invalid `Verdict`, not as an error.

pub mod assignment;
pub mod error;
pub mod verdict;
pub mod verify;

pub use assignment::FlowAssignment;
pub use error::{VerifyError, VerifyResult};
pub use verdict::{CapacityViolation, ConservationViolation, Verdict, VerdictStatus};
pub use verify::{check_capacities, check_conservation, source_outflow, verify, verify_with_config};
