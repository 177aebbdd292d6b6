//! fl-core: shared foundation for flowlab.
//!
//! Contains:
//! - ids (compact node/edge identifiers)
//! - numeric (the integer flow type + checked arithmetic)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{FlError, FlResult};
pub use ids::{EdgeId, NodeId};
pub use numeric::*;
