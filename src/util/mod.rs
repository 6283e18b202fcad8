//! Shared utilities: opaque identifiers and serde helpers used across the crate.

pub mod ids;
pub mod serde_helpers;

pub use ids::HandlerId;
pub use serde_helpers::duration_serde;
