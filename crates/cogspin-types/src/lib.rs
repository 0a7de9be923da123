//! # cogspin-types
//!
//! Shared types, identifiers, error types, and physical constants
//! for the Cogspin gear-meshing simulation.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Cogspin crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{CogspinError, CogspinResult};
pub use ids::BodyId;
pub use scalar::Scalar;
