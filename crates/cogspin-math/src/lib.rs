//! # cogspin-math
//!
//! Math primitives for the Cogspin simulation.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Quat`, `Mat4`)
//! - First-order quaternion orientation integration
//! - Quaternion-to-transform conversion for the render boundary

pub mod quat;

// Re-export glam types as the canonical math types for Cogspin.
pub use glam::{Mat3, Mat4, Quat, Vec3, Vec4};

pub use quat::{integrate_orientation, orientation_matrix};
