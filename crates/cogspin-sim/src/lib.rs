//! # cogspin-sim
//!
//! The Cogspin simulation engine: two rigid spheres approach along the
//! x axis, mesh like gears on contact, and exchange tangential spin
//! through the accelerator-dispatched coupling kernel while their
//! orientations are integrated on the host.
//!
//! The per-frame recurrence is strictly sequential:
//! gate check → (if meshed) coupling dispatch → device read-back →
//! orientation integration → render frame. Frame N's state is the sole
//! input to frame N+1.

pub mod approach;
pub mod body;
pub mod config;
pub mod simulation;

pub use approach::{ApproachController, Phase};
pub use body::BodyState;
pub use config::SimConfig;
pub use simulation::Simulation;
