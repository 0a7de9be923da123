//! Per-body simulation state.
//!
//! Two records of this type hold all mutable body state across frames.
//! The angular velocity has a device-side twin: the accelerator copy is
//! authoritative while a coupling step runs, the host copy otherwise.
//! The orientation is host-only.

use cogspin_math::{integrate_orientation, Quat, Vec3};

/// Mutable state of one gear sphere.
#[derive(Debug, Clone, Copy)]
pub struct BodyState {
    /// Spin rate and axis (rad/s). Every component stays within
    /// `±max_angular_speed` after any coupling update.
    pub angular_velocity: Vec3,
    /// Orientation as a unit quaternion. Re-normalized after every
    /// integration step.
    pub orientation: Quat,
    /// Position along the separation axis, owned by the approach
    /// controller. The only spatial degree of freedom modeled.
    pub position_x: f32,
}

impl BodyState {
    /// Creates a body at the given x position with identity orientation.
    pub fn new(angular_velocity: Vec3, position_x: f32) -> Self {
        Self {
            angular_velocity,
            orientation: Quat::IDENTITY,
            position_x,
        }
    }

    /// Advances the orientation by one timestep of the current angular
    /// velocity. Runs every frame, meshed or not.
    pub fn integrate(&mut self, dt: f32) {
        self.orientation = integrate_orientation(self.orientation, self.angular_velocity, dt);
    }
}
