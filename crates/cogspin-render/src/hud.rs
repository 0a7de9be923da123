//! HUD spin readout.
//!
//! The overlay collaborator shows, per body, how fast it spins about the
//! z axis and in which rotational sense. Derived from the z component of
//! angular velocity: magnitude and sign.

use serde::{Deserialize, Serialize};

use cogspin_math::Vec3;

/// Rotational sense about the z axis, as seen looking down +z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinDirection {
    /// Negative z spin.
    Clockwise,
    /// Positive z spin.
    CounterClockwise,
    /// No z spin.
    None,
}

impl SpinDirection {
    /// Short indicator for HUD text.
    pub fn label(self) -> &'static str {
        match self {
            SpinDirection::Clockwise => "CW",
            SpinDirection::CounterClockwise => "CCW",
            SpinDirection::None => "-",
        }
    }
}

/// Per-body spin readout shown on the HUD.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpinReadout {
    /// Magnitude of the z component of angular velocity (rad/s).
    pub magnitude: f32,
    /// Rotational sense.
    pub direction: SpinDirection,
}

impl SpinReadout {
    /// Builds a readout from a body's angular velocity.
    pub fn from_angular_velocity(angular_velocity: Vec3) -> Self {
        let spin_z = angular_velocity.z;
        let direction = if spin_z > 0.0 {
            SpinDirection::CounterClockwise
        } else if spin_z < 0.0 {
            SpinDirection::Clockwise
        } else {
            SpinDirection::None
        };
        Self {
            magnitude: spin_z.abs(),
            direction,
        }
    }

    /// Signed z spin, reconstructed from magnitude and direction.
    pub fn signed(self) -> f32 {
        match self.direction {
            SpinDirection::Clockwise => -self.magnitude,
            _ => self.magnitude,
        }
    }
}
