//! Device-resident body records.
//!
//! One fixed-size record per body lives on the accelerator for the
//! lifetime of the simulation: uploaded once at startup, mutated in
//! place by coupling dispatches, read back by the host every meshed
//! frame. In the CPU fallback the "device" storage is plain host memory.

use cogspin_math::Vec3;

/// Device-side copy of one body's angular velocity.
///
/// In the CPU fallback this is a host array. A real accelerator backend
/// wraps a device buffer handle and stages transfers through it.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyBuffer {
    data: [f32; 3],
}

impl BodyBuffer {
    /// Creates a zeroed record.
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Host-to-device transfer.
    pub fn upload(&mut self, angular_velocity: Vec3) {
        self.data = angular_velocity.to_array();
    }

    /// Device-to-host transfer.
    pub fn read_back(&self) -> Vec3 {
        Vec3::from_array(self.data)
    }

    /// Writes a kernel result back into the record.
    pub fn store(&mut self, value: Vec3) {
        self.data = value.to_array();
    }
}
