//! Coupling backend trait and CPU fallback.
//!
//! The [`CouplingBackend`] trait defines the accelerator lifecycle the
//! frame loop depends on: allocate per-body records at init, dispatch the
//! coupling kernel once per meshed frame, read the results back before
//! integration. The [`CpuFallback`] implementation executes the kernel
//! inline with identical numerics, serving as the correctness reference.

use cogspin_math::Vec3;
use cogspin_types::{CogspinError, CogspinResult};

use crate::buffers::BodyBuffer;
use crate::kernel::{mesh_coupling_step, CouplingParams};

/// Trait for accelerator backends executing the mesh-coupling kernel.
///
/// Dispatch is blocking: when [`dispatch`](CouplingBackend::dispatch)
/// returns, the device-resident records hold the post-step velocities and
/// [`read_back`](CouplingBackend::read_back) observes them. The frame loop
/// relies on this ordering — read-back happens after dispatch and before
/// orientation integration, every frame.
///
/// # Implementations
/// - [`CpuFallback`] — inline host execution (always available)
pub trait CouplingBackend: Send {
    /// Allocates the per-body device records and uploads the initial
    /// angular velocities. Called once at startup; failure is fatal and
    /// must abort before the render loop starts.
    fn init(&mut self, left: Vec3, right: Vec3) -> CogspinResult<()>;

    /// Runs one coupling step on the device-resident records.
    ///
    /// Device state persists across dispatches, so no upload is needed
    /// between frames. Failure is fatal: a silently skipped step would
    /// desynchronize host and device state.
    fn dispatch(&mut self, params: &CouplingParams) -> CogspinResult<()>;

    /// Copies both post-step angular velocities back to the host.
    fn read_back(&self) -> CogspinResult<(Vec3, Vec3)>;

    /// Returns the backend name (e.g., "cpu_fallback").
    fn name(&self) -> &str;

    /// Returns true if the backend offloads to a real accelerator.
    fn is_gpu(&self) -> bool;
}

/// CPU fallback backend — executes the kernel inline on the host.
///
/// Always available, used for:
/// - Platforms without an accelerator
/// - Correctness validation (device results should match this)
/// - Headless simulation and tests
pub struct CpuFallback {
    bodies: Option<[BodyBuffer; 2]>,
}

impl CpuFallback {
    /// Creates an uninitialized CPU fallback backend.
    pub fn new() -> Self {
        Self { bodies: None }
    }
}

impl Default for CpuFallback {
    fn default() -> Self {
        Self::new()
    }
}

impl CouplingBackend for CpuFallback {
    fn init(&mut self, left: Vec3, right: Vec3) -> CogspinResult<()> {
        let mut left_buf = BodyBuffer::zeroed();
        let mut right_buf = BodyBuffer::zeroed();
        left_buf.upload(left);
        right_buf.upload(right);
        self.bodies = Some([left_buf, right_buf]);
        Ok(())
    }

    fn dispatch(&mut self, params: &CouplingParams) -> CogspinResult<()> {
        let bodies = self.bodies.as_mut().ok_or_else(|| {
            CogspinError::Backend("dispatch before init: no device records allocated".into())
        })?;

        let mut left = bodies[0].read_back();
        let mut right = bodies[1].read_back();
        mesh_coupling_step(&mut left, &mut right, params);
        bodies[0].store(left);
        bodies[1].store(right);

        Ok(())
    }

    fn read_back(&self) -> CogspinResult<(Vec3, Vec3)> {
        let bodies = self.bodies.as_ref().ok_or_else(|| {
            CogspinError::Backend("read-back before init: no device records allocated".into())
        })?;
        Ok((bodies[0].read_back(), bodies[1].read_back()))
    }

    fn name(&self) -> &str {
        "cpu_fallback"
    }

    fn is_gpu(&self) -> bool {
        false
    }
}
