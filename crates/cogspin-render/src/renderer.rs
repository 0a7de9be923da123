//! Renderer trait and headless implementation.
//!
//! The renderer is called once per frame to present the current body
//! placements. The headless renderer discards all frames, serving as a
//! no-op for headless simulation runs and CI.

use serde::{Deserialize, Serialize};

use cogspin_math::{Mat4, Quat};
use cogspin_types::ids::BODY_COUNT;
use cogspin_types::{BodyId, CogspinResult};

use crate::hud::SpinReadout;

/// Per-body render data for one frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BodyFrame {
    /// Which body this entry places.
    pub body: BodyId,
    /// Orientation as a 4×4 transform, translation column zero.
    pub transform: Mat4,
    /// Current x position along the separation axis.
    pub position_x: f32,
    /// HUD spin readout.
    pub spin: SpinReadout,
}

/// A single render frame: both body placements plus the contact state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderFrame {
    /// Frame number this corresponds to.
    pub frame: u32,
    /// Whether the bodies are meshed.
    pub meshed: bool,
    /// Per-body render data, indexed by `BodyId::index()`.
    pub bodies: [BodyFrame; BODY_COUNT],
}

impl RenderFrame {
    /// Returns the entry for the given body.
    pub fn body(&self, id: BodyId) -> &BodyFrame {
        &self.bodies[id.index()]
    }

    /// Reconstructs the orientation quaternion of the given body.
    pub fn orientation(&self, id: BodyId) -> Quat {
        Quat::from_mat4(&self.body(id).transform)
    }
}

/// Trait for rendering simulation output.
///
/// # Implementations
/// - [`HeadlessRenderer`] — discards frames (headless runs, CI)
/// - [`JsonFrameExporter`](crate::JsonFrameExporter) — JSON animation capture
pub trait Renderer: Send {
    /// Initialize the renderer. Called once before the first frame.
    fn init(&mut self) -> CogspinResult<()>;

    /// Submit a frame for rendering.
    fn submit_frame(&mut self, frame: &RenderFrame) -> CogspinResult<()>;

    /// Finalize rendering (flush buffers, close files, etc.).
    fn finalize(&mut self) -> CogspinResult<()>;

    /// Returns the renderer name.
    fn name(&self) -> &str;

    /// Returns the number of frames submitted.
    fn frame_count(&self) -> u32;
}

/// Headless renderer — discards all frames.
///
/// Used for headless simulation and CI where no visual output is needed.
pub struct HeadlessRenderer {
    frames: u32,
}

impl HeadlessRenderer {
    /// Creates a new headless renderer.
    pub fn new() -> Self {
        Self { frames: 0 }
    }
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for HeadlessRenderer {
    fn init(&mut self) -> CogspinResult<()> {
        Ok(())
    }

    fn submit_frame(&mut self, _frame: &RenderFrame) -> CogspinResult<()> {
        self.frames += 1;
        Ok(())
    }

    fn finalize(&mut self) -> CogspinResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
