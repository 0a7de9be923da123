//! Simulation event types.
//!
//! Structured events emitted by the frame loop at various points in each
//! frame. Events are lightweight value types that carry just enough data
//! to be useful for monitoring and debugging.

use serde::{Deserialize, Serialize};

use cogspin_types::BodyId;

/// A simulation event emitted by the engine.
///
/// Events are tagged with a frame index and carry domain-specific data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Frame number (0-indexed).
    pub frame: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    /// Frame started.
    FrameBegin {
        /// Whether the bodies are meshed this frame.
        meshed: bool,
    },

    /// Frame completed.
    FrameEnd {
        /// Wall-clock time for the entire frame (seconds).
        wall_time: f64,
    },

    /// The bodies made contact. Emitted exactly once per run.
    PhaseTransition {
        /// Left-body x position at the moment of contact.
        left_x: f32,
    },

    /// A coupling step ran on the accelerator.
    CouplingApplied {
        /// Tangential relative surface speed after the step.
        residual: f32,
    },

    /// Per-body spin readout for the HUD.
    SpinReadout {
        /// Which body.
        body: BodyId,
        /// Signed z component of angular velocity (rad/s).
        spin_z: f32,
    },
}

impl SimulationEvent {
    /// Creates an event for the given frame.
    pub fn new(frame: u32, kind: EventKind) -> Self {
        Self { frame, kind }
    }
}
