//! Approach controller — the two-state gate in front of the coupling.
//!
//! The spheres close symmetrically along x until the left body reaches
//! the contact threshold. From that frame on the positions freeze and
//! every update reports `Meshed`. The transition is one-way for the
//! process lifetime; no separation is modeled.

use cogspin_types::constants::CONTACT_EPSILON;

/// Discrete contact state of the body pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Still closing distance; the coupling kernel does not run.
    Approaching,
    /// In contact; the coupling kernel runs every frame.
    Meshed,
}

/// Owns the separation state: both x positions and the phase.
#[derive(Debug, Clone)]
pub struct ApproachController {
    left_x: f32,
    right_x: f32,
    contact_threshold: f32,
    approach_step: f32,
    meshed: bool,
}

impl ApproachController {
    /// Creates a controller with the bodies at their starting positions.
    pub fn new(left_x: f32, right_x: f32, contact_threshold: f32, approach_step: f32) -> Self {
        Self {
            left_x,
            right_x,
            contact_threshold,
            approach_step,
            meshed: false,
        }
    }

    /// Advances the approach by one frame and reports the phase.
    ///
    /// While approaching, moves both bodies one step toward each other.
    /// The threshold test tolerates the rounding accumulated by the
    /// repeated fixed-step addition, so contact lands on the exact frame
    /// the ideal arithmetic predicts.
    pub fn update(&mut self) -> Phase {
        if !self.meshed && self.left_x < self.contact_threshold - CONTACT_EPSILON {
            self.left_x += self.approach_step;
            self.right_x -= self.approach_step;
            Phase::Approaching
        } else {
            self.meshed = true;
            Phase::Meshed
        }
    }

    /// Current phase without advancing.
    pub fn phase(&self) -> Phase {
        if self.meshed {
            Phase::Meshed
        } else {
            Phase::Approaching
        }
    }

    /// Left-body x position.
    pub fn left_x(&self) -> f32 {
        self.left_x
    }

    /// Right-body x position.
    pub fn right_x(&self) -> f32 {
        self.right_x
    }
}
