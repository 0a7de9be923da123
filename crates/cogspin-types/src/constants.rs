//! Physical constants and simulation defaults.

/// Relaxation factor for the mesh-coupling correction. Scales how much of
/// the tangential relative surface velocity is exchanged per step; values
/// near 1 resolve the constraint in one step but overshoot and oscillate.
pub const SOFTNESS: f32 = 0.05;

/// Per-step angular velocity damping factor applied during coupling.
pub const DAMPING_FACTOR: f32 = 0.995;

/// Maximum magnitude of any angular velocity component (rad/s).
pub const MAX_ANGULAR_SPEED: f32 = 5.0;

/// Left-body x position at which the spheres make contact (body-space units).
pub const CONTACT_THRESHOLD: f32 = -1.01;

/// Per-frame translation step during the approach phase.
pub const APPROACH_STEP: f32 = 0.01;

/// Tolerance on the contact threshold test. Absorbs the rounding
/// accumulated by repeated addition of the approach step, which would
/// otherwise delay the contact frame by one.
pub const CONTACT_EPSILON: f32 = 1.0e-4;

/// Default simulation timestep (seconds). 1/60th of a second.
pub const DEFAULT_DT: f32 = 1.0 / 60.0;

/// Epsilon for floating-point comparisons.
pub const EPSILON: f32 = 1.0e-7;

/// Tolerance on the unit-norm orientation invariant.
pub const UNIT_NORM_TOLERANCE: f32 = 1.0e-5;
