//! The mesh-coupling kernel.
//!
//! One invocation per meshed frame. Nudges the two bodies toward equal
//! tangential surface speed at the contact point, then damps and clamps
//! both angular velocities. Purely numeric: no fallible operations, and
//! deterministic given its two inputs.

use cogspin_math::Vec3;
use cogspin_types::constants;

/// Contact normal on the left body. The bodies face each other along x.
pub const LEFT_CONTACT_NORMAL: Vec3 = Vec3::X;

/// Contact normal on the right body.
pub const RIGHT_CONTACT_NORMAL: Vec3 = Vec3::NEG_X;

/// Parameters of the coupling kernel.
#[derive(Debug, Clone, Copy)]
pub struct CouplingParams {
    /// Relaxation factor for the tangential correction, in (0, 1].
    pub softness: f32,
    /// Per-step damping factor applied to all components, in (0, 1].
    pub damping_factor: f32,
    /// Clamp bound on every angular velocity component (rad/s).
    pub max_angular_speed: f32,
}

impl Default for CouplingParams {
    fn default() -> Self {
        Self {
            softness: constants::SOFTNESS,
            damping_factor: constants::DAMPING_FACTOR,
            max_angular_speed: constants::MAX_ANGULAR_SPEED,
        }
    }
}

/// Advances both angular velocities by one coupling step, in place.
///
/// Both updates are computed from a consistent pre-step snapshot: the
/// right body's correction must not observe the left body's already
/// corrected velocity within the same step.
///
/// 1. Surface velocity at the contact point: `v = ω × n` per body.
/// 2. Relative surface velocity `v_rel = v_left − v_right`.
/// 3. Tangential correction, scaled by softness, on y/z only. The x
///    component lies along the separation axis and is never coupled.
/// 4. Uniform damping of all components of both bodies.
/// 5. Clamp every component to `±max_angular_speed`.
///
/// Under-relaxation (softness ≪ 1) trades convergence speed for
/// stability: repeated invocation drives `|v_rel.y| + |v_rel.z|` down
/// monotonically instead of overshooting.
pub fn mesh_coupling_step(left: &mut Vec3, right: &mut Vec3, params: &CouplingParams) {
    let omega_left = *left;
    let omega_right = *right;

    let v_left = omega_left.cross(LEFT_CONTACT_NORMAL);
    let v_right = omega_right.cross(RIGHT_CONTACT_NORMAL);
    let v_rel = v_left - v_right;

    left.y -= v_rel.y * params.softness;
    left.z -= v_rel.z * params.softness;
    right.y += v_rel.y * params.softness;
    right.z += v_rel.z * params.softness;

    *left *= params.damping_factor;
    *right *= params.damping_factor;

    let bound = Vec3::splat(params.max_angular_speed);
    *left = left.clamp(-bound, bound);
    *right = right.clamp(-bound, bound);
}

/// Tangential relative surface speed at the contact point.
///
/// `|v_rel.y| + |v_rel.z|` for the current pair of angular velocities.
/// Zero means the meshed surfaces move in lockstep. Reported as the
/// per-frame coupling residual and used to verify convergence.
pub fn tangential_residual(left: Vec3, right: Vec3) -> f32 {
    let v_rel = left.cross(LEFT_CONTACT_NORMAL) - right.cross(RIGHT_CONTACT_NORMAL);
    v_rel.y.abs() + v_rel.z.abs()
}
