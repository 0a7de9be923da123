//! Quaternion orientation integration.
//!
//! Orientations live on the unit-quaternion manifold. Each step composes
//! the current orientation with a small incremental rotation built from
//! the angular velocity, then re-projects onto the manifold by
//! normalization so drift cannot accumulate across an unbounded run.

use glam::{Mat4, Quat, Vec3};

use cogspin_types::constants::EPSILON;

/// Advances an orientation by one timestep of angular velocity.
///
/// Builds the incremental rotation `dq = (1, ω·dt)` — identity-seeded,
/// vector part scaled by the step — and returns `normalize(q ⊗ dq)` using
/// the Hamilton product. First-order integration: accurate for the small
/// per-frame angles this simulation produces, and unconditionally stable
/// thanks to the re-normalization.
///
/// The scalar seed of 1 keeps the product away from zero norm for any
/// finite angular velocity; a near-zero norm can only mean the inputs were
/// already corrupt, so it is asserted rather than recovered.
pub fn integrate_orientation(orientation: Quat, angular_velocity: Vec3, dt: f32) -> Quat {
    let dq = Quat::from_xyzw(
        angular_velocity.x * dt,
        angular_velocity.y * dt,
        angular_velocity.z * dt,
        1.0,
    );
    let q = orientation * dq;

    let norm = q.length();
    assert!(
        norm > EPSILON,
        "orientation integration produced a near-zero quaternion norm ({norm})"
    );
    q * norm.recip()
}

/// Converts a unit orientation quaternion into a 4×4 transform.
///
/// Rotation only: the translation column is zero. The render collaborator
/// composes its own translation from the body's x position.
pub fn orientation_matrix(orientation: Quat) -> Mat4 {
    Mat4::from_quat(orientation)
}
