//! Integration tests for cogspin-sim.

use cogspin_gpu::{CouplingBackend, CouplingParams, CpuFallback};
use cogspin_math::Vec3;
use cogspin_sim::{ApproachController, Phase, SimConfig, Simulation};
use cogspin_types::constants::UNIT_NORM_TOLERANCE;
use cogspin_types::{BodyId, CogspinError, CogspinResult};

fn default_sim() -> Simulation {
    Simulation::new(SimConfig::default(), Box::new(CpuFallback::new())).unwrap()
}

// ─── Approach Controller Tests ────────────────────────────────

#[test]
fn gate_meshes_at_frame_100() {
    let config = SimConfig::default();
    let mut gate = ApproachController::new(
        config.left_start_x,
        config.right_start_x,
        config.contact_threshold,
        config.approach_step,
    );

    // From -2.00 with step 0.01: frames 1..=99 approach, frame 100 meshes.
    for frame in 1..=99 {
        assert_eq!(gate.update(), Phase::Approaching, "frame {frame}");
    }
    assert_eq!(gate.update(), Phase::Meshed);
    assert!((gate.left_x() - (-1.01)).abs() < 1e-4);
}

#[test]
fn approach_is_symmetric() {
    let mut gate = ApproachController::new(-2.0, 2.0, -1.01, 0.01);
    gate.update();
    assert!((gate.left_x() - (-1.99)).abs() < 1e-6);
    assert!((gate.right_x() - 1.99).abs() < 1e-6);
}

#[test]
fn meshed_is_permanent_and_positions_freeze() {
    let mut gate = ApproachController::new(-2.0, 2.0, -1.01, 0.01);
    while gate.update() == Phase::Approaching {}

    let (left, right) = (gate.left_x(), gate.right_x());
    for _ in 0..50 {
        assert_eq!(gate.update(), Phase::Meshed);
    }
    assert_eq!(gate.left_x(), left);
    assert_eq!(gate.right_x(), right);
}

// ─── Frame Loop Tests ─────────────────────────────────────────

#[test]
fn contact_lands_on_frame_100() {
    let mut sim = default_sim();
    for _ in 0..150 {
        sim.step().unwrap();
    }
    assert_eq!(sim.contact_frame(), Some(100));
    assert_eq!(sim.phase(), Phase::Meshed);
}

#[test]
fn no_damping_before_contact() {
    let mut sim = default_sim();
    let initial_left = sim.config().left_omega();
    let initial_right = sim.config().right_omega();

    for _ in 0..99 {
        sim.step().unwrap();
        // The coupling kernel has not run, so angular velocities are
        // exactly the initial values: damping only acts post-contact.
        assert_eq!(sim.body(BodyId::Left).angular_velocity, initial_left);
        assert_eq!(sim.body(BodyId::Right).angular_velocity, initial_right);
    }

    sim.step().unwrap();
    assert_ne!(sim.body(BodyId::Left).angular_velocity, initial_left);
}

#[test]
fn loop_invariants_hold_over_long_run() {
    let mut sim = default_sim();
    let max = sim.config().max_angular_speed;

    for _ in 0..600 {
        sim.step().unwrap();
        for id in BodyId::ALL {
            let body = sim.body(id);
            for c in body.angular_velocity.to_array() {
                assert!(c.abs() <= max, "angular velocity component {c} out of bounds");
            }
            assert!(
                (body.orientation.length() - 1.0).abs() < UNIT_NORM_TOLERANCE,
                "orientation drifted off the unit sphere"
            );
        }
    }
}

#[test]
fn bodies_spin_before_contact() {
    // Orientations advance from frame one: initial angular velocities
    // are nonzero, so both bodies spin during the whole approach.
    let mut sim = default_sim();
    sim.step().unwrap();
    let q = sim.body(BodyId::Left).orientation;
    assert!(q.dot(cogspin_math::Quat::IDENTITY).abs() < 1.0 - 1e-6);
}

#[test]
fn simulation_is_deterministic() {
    let run = || {
        let mut sim = default_sim();
        for _ in 0..200 {
            sim.step().unwrap();
        }
        (
            sim.body(BodyId::Left).angular_velocity.to_array(),
            sim.body(BodyId::Right).angular_velocity.to_array(),
            sim.body(BodyId::Left).orientation.to_array(),
            sim.body(BodyId::Right).orientation.to_array(),
        )
    };
    assert_eq!(run(), run());
}

#[test]
fn render_frame_carries_placements() {
    let mut sim = default_sim();
    let frame = sim.step().unwrap();

    assert_eq!(frame.frame, 1);
    assert!(!frame.meshed);
    assert_eq!(
        frame.body(BodyId::Left).position_x,
        sim.body(BodyId::Left).position_x
    );

    // Rotation-only transform: the translation column stays zero.
    let translation = frame.body(BodyId::Right).transform.w_axis;
    assert_eq!(translation.x, 0.0);
    assert_eq!(translation.y, 0.0);
    assert_eq!(translation.z, 0.0);
}

#[test]
fn tangential_spin_converges_after_contact() {
    let mut sim = default_sim();
    for _ in 0..100 {
        sim.step().unwrap();
    }

    let residual_at = |sim: &Simulation| {
        cogspin_gpu::tangential_residual(
            sim.body(BodyId::Left).angular_velocity,
            sim.body(BodyId::Right).angular_velocity,
        )
    };

    let early = residual_at(&sim);
    for _ in 0..500 {
        sim.step().unwrap();
    }
    let late = residual_at(&sim);
    assert!(
        late < early,
        "meshed surfaces should approach lockstep: {late} >= {early}"
    );
}

// ─── Failure Propagation Tests ────────────────────────────────

/// Backend double whose init or dispatch fails on demand.
struct FailingBackend {
    fail_init: bool,
}

impl CouplingBackend for FailingBackend {
    fn init(&mut self, _left: Vec3, _right: Vec3) -> CogspinResult<()> {
        if self.fail_init {
            Err(CogspinError::Backend("allocation failed".into()))
        } else {
            Ok(())
        }
    }

    fn dispatch(&mut self, _params: &CouplingParams) -> CogspinResult<()> {
        Err(CogspinError::Backend("device lost".into()))
    }

    fn read_back(&self) -> CogspinResult<(Vec3, Vec3)> {
        Err(CogspinError::Backend("device lost".into()))
    }

    fn name(&self) -> &str {
        "failing"
    }

    fn is_gpu(&self) -> bool {
        true
    }
}

#[test]
fn init_failure_aborts_before_the_loop() {
    let result = Simulation::new(
        SimConfig::default(),
        Box::new(FailingBackend { fail_init: true }),
    );
    assert!(result.is_err());
}

#[test]
fn dispatch_failure_surfaces_on_the_contact_frame() {
    let mut sim = Simulation::new(
        SimConfig::default(),
        Box::new(FailingBackend { fail_init: false }),
    )
    .unwrap();

    // The kernel is gated off during the approach, so the broken
    // dispatch stays invisible until contact.
    for _ in 0..99 {
        sim.step().unwrap();
    }
    assert!(sim.step().is_err());
}

// ─── Config Tests ─────────────────────────────────────────────

#[test]
fn config_rejects_bad_values() {
    let mut config = SimConfig {
        dt: 0.0,
        ..Default::default()
    };
    assert!(config.validate().is_err());

    config.dt = 1.0 / 60.0;
    config.softness = 1.5;
    assert!(config.validate().is_err());

    config.softness = 0.05;
    config.damping_factor = 0.0;
    assert!(config.validate().is_err());
}

#[test]
fn config_parses_partial_toml() {
    let config = SimConfig::from_toml_str("dt = 0.01\nsoftness = 0.1\n").unwrap();
    assert_eq!(config.dt, 0.01);
    assert_eq!(config.softness, 0.1);
    // Unspecified fields fall back to defaults.
    assert_eq!(config.max_angular_speed, SimConfig::default().max_angular_speed);
}

#[test]
fn config_toml_rejects_invalid_values() {
    assert!(SimConfig::from_toml_str("dt = -1.0\n").is_err());
    assert!(SimConfig::from_toml_str("not valid toml [").is_err());
}
