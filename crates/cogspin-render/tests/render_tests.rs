//! Integration tests for cogspin-render.

use cogspin_math::{Mat4, Quat, Vec3};
use cogspin_render::{
    BodyFrame, HeadlessRenderer, JsonFrameExporter, RenderFrame, Renderer, SpinDirection,
    SpinReadout,
};
use cogspin_types::BodyId;

fn test_frame(frame: u32) -> RenderFrame {
    let make = |body: BodyId, position_x: f32, spin_z: f32| BodyFrame {
        body,
        transform: Mat4::from_quat(Quat::from_rotation_z(0.3)),
        position_x,
        spin: SpinReadout::from_angular_velocity(Vec3::new(0.0, 0.0, spin_z)),
    };
    RenderFrame {
        frame,
        meshed: false,
        bodies: [make(BodyId::Left, -2.0, 3.0), make(BodyId::Right, 2.0, -1.5)],
    }
}

// ─── SpinReadout Tests ────────────────────────────────────────

#[test]
fn spin_readout_maps_sign_to_direction() {
    let ccw = SpinReadout::from_angular_velocity(Vec3::new(1.0, -2.0, 3.0));
    assert_eq!(ccw.direction, SpinDirection::CounterClockwise);
    assert_eq!(ccw.magnitude, 3.0);
    assert_eq!(ccw.signed(), 3.0);

    let cw = SpinReadout::from_angular_velocity(Vec3::new(0.0, 5.0, -0.25));
    assert_eq!(cw.direction, SpinDirection::Clockwise);
    assert_eq!(cw.magnitude, 0.25);
    assert_eq!(cw.signed(), -0.25);

    let still = SpinReadout::from_angular_velocity(Vec3::new(4.0, 1.0, 0.0));
    assert_eq!(still.direction, SpinDirection::None);
    assert_eq!(still.magnitude, 0.0);
}

#[test]
fn spin_direction_labels() {
    assert_eq!(SpinDirection::Clockwise.label(), "CW");
    assert_eq!(SpinDirection::CounterClockwise.label(), "CCW");
}

// ─── RenderFrame Tests ────────────────────────────────────────

#[test]
fn frame_lookup_by_body_id() {
    let frame = test_frame(7);
    assert_eq!(frame.body(BodyId::Left).position_x, -2.0);
    assert_eq!(frame.body(BodyId::Right).position_x, 2.0);
}

#[test]
fn frame_orientation_round_trips_through_matrix() {
    let frame = test_frame(0);
    let q = frame.orientation(BodyId::Left);
    let expected = Quat::from_rotation_z(0.3);
    assert!(q.dot(expected).abs() > 1.0 - 1e-5);
}

// ─── Renderer Tests ───────────────────────────────────────────

#[test]
fn headless_counts_frames() {
    let mut renderer = HeadlessRenderer::new();
    renderer.init().unwrap();

    for i in 0..10 {
        renderer.submit_frame(&test_frame(i)).unwrap();
    }
    renderer.finalize().unwrap();

    assert_eq!(renderer.frame_count(), 10);
    assert_eq!(renderer.name(), "headless");
}

#[test]
fn json_exporter_writes_animation() {
    let dir = std::env::temp_dir();
    let path = dir.join("cogspin_render_test.json");
    let path_str = path.to_str().unwrap();

    let mut exporter = JsonFrameExporter::new(path_str);
    exporter.init().unwrap();
    exporter.submit_frame(&test_frame(0)).unwrap();
    exporter.submit_frame(&test_frame(1)).unwrap();
    exporter.finalize().unwrap();

    assert_eq!(exporter.frame_count(), 2);

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"frame_count\":2"));

    let _ = std::fs::remove_file(&path);
}
