//! Cogspin real-time viewer using Bevy.
//!
//! External collaborator around the simulation core: window and context
//! creation, sphere meshes, draw submission, camera controls, and the
//! HUD text overlay. Each Bevy update steps the simulation exactly once
//! and copies the resulting render frame into entity transforms.

use bevy::app::AppExit;
use bevy::prelude::*;
use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraPlugin};

use cogspin_gpu::CpuFallback;
use cogspin_render::RenderFrame;
use cogspin_sim::{SimConfig, Simulation};
use cogspin_telemetry::TracingSink;
use cogspin_types::{BodyId, CogspinResult};

/// Sphere radius in body-space units. The contact threshold of the
/// simulation corresponds to the toothed surfaces just touching.
const SPHERE_RADIUS: f32 = 1.0;

/// Non-send resource holding the simulation (the telemetry receiver is
/// not `Sync`, so this cannot be a plain Bevy resource).
struct SimRunner {
    sim: Simulation,
}

/// Tags a sphere entity with the body it visualizes.
#[derive(Component)]
struct GearVisual {
    body: BodyId,
}

/// Tags the HUD text entity.
#[derive(Component)]
struct HudText;

/// Launch the Bevy viewer for the given configuration.
pub fn launch_viewer(config: SimConfig) -> CogspinResult<()> {
    let mut sim = Simulation::new(config, Box::new(CpuFallback::new()))?;
    sim.bus_mut()
        .add_sink(Box::new(TracingSink::new(tracing::Level::INFO)));

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Cogspin - Gear Mesh Simulation".to_string(),
            resolution: (1280., 720.).into(),
            ..default()
        }),
        ..default()
    }));
    app.add_plugins(PanOrbitCameraPlugin);

    app.insert_non_send_resource(SimRunner { sim });
    app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.08))); // Dark background

    app.add_systems(Startup, setup_scene);
    app.add_systems(Update, step_simulation);

    app.run();

    Ok(())
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let sphere_mesh = meshes.add(Sphere::new(SPHERE_RADIUS).mesh().uv(48, 24));

    // Contrasting metals so the spin exchange reads at a glance.
    let left_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.8, 0.3, 0.2),
        metallic: 0.7,
        perceptual_roughness: 0.35,
        ..default()
    });
    let right_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.2, 0.4, 0.8),
        metallic: 0.7,
        perceptual_roughness: 0.35,
        ..default()
    });

    commands.spawn((
        PbrBundle {
            mesh: sphere_mesh.clone(),
            material: left_material,
            transform: Transform::from_xyz(-2.0, 0.0, 0.0),
            ..default()
        },
        GearVisual { body: BodyId::Left },
    ));
    commands.spawn((
        PbrBundle {
            mesh: sphere_mesh,
            material: right_material,
            transform: Transform::from_xyz(2.0, 0.0, 0.0),
            ..default()
        },
        GearVisual {
            body: BodyId::Right,
        },
    ));

    // Key light with shadows
    commands.spawn(DirectionalLightBundle {
        directional_light: DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        transform: Transform::from_xyz(4.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
        ..default()
    });

    // Fill light
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 100.0,
    });

    commands.spawn((
        Camera3dBundle {
            transform: Transform::from_xyz(0.0, 2.0, 7.0).looking_at(Vec3::ZERO, Vec3::Y),
            ..default()
        },
        PanOrbitCamera {
            focus: Vec3::ZERO,
            radius: Some(7.0),
            ..default()
        },
    ));

    // HUD: per-body spin readout, updated every frame.
    commands.spawn((
        TextBundle::from_section(
            String::new(),
            TextStyle {
                font_size: 24.0,
                color: Color::WHITE,
                ..default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        }),
        HudText,
    ));
}

fn step_simulation(
    mut runner: NonSendMut<SimRunner>,
    mut gears: Query<(&GearVisual, &mut Transform)>,
    mut hud: Query<&mut Text, With<HudText>>,
    mut exit: EventWriter<AppExit>,
) {
    let frame = match runner.sim.step() {
        Ok(frame) => frame,
        Err(e) => {
            // Per-frame backend failure is fatal: the host must not keep
            // integrating against stale device state.
            eprintln!("Simulation error: {e}");
            exit.send(AppExit::error());
            return;
        }
    };

    for (gear, mut transform) in &mut gears {
        let body = frame.body(gear.body);
        transform.translation = Vec3::new(body.position_x, 0.0, 0.0);
        transform.rotation = frame.orientation(gear.body);
    }

    if let Ok(mut text) = hud.get_single_mut() {
        text.sections[0].value = hud_line(&frame);
    }
}

fn hud_line(frame: &RenderFrame) -> String {
    let left = frame.body(BodyId::Left).spin;
    let right = frame.body(BodyId::Right).spin;
    format!(
        "{} {:.2} {}   |   {} {:.2} {}   |   {}",
        BodyId::Left.label(),
        left.magnitude,
        left.direction.label(),
        BodyId::Right.label(),
        right.magnitude,
        right.direction.label(),
        if frame.meshed { "MESHED" } else { "APPROACHING" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hud_line_formats_both_bodies() {
        let mut sim =
            Simulation::new(SimConfig::default(), Box::new(CpuFallback::new())).unwrap();
        let frame = sim.step().unwrap();
        let line = hud_line(&frame);
        assert!(line.contains("L "));
        assert!(line.contains("R "));
        assert!(line.contains("APPROACHING"));
    }
}
