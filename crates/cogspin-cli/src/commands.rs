//! CLI command implementations.

use cogspin_gpu::CpuFallback;
use cogspin_render::{HeadlessRenderer, JsonFrameExporter, Renderer};
use cogspin_sim::{Phase, SimConfig, Simulation};
use cogspin_telemetry::TracingSink;
use cogspin_types::{BodyId, CogspinResult};

fn load_config(path: Option<&str>) -> CogspinResult<SimConfig> {
    match path {
        Some(p) => SimConfig::from_toml_path(p),
        None => Ok(SimConfig::default()),
    }
}

/// Run a headless simulation and print a summary.
pub fn simulate(frames: u32, config_path: Option<&str>, output: Option<&str>) -> CogspinResult<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let config = load_config(config_path)?;
    let mut sim = Simulation::new(config, Box::new(CpuFallback::new()))?;
    sim.bus_mut()
        .add_sink(Box::new(TracingSink::new(tracing::Level::INFO)));

    let mut renderer: Box<dyn Renderer> = match output {
        Some(path) => Box::new(JsonFrameExporter::new(path)),
        None => Box::new(HeadlessRenderer::new()),
    };
    renderer.init()?;

    println!("Cogspin Simulation");
    println!("──────────────────");
    println!("Backend:  {}", sim.backend_name());
    println!("Frames:   {frames}");
    println!();

    for _ in 0..frames {
        let frame = sim.step()?;
        renderer.submit_frame(&frame)?;
    }

    renderer.finalize()?;
    sim.shutdown();

    let phase = match sim.phase() {
        Phase::Approaching => "approaching",
        Phase::Meshed => "meshed",
    };
    println!("Final phase:    {phase}");
    match sim.contact_frame() {
        Some(frame) => println!("Contact frame:  {frame}"),
        None => println!("Contact frame:  (not reached)"),
    }
    for id in BodyId::ALL {
        let omega = sim.body(id).angular_velocity;
        println!(
            "Body {}: angular velocity [{:.4}, {:.4}, {:.4}]",
            id.label(),
            omega.x,
            omega.y,
            omega.z
        );
    }
    if let Some(path) = output {
        println!("Animation:      {path} ({} frames)", renderer.frame_count());
    }

    Ok(())
}

/// Launch the real-time viewer.
pub fn view(config_path: Option<&str>) -> CogspinResult<()> {
    let config = load_config(config_path)?;
    cogspin_viewer::launch_viewer(config)
}

/// Print the effective configuration as TOML.
pub fn inspect(config_path: Option<&str>) -> CogspinResult<()> {
    let config = load_config(config_path)?;
    let text = toml::to_string_pretty(&config)
        .map_err(|e| cogspin_types::CogspinError::Serialization(e.to_string()))?;
    println!("{text}");
    Ok(())
}
