//! Cogspin CLI — headless simulation, the Bevy viewer, and config inspection.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cogspin")]
#[command(version, about = "Cogspin — gear-meshing sphere simulation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a headless simulation.
    Simulate {
        /// Number of frames to run.
        #[arg(short, long, default_value_t = 600)]
        frames: u32,

        /// Path to simulation config (TOML). Defaults apply when omitted.
        #[arg(short, long)]
        config: Option<String>,

        /// Capture the animation to a JSON file.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Launch the real-time viewer.
    View {
        /// Path to simulation config (TOML). Defaults apply when omitted.
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Print the effective configuration.
    Inspect {
        /// Path to simulation config (TOML). Defaults apply when omitted.
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            frames,
            config,
            output,
        } => commands::simulate(frames, config.as_deref(), output.as_deref()),
        Commands::View { config } => commands::view(config.as_deref()),
        Commands::Inspect { config } => commands::inspect(config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
