//! Ember CLI - inspect motion curves and simulate swings

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{curve, simulate, validate};

#[derive(Parser)]
#[command(name = "ember")]
#[command(about = "Motion curves and sub-frame interpolation for swing animations", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a curve's segments and a table of sampled values
    Curve {
        /// Curve name (stock or from --curves)
        name: String,

        /// Additional .curves.toml file
        #[arg(long)]
        curves: Option<String>,

        /// Number of samples across [0, 1]
        #[arg(long, default_value = "21")]
        samples: usize,
    },

    /// Validate a .curves.toml file
    Validate {
        /// Path to curve file
        file: String,
    },

    /// Run a swing at a fixed tick rate and print interpolated frames as JSON
    Simulate {
        /// Path to swing config (TOML)
        #[arg(long)]
        config: Option<String>,

        /// Additional .curves.toml file
        #[arg(long)]
        curves: Option<String>,

        /// Simulation tick rate
        #[arg(long, default_value = "60")]
        tick_hz: f64,

        /// Presentation refresh rate
        #[arg(long, default_value = "144")]
        refresh_hz: f64,

        /// Frames to present (default: until the swing ends)
        #[arg(long)]
        frames: Option<usize>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Curve {
            name,
            curves,
            samples,
        } => curve::run(&name, curves.as_deref(), samples),
        Commands::Validate { file } => validate::run(&file),
        Commands::Simulate {
            config,
            curves,
            tick_hz,
            refresh_hz,
            frames,
        } => simulate::run(simulate::SimulateArgs {
            config,
            curves,
            tick_hz,
            refresh_hz,
            frames,
        }),
    }
}
