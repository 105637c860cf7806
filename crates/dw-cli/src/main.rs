//! Command-line frontend for the Darkwood text adventure.

mod commands;
mod terminal;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "darkwood",
    about = "Darkwood: a branching text adventure with dice combat",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the adventure
    Play {
        /// RNG seed for reproducible rolls (default: OS entropy)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Character name (default: asked on startup)
        #[arg(short, long)]
        name: Option<String>,

        /// Skip the pauses between combat steps
        #[arg(long)]
        no_pause: bool,
    },

    /// Validate the built-in story graph
    Check,

    /// List the scenes of the built-in story
    Scenes {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Log to stderr so the narrative on stdout stays clean. Defaults to `warn`;
/// `RUST_LOG` overrides.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let result = match cli.command {
        Commands::Play {
            seed,
            name,
            no_pause,
        } => commands::play::run(seed, name, no_pause),
        Commands::Check => commands::check::run(),
        Commands::Scenes { json } => commands::scenes::run(json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
