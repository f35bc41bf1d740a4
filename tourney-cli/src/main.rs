//! Tourney CLI - Command-line interface
//!
//! Commands:
//! - bounds: Recommended format and Swiss round counts for a field
//! - schedule: Print a round-robin schedule
//! - simulate: Play a full tournament with random results
//! - play: Run a tournament, entering results interactively

mod bounds;
mod play;
mod report;
mod schedule;
mod setup;
mod simulate;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tourney")]
#[command(about = "Round-robin and Swiss tournament pairing")]
struct Cli {
    /// Random seed for reproducible pairings and simulated results
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the automatic format and round bounds for a field
    Bounds(bounds::BoundsArgs),
    /// Print a round-robin schedule
    Schedule(schedule::ScheduleArgs),
    /// Simulate a tournament with random results
    Simulate(simulate::SimulateArgs),
    /// Run a tournament, reading results from stdin
    Play(play::PlayArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG overrides the default level
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Bounds(args) => bounds::run(args),
        Commands::Schedule(args) => schedule::run(args),
        Commands::Simulate(args) => simulate::run(args, cli.seed),
        Commands::Play(args) => play::run(args, cli.seed),
    }
}
