//! trackgen - command line front end for the Rainbow Racer track generator
//!
//! # Commands
//!
//! - `trackgen list` - List built-in courses
//! - `trackgen inspect <course>` - Show segments, sampling and validation issues
//! - `trackgen generate <course>` - Generate a track and write it as JSON
//! - `trackgen probe <course> --x --z` - Query the track boundary at a point
//!
//! `<course>` is a built-in course id or a path to a `.toml`/`.json` course file.
//! Set `RUST_LOG=debug` for per-kind artifact counts.

mod course;
mod generate;
mod inspect;
mod list;
mod probe;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// trackgen - procedural track generator for Rainbow Racer courses
#[derive(Parser)]
#[command(name = "trackgen")]
#[command(about = "Procedural track generator for Rainbow Racer courses")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List built-in courses
    List(list::ListArgs),

    /// Show segments, sample counts, lengths and validation issues
    Inspect(inspect::InspectArgs),

    /// Generate a track and write polyline, anchors and artifacts as JSON
    Generate(generate::GenerateArgs),

    /// Report the nearest centerline point and whether a point is on the track
    Probe(probe::ProbeArgs),
}

fn main() -> Result<()> {
    // Logs go to stderr so `generate` can stream JSON on stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List(args) => list::execute(args),
        Commands::Inspect(args) => inspect::execute(args),
        Commands::Generate(args) => generate::execute(args),
        Commands::Probe(args) => probe::execute(args),
    }
}
