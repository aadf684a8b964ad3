//! Command-line interface for techload
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # Jobs drawn for a key
//! techload generate --key ab123c
//!
//! # Fixed count and date, wrapped in a response envelope
//! techload generate --key ab123c --count 8 --date 1/15/2024 --envelope
//!
//! # Defaults from a profile, YAML to a file
//! TECHLOAD_PROFILE=profile.yaml techload generate --key zz999z --format yaml -o jobs.yaml
//! ```
//!
//! ## Inspect
//! ```bash
//! techload inspect --key ab123c --draws 8
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=debug` for per-job details.

use clap::{Parser, Subcommand};
use techload::commands::{run_generate, run_inspect, GenerateArgs, InspectArgs};

#[derive(Parser)]
#[command(name = "techload")]
#[command(about = "Deterministic synthetic service-ticket generator")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the jobs for a key
    Generate(GenerateArgs),

    /// Show the seed, drawn job count and first cursor draws for a key
    Inspect(InspectArgs),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Inspect(args) => run_inspect(args),
    }
}
