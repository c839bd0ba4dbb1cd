//! qNoise CLI - Command Line Colored Noise Generation
//!
//! Operational entry point for the qnoise library.
//!
//! # Commands
//!
//! - `qnoise generate` - q-generalized colored noise series
//! - `qnoise ou` - colored Gaussian (Ornstein-Uhlenbeck) noise series
//! - `qnoise white` - Gaussian white noise series
//!
//! Each command writes a newline-delimited sequence of decimal
//! floating-point samples, one per line, in generation order.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod output;

pub use error::{CliError, Result};

/// qNoise colored noise generator CLI
#[derive(Parser)]
#[command(name = "qnoise")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate q-generalized colored noise
    Generate {
        /// Correlation time of the noise (tau > 0)
        #[arg(long)]
        tau: f64,

        /// Sampling resolution in steps per unit time (H > 0)
        #[arg(long)]
        resolution: f64,

        /// Shape parameter: 1 = Gaussian, < 1 bounded, > 1 heavy-tailed
        #[arg(short)]
        q: f64,

        /// Number of samples to record
        #[arg(short = 'n', long)]
        samples: usize,

        /// Seed for reproducible runs; omit for entropy seeding
        #[arg(short, long)]
        seed: Option<u64>,

        /// Transient steps to discard; omit for the automatic window
        #[arg(long)]
        transient: Option<usize>,

        /// Rescale the correlation time so it stays comparable across q
        #[arg(long)]
        normalised: bool,

        /// Output file path, or '-' for stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Generate colored Gaussian (Ornstein-Uhlenbeck) noise
    Ou {
        /// Correlation time of the noise (tau > 0)
        #[arg(long)]
        tau: f64,

        /// Sampling resolution in steps per unit time (H > 0)
        #[arg(long)]
        resolution: f64,

        /// Number of samples to record
        #[arg(short = 'n', long)]
        samples: usize,

        /// Seed for reproducible runs; omit for entropy seeding
        #[arg(short, long)]
        seed: Option<u64>,

        /// Transient steps to discard; omit for the automatic window
        #[arg(long)]
        transient: Option<usize>,

        /// Output file path, or '-' for stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Generate Gaussian white noise
    White {
        /// Number of samples to record
        #[arg(short = 'n', long)]
        samples: usize,

        /// Seed for reproducible runs; omit for entropy seeding
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output file path, or '-' for stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            tau,
            resolution,
            q,
            samples,
            seed,
            transient,
            normalised,
            output,
        } => commands::generate::run(
            tau,
            resolution,
            q,
            samples,
            seed,
            transient,
            normalised,
            output.as_deref(),
        ),
        Commands::Ou {
            tau,
            resolution,
            samples,
            seed,
            transient,
            output,
        } => commands::ou::run(tau, resolution, samples, seed, transient, output.as_deref()),
        Commands::White {
            samples,
            seed,
            output,
        } => commands::white::run(samples, seed, output.as_deref()),
    }
}
