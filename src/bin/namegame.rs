//! namegame CLI - Exposure analysis for networked naming-game experiments
//!
//! This CLI provides a unified interface for:
//! - Comparing counterfactual exposure strategies on one game
//! - Simulating the value of additional names
//! - Timing first matches against unstructured exposure
//! - Summarising many games by experimental condition

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "namegame")]
#[command(version, about = "Exposure analysis for networked naming games", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare an exposure strategy with the real extra names
    Compare(namegame::cli::commands::compare::CompareArgs),

    /// Simulate how much additional names would reduce divergence
    Gain(namegame::cli::commands::gain::GainArgs),

    /// Time first matches against unstructured exposure
    FirstMatch(namegame::cli::commands::first_match::FirstMatchArgs),

    /// Run every strategy over many games and pool by condition
    Summarize(namegame::cli::commands::summarize::SummarizeArgs),
}

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    match cli.command {
        Commands::Compare(args) => namegame::cli::commands::compare::execute(args),
        Commands::Gain(args) => namegame::cli::commands::gain::execute(args),
        Commands::FirstMatch(args) => namegame::cli::commands::first_match::execute(args),
        Commands::Summarize(args) => namegame::cli::commands::summarize::execute(args),
    }
}
