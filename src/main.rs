//! IR Coverage CLI
//!
//! Reports how much of a trace's timeline is covered by interaction records.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use ir_coverage::commands::{display_version, execute_report, validate_model_file, ReportArgs};
use ir_coverage::utils::config::{DEFAULT_MODEL_PATH, MODEL_PATH_ENV};

/// IR Coverage - interaction-record coverage for trace models
#[derive(Parser, Debug)]
#[command(name = "ir-coverage")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute coverage for a trace model snapshot
    Report {
        /// Path to the trace model JSON
        #[arg(short, long, env = MODEL_PATH_ENV, default_value = DEFAULT_MODEL_PATH)]
        model: PathBuf,

        /// Print every report field instead of the summary line
        #[arg(long)]
        detailed: bool,
    },

    /// Validate a trace model snapshot
    Validate {
        /// Path to the trace model JSON
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Report { model, detailed } => {
            let args = ReportArgs {
                model_path: model,
                detailed,
            };
            execute_report(&args)?;
        }

        Commands::Validate { file } => {
            validate_model_file(&file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
