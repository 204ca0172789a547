//! Binary entry point for directions.
//!
//! This binary provides the CLI and hook interface for directions.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]

mod commands;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use commands::{CommandContext, HookEvent, cmd_hook, cmd_mappings, cmd_status, cmd_suggest};
use directions::DirectionsConfig;
use directions::observability::{self, LoggingConfig};

/// Directions - documentation routing and project context for AI coding assistants.
#[derive(Parser)]
#[command(name = "directions")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true, env = "DIRECTIONS_CONFIG_PATH")]
    config: Option<PathBuf>,

    /// Project root (defaults to `CLAUDE_PROJECT_DIR`, then the current directory).
    #[arg(short, long, global = true)]
    project_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Handle Claude Code hooks.
    Hook {
        /// Hook event type.
        #[command(subcommand)]
        event: HookEvent,
    },

    /// Suggest documentation for a prompt.
    Suggest {
        /// The prompt text.
        prompt: String,
    },

    /// Show the session context for the project.
    Status,

    /// List keyword mappings in priority order.
    Mappings,
}

/// Main entry point.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    let logging = LoggingConfig::from_settings(Some(&config.logging), cli.verbose);
    if let Err(e) = observability::init(logging) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    let ctx = CommandContext::new(config, cli.project_dir);
    let result = match cli.command {
        Commands::Hook { event } => cmd_hook(event, &ctx),
        Commands::Suggest { prompt } => cmd_suggest(&prompt, &ctx),
        Commands::Status => cmd_status(&ctx),
        Commands::Mappings => cmd_mappings(&ctx),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        },
    }
}

/// Loads configuration from an explicit path or the default locations.
fn load_config(path: Option<&Path>) -> directions::Result<DirectionsConfig> {
    path.map_or_else(
        || Ok(DirectionsConfig::load_default()),
        DirectionsConfig::load_from_file,
    )
}
