//! proj-audit CLI
//!
//! Inspect and validate the configuration documents proj-audit runs on.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // A second init (e.g. under a test harness) is harmless
    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Commands::Config(args) => commands::run_config(&args),
        Commands::Check { file, kind } => commands::run_check(&file, kind),
        Commands::Parse { file, json } => commands::run_parse(&file, json),
    }
}
