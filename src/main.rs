//! cast CLI - deploy bundles with conflict-aware placement
//!
//! Usage: cast <COMMAND>
//!
//! Commands:
//!   deploy   Extract a bundle into a target directory and record it
//!   history  Show the deployment history of a target directory
//!   config   Read or change user settings

mod commands;

use anyhow::Result;
use cast::presentation::cli::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Deploy(args) => commands::deploy::cmd_deploy(args, cli.json),
        Commands::History {
            target,
            host,
            limit,
        } => commands::history::cmd_history(&target, host.as_deref(), limit, cli.json),
        Commands::Config { action } => commands::config::cmd_config(action, cli.json),
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
