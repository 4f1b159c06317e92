//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose) are inherited by all subcommands
//! - Options left out fall back to `~/.cast/config.toml`, then built-in defaults

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::ports::ConflictDecision;
use crate::domain::value_objects::Lang;

/// Non-interactive answer for unmanaged conflicts
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnConflict {
    /// Rename existing files out of the way
    Backup,
    /// Delete existing files
    Remove,
}

impl OnConflict {
    /// The decision this answer stands for, given the backup suffix in effect
    pub fn decision(self, suffix: &str) -> ConflictDecision {
        match self {
            OnConflict::Backup => ConflictDecision::backup(suffix),
            OnConflict::Remove => ConflictDecision::Remove,
        }
    }
}

/// cast - deploy bundles with conflict-aware placement and deployment history
#[derive(Parser, Debug)]
#[command(name = "cast")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract a bundle into a target directory and record it
    Deploy(DeployArgs),

    /// Show the deployment history of a target directory
    History {
        /// Target directory
        #[arg(short, long)]
        target: PathBuf,

        /// Deploy host (user@host); local when omitted
        #[arg(long)]
        host: Option<String>,

        /// Only show the most recent N deployments
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Read or change user settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args, Debug, Clone)]
pub struct DeployArgs {
    /// Bundle (.tar.gz) location on the deploy host
    #[arg(short, long)]
    pub bundle: PathBuf,

    /// Target directory on the deploy host
    #[arg(short, long)]
    pub target: PathBuf,

    /// Deploy host (user@host); local when omitted
    #[arg(long)]
    pub host: Option<String>,

    /// Bundle name recorded in the history (default: bundle file name)
    #[arg(long)]
    pub name: Option<String>,

    /// Bundle hash recorded in the history (default: SHA-256 of the bundle)
    #[arg(long)]
    pub hash: Option<String>,

    /// Message language (zh, en)
    #[arg(long)]
    pub lang: Option<Lang>,

    /// Answer the unmanaged-conflict prompt up front
    #[arg(long, value_enum)]
    pub on_conflict: Option<OnConflict>,

    /// Suffix for backups (default from config, then ".bak")
    #[arg(long)]
    pub backup_suffix: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Set the message language
    Lang {
        /// Language code (zh, en)
        code: Lang,
    },

    /// Print the effective configuration
    Show,
}
