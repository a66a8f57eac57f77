use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::Operation;

/// kitplan - Plan component selections for a developer toolkit
#[derive(Parser)]
#[command(name = "kitplan")]
#[command(about = "Reconcile installed and target toolkit components into selection views")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the selection view for a manager operation
    Plan {
        /// Backend snapshot (JSON)
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Operation: modify, update, uninstall-toolkit, uninstall-all
        #[arg(short, long, default_value = "modify")]
        operation: Operation,

        /// Name or `name@version` of an available kit to use as target
        #[arg(short, long)]
        target: Option<String>,

        /// Print the groups as JSON
        #[arg(long)]
        json: bool,
    },
    /// Diff two kit files directly
    Diff {
        /// Installed kit (JSON)
        #[arg(short, long)]
        installed: PathBuf,

        /// Target kit (JSON)
        #[arg(short, long)]
        target: PathBuf,

        #[arg(short, long, default_value = "update")]
        operation: Operation,

        /// Print the groups as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the fresh-install checklist and pending restricted components
    Install {
        /// Backend snapshot (JSON)
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Print the groups as JSON
        #[arg(long)]
        json: bool,
    },
    /// List installed components missing from a target kit
    Removals {
        /// Backend snapshot (JSON)
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Name or `name@version` of an available kit
        #[arg(short, long)]
        target: String,
    },
    /// Report whether a newer toolkit is available
    CheckUpdate {
        /// Backend snapshot (JSON)
        #[arg(short, long)]
        snapshot: PathBuf,
    },
    /// Validate a base configuration file
    ValidateConfig {
        /// Path to configuration file to validate
        config: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Split a `name@version` selector; the version part is optional.
pub fn parse_kit_selector(selector: &str) -> (&str, Option<&str>) {
    match selector.rsplit_once('@') {
        Some((name, version)) if !version.is_empty() => (name, Some(version)),
        _ => (selector.trim_end_matches('@'), None),
    }
}
