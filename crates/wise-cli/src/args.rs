use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::TaskCommands;

/// Terminal console for the wise task backend
///
/// Lists, inspects and drives backend tasks. The `list --watch` and `watch`
/// commands keep refreshing until interrupted.
#[derive(Parser)]
#[command(version, about, name = "wise")]
pub struct Args {
    /// JSON config file. Defaults to $XDG_CONFIG_HOME/wise/config.json when
    /// present
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the REST API, overriding the config file
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Per-request timeout in milliseconds, overriding the config file
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the wise CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect and manage tasks
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
}
