mod check;
mod dump;
mod init;

pub use check::*;
use clap::Subcommand;
pub use dump::*;
pub use init::*;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to the config file (defaults to --config or log_analyzer.conf)
        path: Option<PathBuf>,
    },

    /// Print resolved configuration
    Dump {
        path: Option<PathBuf>,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },

    /// Write a default config and report template
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

/// Dispatches a config subcommand; `fallback` is the global `--config`.
pub fn run(cmd: ConfigCmd, fallback: Option<PathBuf>) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path } => check(path.or(fallback).as_deref()),
        ConfigCmd::Dump { path, json, yaml } => dump(path.or(fallback).as_deref(), json, yaml),
        ConfigCmd::Init { path } => init(&path),
    }
}
