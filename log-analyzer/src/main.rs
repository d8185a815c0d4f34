use clap::{Parser, Subcommand};
use log_analyzer_core::analysis::CancelToken;
use log_analyzer_core::cli;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "log-analyzer",
    version,
    about = "Builds a per-url latency report from the newest nginx access log"
)]
struct Cli {
    /// Path to the config file (JSON, or HCL when it ends in .hcl)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze the newest log and write its report (default)
    Run {
        /// Print a summary of the run to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Config { cmd }) => cli::conf::run(cmd, cli.config),
        Some(Command::Run { summary }) => run(cli.config, summary),
        None => run(cli.config, false),
    };

    if let Err(e) = result {
        eprintln!("log-analyzer: {e:#}");
        std::process::exit(1);
    }
}

fn run(config: Option<PathBuf>, summary: bool) -> anyhow::Result<()> {
    let cancel = CancelToken::new();
    let handler = cancel.clone();
    ctrlc::set_handler(move || handler.cancel())?;

    cli::run(config.as_deref(), summary, cancel)
}
