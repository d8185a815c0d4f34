use crate::analysis::CancelToken;
use crate::conf::{load_config, resolve_config_path};
use crate::logging::init_logging;
use crate::pipeline::{self, RunOutcome};
use crate::report::render_summary;
use anyhow::Result;
use std::path::Path;
use tracing::{error, info};

/// Runs one analysis with the configuration at `config_path` (or the defaults).
///
/// Setup failures are returned. Failures of the run itself are logged and
/// terminate the process with exit code 1 once the log writer is flushed.
pub fn run(config_path: Option<&Path>, summary: bool, cancel: CancelToken) -> Result<()> {
    let source = resolve_config_path(config_path);
    let config = load_config(source.as_deref())?;
    let guard = init_logging(config.script_log.as_deref())?;

    match &source {
        Some(path) => info!(config = %path.display(), "config loaded"),
        None => info!("no config file found, using defaults"),
    }

    match pipeline::run(&config, &cancel) {
        Ok(RunOutcome::Reported(run)) => {
            if summary {
                print!("{}", render_summary(&run));
            }
            Ok(())
        }
        Ok(RunOutcome::NoLogs | RunOutcome::AlreadyReported { .. }) => Ok(()),
        Err(e) => {
            error!(error = %e, "analysis failed");
            drop(guard);
            std::process::exit(1);
        }
    }
}
