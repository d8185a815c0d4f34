use crate::conf::{AnalyzerConfig, ConfigError, load_config};
use crate::report::{PLACEHOLDER, ReportTemplate};
use std::path::Path;

/// Outcome of one check: the message, and whether it passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckLine {
    pub ok: bool,
    pub message: String,
}

impl CheckLine {
    fn pass(message: String) -> Self {
        Self { ok: true, message }
    }

    fn fail(message: String) -> Self {
        Self { ok: false, message }
    }
}

pub fn check(path: Option<&Path>) -> anyhow::Result<()> {
    match load_config(path) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");

            let lines = check_config(&cfg);
            for line in &lines {
                let mark = if line.ok { "✔" } else { "✘" };
                println!("{mark} {}", line.message);
            }

            if lines.iter().any(|l| !l.ok) {
                std::process::exit(1);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("{err}");
            if let Some(hint) = config_error_hint(&err) {
                eprintln!();
                eprintln!("{hint}");
            }
            std::process::exit(1);
        }
    }
}

/// Checks a loaded config against the filesystem.
pub fn check_config(cfg: &AnalyzerConfig) -> Vec<CheckLine> {
    let mut lines = vec![
        CheckLine::pass(format!("report_size = {}", cfg.report_size)),
        CheckLine::pass(format!(
            "error_threshold = {} after {} lines",
            cfg.error_threshold, cfg.min_lines
        )),
    ];

    if cfg.log_dir.is_dir() {
        lines.push(CheckLine::pass(format!("log_dir {}", cfg.log_dir.display())));
    } else {
        lines.push(CheckLine::fail(format!(
            "log_dir {} does not exist",
            cfg.log_dir.display()
        )));
    }

    match ReportTemplate::load(&cfg.report_template) {
        Ok(_) => lines.push(CheckLine::pass(format!(
            "report_template {} contains {PLACEHOLDER}",
            cfg.report_template.display()
        ))),
        Err(e) => lines.push(CheckLine::fail(e.to_string())),
    }

    lines
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::ParseJson { .. } => Some(
            "JSON configs hold a single object; every key is optional.\n\
             \n\
             Example:\n\
             \n\
             {\"REPORT_SIZE\": 1000, \"LOG_DIR\": \"./log\"}",
        ),

        ConfigError::ParseHcl { .. } => Some(
            "HCL configs are plain attributes; every key is optional.\n\
             \n\
             Example:\n\
             \n\
             report_size = 1000\n\
             log_dir     = \"./log\"",
        ),

        ConfigError::InvalidErrorThreshold { .. } => Some(
            "error_threshold is the tolerated fraction of unparsable lines.\n\
             \n\
             Use a value between 0 and 1, e.g. 0.4.",
        ),

        _ => None,
    }
}
