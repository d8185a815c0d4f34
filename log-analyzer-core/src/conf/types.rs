use crate::analysis::{BreakerParams, DEFAULT_ERROR_THRESHOLD};
use crate::conf::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_REPORT_SIZE: usize = 1000;

/// Resolved configuration for one run.
///
/// Built once at startup and passed by reference; nothing in the pipeline
/// reads configuration from anywhere else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzerConfig {
    /// Number of urls kept in the report.
    pub report_size: usize,

    pub report_dir: PathBuf,

    pub log_dir: PathBuf,

    /// HTML template containing the `$table_json` placeholder.
    pub report_template: PathBuf,

    /// Written with the completion time after every successful report.
    pub ts_file: PathBuf,

    /// Optional log file for the analyzer itself; stdout when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_log: Option<PathBuf>,

    /// Fraction of unparsable lines that aborts the run.
    pub error_threshold: f64,

    /// Lines read before the error threshold is enforced.
    pub min_lines: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            report_size: DEFAULT_REPORT_SIZE,
            report_dir: PathBuf::from("./reports"),
            log_dir: PathBuf::from("./log"),
            report_template: PathBuf::from("./report.html"),
            ts_file: PathBuf::from("/var/tmp/log_analyzer.ts"),
            script_log: None,
            error_threshold: DEFAULT_ERROR_THRESHOLD,
            min_lines: DEFAULT_REPORT_SIZE as u64,
        }
    }
}

impl AnalyzerConfig {
    /// Overlays the keys present in `partial` on top of `self`.
    ///
    /// `min_lines` follows the merged `report_size` unless set explicitly.
    pub fn merge(self, partial: PartialConfig) -> Self {
        let report_size = partial.report_size.unwrap_or(self.report_size);
        let min_lines = partial.min_lines.unwrap_or_else(|| {
            if partial.report_size.is_some() {
                report_size as u64
            } else {
                self.min_lines
            }
        });

        Self {
            report_size,
            report_dir: partial.report_dir.unwrap_or(self.report_dir),
            log_dir: partial.log_dir.unwrap_or(self.log_dir),
            report_template: partial.report_template.unwrap_or(self.report_template),
            ts_file: partial.ts_file.unwrap_or(self.ts_file),
            script_log: partial
                .script_log
                .filter(|p| !p.as_os_str().is_empty())
                .or(self.script_log),
            error_threshold: partial.error_threshold.unwrap_or(self.error_threshold),
            min_lines,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.report_size == 0 {
            return Err(ConfigError::InvalidReportSize);
        }
        if !(0.0..=1.0).contains(&self.error_threshold) {
            return Err(ConfigError::InvalidErrorThreshold {
                value: self.error_threshold,
            });
        }
        Ok(())
    }

    pub fn breaker_params(&self) -> BreakerParams {
        BreakerParams {
            threshold: self.error_threshold,
            min_lines: self.min_lines,
        }
    }
}

/// Configuration as written in a file: every key optional.
///
/// The historical JSON config spells keys in upper case (`"REPORT_SIZE"`);
/// both spellings are accepted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    #[serde(default, alias = "REPORT_SIZE")]
    pub report_size: Option<usize>,

    #[serde(default, alias = "REPORT_DIR")]
    pub report_dir: Option<PathBuf>,

    #[serde(default, alias = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    #[serde(default, alias = "REPORT_TEMPLATE")]
    pub report_template: Option<PathBuf>,

    #[serde(default, alias = "TS_FILE")]
    pub ts_file: Option<PathBuf>,

    #[serde(default, alias = "SCRIPT_LOG")]
    pub script_log: Option<PathBuf>,

    #[serde(default, alias = "ERROR_THRESHOLD")]
    pub error_threshold: Option<f64>,

    #[serde(default, alias = "MIN_LINES")]
    pub min_lines: Option<u64>,
}
