use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // IO
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parsing
    #[error("failed to parse JSON in {path}: {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse HCL in {path}: {source}")]
    ParseHcl {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    // Validation
    #[error("report_size must be greater than zero")]
    InvalidReportSize,

    #[error("error_threshold must be between 0 and 1, got {value}")]
    InvalidErrorThreshold { value: f64 },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }
}
