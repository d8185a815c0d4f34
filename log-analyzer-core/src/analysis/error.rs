use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("failed to read log file {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("too many unparsable lines: {failed} of {total} lines failed to parse")]
    ParseThresholdExceeded { failed: u64, total: u64 },

    #[error("analysis cancelled after {lines_read} lines")]
    Cancelled { lines_read: u64 },

    #[error("cannot compute shares of an empty aggregate")]
    DegenerateAggregate,
}

impl AnalysisError {
    pub fn source_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }
}
