use crate::analysis::cancel::CancelToken;
use crate::analysis::error::AnalysisError;
use crate::analysis::parse::LineParser;
use crate::analysis::types::{ParseCounters, ParsedEntry};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Error-rate circuit breaker settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakerParams {
    /// Fraction of failed lines that is tolerated (e.g. `0.4`).
    pub threshold: f64,
    /// The breaker never trips before this many lines were read.
    pub min_lines: u64,
}

impl BreakerParams {
    pub fn tripped(&self, counters: &ParseCounters) -> bool {
        counters.total_lines >= self.min_lines
            && counters.failed_lines as f64 > self.threshold * counters.total_lines as f64
    }
}

enum Source {
    Pending,
    Open(Box<dyn BufRead>),
    Closed,
}

/// Lazy, forward-only reader over one access log.
///
/// Yields one item per physical line: `Ok(Some(entry))` when the line parsed,
/// `Ok(None)` when it did not. The file is opened on the first call to
/// `next()` and released on end of file, on any error item, on [`close`], or
/// when the stream is dropped. After an error item the stream is finished.
///
/// [`close`]: LogStream::close
pub struct LogStream {
    path: PathBuf,
    source: Source,
    parser: LineParser,
    breaker: BreakerParams,
    cancel: CancelToken,
    counters: ParseCounters,
    line: Vec<u8>,
}

impl LogStream {
    pub fn open(path: impl Into<PathBuf>, breaker: BreakerParams, cancel: CancelToken) -> Self {
        Self {
            path: path.into(),
            source: Source::Pending,
            parser: LineParser::new(),
            breaker,
            cancel,
            counters: ParseCounters::default(),
            line: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn counters(&self) -> ParseCounters {
        self.counters
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.source, Source::Closed)
    }

    /// Releases the file. Further calls to `next()` return `None`.
    pub fn close(&mut self) {
        if matches!(self.source, Source::Open(_)) {
            debug!(path = %self.path.display(), "log file closed");
        }
        self.source = Source::Closed;
    }

    fn acquire(&mut self) -> Result<(), AnalysisError> {
        let file = File::open(&self.path)
            .map_err(|e| AnalysisError::source_unavailable(&self.path, e))?;

        let reader: Box<dyn BufRead> = if is_gzip(&self.path) {
            Box::new(BufReader::new(MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };

        info!(path = %self.path.display(), "log file opened");
        self.source = Source::Open(reader);
        Ok(())
    }

    fn fail(&mut self, err: AnalysisError) -> Option<Result<Option<ParsedEntry>, AnalysisError>> {
        self.close();
        Some(Err(err))
    }
}

impl Iterator for LogStream {
    type Item = Result<Option<ParsedEntry>, AnalysisError>;

    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.source, Source::Pending) {
            if let Err(e) = self.acquire() {
                return self.fail(e);
            }
        }

        if matches!(self.source, Source::Closed) {
            return None;
        }

        if self.cancel.is_cancelled() {
            warn!(
                path = %self.path.display(),
                lines = self.counters.total_lines,
                "log read cancelled"
            );
            let lines_read = self.counters.total_lines;
            return self.fail(AnalysisError::Cancelled { lines_read });
        }

        self.line.clear();
        let read = match &mut self.source {
            Source::Open(reader) => reader.read_until(b'\n', &mut self.line),
            _ => return None,
        };

        match read {
            Ok(0) => {
                info!(
                    path = %self.path.display(),
                    total = self.counters.total_lines,
                    failed = self.counters.failed_lines,
                    "end of log file"
                );
                self.close();
                return None;
            }
            Ok(_) => {}
            Err(e) => {
                let err = AnalysisError::source_unavailable(&self.path, e);
                return self.fail(err);
            }
        }

        let entry = self.parser.parse(&String::from_utf8_lossy(&self.line));

        self.counters.total_lines += 1;
        if entry.is_none() {
            self.counters.failed_lines += 1;
            debug!(line = self.counters.total_lines, "unparsable log line");
        }

        if self.breaker.tripped(&self.counters) {
            let ParseCounters {
                total_lines: total,
                failed_lines: failed,
            } = self.counters;
            return self.fail(AnalysisError::ParseThresholdExceeded { failed, total });
        }

        Some(Ok(entry))
    }
}

impl FusedIterator for LogStream {}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
