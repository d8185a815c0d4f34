//! Streaming parse-and-aggregate pipeline
//!
//! Access log lines flow through a fixed set of stages, each one consuming the
//! output of the previous one:
//!
//! log file (plain or gzip)
//! LogStream      (one line at a time, counts failures, trips the breaker)
//! LineParser     (line -> url + latency)
//! Aggregator     (url -> bucket of latencies, grand totals)
//! compute_table  (per-url shares, average, max, median)
//! select         (top N by total latency)
//!
//! The aggregator has to see the whole stream before any share can be
//! computed, because the shares are relative to whole-file totals.

mod aggregate;
mod cancel;
mod constants;
mod error;
mod histogram;
mod parse;
mod select;
mod stats;
mod stream;
mod types;

#[cfg(test)]
mod tests;

pub use aggregate::Aggregator;
pub use cancel::CancelToken;
pub use constants::{DEFAULT_ERROR_THRESHOLD, LATENCY_BUCKETS_MS};
pub use error::AnalysisError;
pub use histogram::{Histogram, percentile_from_histogram};
pub use parse::LineParser;
pub use select::select;
pub use stats::{compute_table, finalize, median, percentile};
pub use stream::{BreakerParams, LogStream};
pub use types::{GrandTotals, ParseCounters, ParsedEntry, ReportTable, UrlBucket, UrlStats};
