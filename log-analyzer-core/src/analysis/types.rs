use serde::Serialize;

/// One successfully parsed access log line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEntry {
    /// Request target, verbatim (query string included, nothing decoded).
    pub url: String,
    /// Request time in seconds.
    pub latency: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseCounters {
    pub total_lines: u64,
    pub failed_lines: u64,
}

impl ParseCounters {
    pub fn parsed_lines(&self) -> u64 {
        self.total_lines - self.failed_lines
    }

    pub fn error_rate(&self) -> f64 {
        if self.total_lines == 0 {
            return 0.0;
        }
        self.failed_lines as f64 / self.total_lines as f64
    }
}

/// All latency samples seen for one url.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrlBucket {
    latencies: Vec<f64>,
    running_sum: f64,
}

impl UrlBucket {
    pub(crate) fn push(&mut self, latency: f64) {
        self.latencies.push(latency);
        self.running_sum += latency;
    }

    /// Concatenates the samples of another bucket for the same url.
    pub(crate) fn absorb(&mut self, other: UrlBucket) {
        self.latencies.extend(other.latencies);
        self.running_sum += other.running_sum;
    }

    pub(crate) fn sort(&mut self) {
        self.latencies.sort_by(f64::total_cmp);
    }

    pub fn latencies(&self) -> &[f64] {
        &self.latencies
    }

    pub fn running_sum(&self) -> f64 {
        self.running_sum
    }

    pub fn len(&self) -> usize {
        self.latencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latencies.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GrandTotals {
    pub all_count: u64,
    pub all_latency_sum: f64,
}

impl GrandTotals {
    /// Shares are undefined when either total is zero.
    pub fn is_degenerate(&self) -> bool {
        self.all_count == 0 || self.all_latency_sum <= 0.0
    }
}

/// Per-url statistics as they appear in the report.
///
/// The serialized key names are consumed by existing report templates and
/// must not change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UrlStats {
    pub url: String,
    pub count: u64,
    pub count_percent: f64,
    #[serde(rename = "time_sum")]
    pub latency_sum: f64,
    pub time_percent: f64,
    #[serde(rename = "time_avg")]
    pub latency_avg: f64,
    #[serde(rename = "time_max")]
    pub latency_max: f64,
    #[serde(rename = "time_med")]
    pub latency_median: f64,
    /// Terminal summary only; not part of the report payload.
    #[serde(skip)]
    pub latency_p95: f64,
}

/// Rows handed to the renderer, sorted by `latency_sum` descending.
pub type ReportTable = Vec<UrlStats>;
