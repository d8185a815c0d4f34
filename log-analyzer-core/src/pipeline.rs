//! One analyzer run: discover the newest log, aggregate it, write the report.

use crate::analysis::{
    Aggregator, AnalysisError, CancelToken, GrandTotals, Histogram, LogStream, ParseCounters,
    ReportTable, compute_table, select,
};
use crate::conf::AnalyzerConfig;
use crate::discover::{DiscoverError, find_latest_log};
use crate::report::{
    ReportError, ReportTemplate, RunSummary, SUMMARY_ROWS, report_path, write_report,
    write_timestamp,
};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Discover(#[from] DiscoverError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

/// The result of analyzing one log file.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Top `report_size` rows, heaviest total latency first.
    pub table: ReportTable,
    pub counters: ParseCounters,
    pub totals: GrandTotals,
    pub url_count: usize,
    pub histogram: Histogram,
}

/// Reads `path` to the end and builds its report table.
pub fn analyze(
    path: &Path,
    config: &AnalyzerConfig,
    cancel: CancelToken,
) -> Result<Analysis, AnalysisError> {
    let mut stream = LogStream::open(path, config.breaker_params(), cancel);
    let agg = Aggregator::accumulate(&mut stream)?;
    let counters = stream.counters();

    let totals = agg.totals();
    let url_count = agg.url_count();
    let histogram = agg.histogram().clone();

    let table = select(compute_table(agg)?, config.report_size);

    info!(
        path = %path.display(),
        total = counters.total_lines,
        failed = counters.failed_lines,
        urls = url_count,
        rows = table.len(),
        "log analyzed"
    );

    Ok(Analysis {
        table,
        counters,
        totals,
        url_count,
        histogram,
    })
}

#[derive(Debug)]
pub enum RunOutcome {
    /// `log_dir` holds no access log.
    NoLogs,
    /// The report for the newest log already exists; nothing was read.
    AlreadyReported { report: PathBuf },
    Reported(Box<RunSummary>),
}

pub fn run(config: &AnalyzerConfig, cancel: &CancelToken) -> Result<RunOutcome, RunError> {
    let Some(latest) = find_latest_log(&config.log_dir)? else {
        info!(log_dir = %config.log_dir.display(), "no access logs found");
        return Ok(RunOutcome::NoLogs);
    };

    let report = report_path(&config.report_dir, latest.date);
    if report.exists() {
        info!(report = %report.display(), "report already exists");
        return Ok(RunOutcome::AlreadyReported { report });
    }

    // A broken template should fail before the log is read.
    let template = ReportTemplate::load(&config.report_template)?;

    let analysis = analyze(&latest.path, config, cancel.clone())?;

    write_report(&report, &template, &analysis.table)?;
    info!(report = %report.display(), rows = analysis.table.len(), "report written");

    if let Err(e) = write_timestamp(&config.ts_file) {
        warn!(error = %e, ts_file = %config.ts_file.display(), "failed to update timestamp");
    }

    let Analysis {
        mut table,
        counters,
        totals,
        url_count,
        histogram,
    } = analysis;
    table.truncate(SUMMARY_ROWS);

    Ok(RunOutcome::Reported(Box::new(RunSummary {
        log: latest.path,
        date: latest.date,
        report,
        counters,
        totals,
        url_count,
        latency: histogram.snapshot(),
        p50_ms: histogram.percentile(0.50),
        p95_ms: histogram.percentile(0.95),
        p99_ms: histogram.percentile(0.99),
        top: table,
    })))
}
