use crate::analysis::{GrandTotals, ParseCounters, UrlStats};
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use std::fmt::Write;
use std::path::PathBuf;

/// Rows shown in the terminal summary.
pub const SUMMARY_ROWS: usize = 10;

/// Everything worth telling an operator about a finished run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub log: PathBuf,
    pub date: NaiveDate,
    pub report: PathBuf,
    pub counters: ParseCounters,
    pub totals: GrandTotals,
    pub url_count: usize,
    /// Histogram buckets as `(label, count)`.
    pub latency: Vec<(String, u64)>,
    pub p50_ms: u64,
    pub p95_ms: u64,
    pub p99_ms: u64,
    /// The first rows of the report table.
    pub top: Vec<UrlStats>,
}

pub fn render_summary(summary: &RunSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}\n\
         =================================\n\
         log: {} ({})\n\
         report: {}\n\
         lines: {} | parsed: {} | failed: {} ({:.2}%) | urls: {}\n",
        "Access Log Latency Report".bold(),
        summary.log.display(),
        summary.date.format("%Y-%m-%d"),
        summary.report.display(),
        summary.counters.total_lines,
        summary.counters.parsed_lines(),
        summary.counters.failed_lines,
        summary.counters.error_rate() * 100.0,
        summary.url_count,
    );

    let samples: u64 = summary.latency.iter().map(|(_, c)| *c).sum();
    if samples > 0 {
        out.push_str("Latency (all requests):\n");
        for (label, count) in &summary.latency {
            let pct = (*count as f64 / samples as f64) * 100.0;
            let bars = ((pct / 5.0).floor() as usize).max(usize::from(*count > 0));
            let _ = writeln!(out, "  {:<12} {:<20} {:>5.1}%", label, "█".repeat(bars), pct);
        }
        let _ = writeln!(
            out,
            "\nLatency p50 ≈ {}ms | p95 ≈ {}ms | p99 ≈ {}ms\n",
            summary.p50_ms, summary.p95_ms, summary.p99_ms
        );
    } else {
        out.push_str("Latency (all requests): <no samples>\n\n");
    }

    if summary.top.is_empty() {
        out.push_str("No urls to report.\n");
        return out;
    }

    let _ = writeln!(
        out,
        "{:>10} {:>8} {:>7} {:>8} {:>8} {:>8}  url",
        "time_sum", "count", "time%", "avg", "med", "p95"
    );
    for row in summary.top.iter().take(SUMMARY_ROWS) {
        let _ = writeln!(
            out,
            "{:>10.3} {:>8} {:>6.2}% {:>8.3} {:>8.3} {:>8.3}  {}",
            row.latency_sum,
            row.count,
            row.time_percent,
            row.latency_avg,
            row.latency_median,
            row.latency_p95,
            row.url
        );
    }

    out
}
