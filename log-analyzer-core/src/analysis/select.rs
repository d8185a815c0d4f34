use crate::analysis::types::UrlStats;

/// Keeps the `n` rows with the highest total latency, highest first.
///
/// The sort is stable: rows with equal totals keep their input order.
pub fn select(mut stats: Vec<UrlStats>, n: usize) -> Vec<UrlStats> {
    stats.sort_by(|a, b| b.latency_sum.total_cmp(&a.latency_sum));
    stats.truncate(n);
    stats
}
