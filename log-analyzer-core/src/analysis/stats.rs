use crate::analysis::aggregate::Aggregator;
use crate::analysis::error::AnalysisError;
use crate::analysis::types::{GrandTotals, UrlBucket, UrlStats};

/// Median of an ascending slice; mean of the two central values for even
/// lengths.
pub fn median(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }

    let mid = n / 2;
    if n % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Nearest-rank percentile of an ascending slice, `pct` in `0.0..=1.0`.
pub fn percentile(sorted: &[f64], pct: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let rank = (sorted.len() as f64 * pct).ceil() as usize;
    Some(sorted[rank.clamp(1, sorted.len()) - 1])
}

/// Builds the statistics row for one url.
///
/// Sorts the bucket's samples first; max, median and p95 are read from the
/// sorted collection.
pub fn finalize(
    url: String,
    mut bucket: UrlBucket,
    totals: &GrandTotals,
) -> Result<UrlStats, AnalysisError> {
    if totals.is_degenerate() || bucket.is_empty() {
        return Err(AnalysisError::DegenerateAggregate);
    }

    bucket.sort();
    let sorted = bucket.latencies();

    let count = sorted.len() as u64;
    let latency_sum = bucket.running_sum();
    let latency_max = sorted[sorted.len() - 1];
    let latency_median = median(sorted).ok_or(AnalysisError::DegenerateAggregate)?;
    let latency_p95 = percentile(sorted, 0.95).ok_or(AnalysisError::DegenerateAggregate)?;

    Ok(UrlStats {
        url,
        count,
        count_percent: 100.0 * count as f64 / totals.all_count as f64,
        latency_sum,
        time_percent: 100.0 * latency_sum / totals.all_latency_sum,
        latency_avg: latency_sum / count as f64,
        latency_max,
        latency_median,
        latency_p95,
    })
}

/// One row per url, in ascending url order.
///
/// An aggregate without samples (or whose samples are all zero) yields an
/// empty table instead of an error.
pub fn compute_table(aggregator: Aggregator) -> Result<Vec<UrlStats>, AnalysisError> {
    let totals = aggregator.totals();
    if totals.is_degenerate() {
        return Ok(Vec::new());
    }

    let mut buckets: Vec<_> = aggregator.into_buckets().into_iter().collect();
    buckets.sort_by(|(a, _), (b, _)| a.cmp(b));

    buckets
        .into_iter()
        .map(|(url, bucket)| finalize(url, bucket, &totals))
        .collect()
}
