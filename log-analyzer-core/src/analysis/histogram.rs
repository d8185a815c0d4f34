/// Fixed-bucket latency histogram in milliseconds.
///
/// Used for the whole-file percentiles in the run summary, where keeping a
/// second sorted copy of every sample would double memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    buckets: &'static [u64],
    counts: Vec<u64>,
}

impl Histogram {
    pub fn new(buckets: &'static [u64]) -> Self {
        Self {
            buckets,
            counts: vec![0; buckets.len() + 1], // overflow bucket
        }
    }

    pub fn record_seconds(&mut self, latency: f64) {
        self.record((latency * 1000.0).round() as u64);
    }

    pub fn record(&mut self, value_ms: u64) {
        let idx = self
            .buckets
            .iter()
            .position(|b| value_ms <= *b)
            .unwrap_or(self.buckets.len());
        self.counts[idx] += 1;
    }

    /// Adds the counts of a histogram built over the same buckets.
    pub fn merge(&mut self, other: &Histogram) {
        debug_assert_eq!(self.buckets, other.buckets);
        for (mine, theirs) in self.counts.iter_mut().zip(&other.counts) {
            *mine += theirs;
        }
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn snapshot(&self) -> Vec<(String, u64)> {
        let mut out = Vec::with_capacity(self.counts.len());

        for (i, c) in self.counts.iter().enumerate() {
            let label = if i == 0 && !self.buckets.is_empty() {
                format!("0-{}ms", self.buckets[0])
            } else if i < self.buckets.len() {
                format!("{}-{}ms", self.buckets[i - 1] + 1, self.buckets[i])
            } else {
                match self.buckets.last() {
                    Some(last) => format!(">{last}ms"),
                    None => "all".to_string(),
                }
            };

            out.push((label, *c));
        }

        out
    }

    pub fn numeric_buckets(&self) -> Vec<(u64, u64)> {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, count)| {
                let upper = self.buckets.get(i).copied().unwrap_or(u64::MAX);
                (upper, *count)
            })
            .collect()
    }

    pub fn percentile(&self, pct: f64) -> u64 {
        percentile_from_histogram(&self.numeric_buckets(), self.total(), pct)
    }
}

/// Upper bound of the bucket holding the `pct` quantile.
///
/// Samples in the overflow bucket report one past the last real bound.
pub fn percentile_from_histogram(buckets: &[(u64, u64)], total: u64, pct: f64) -> u64 {
    if total == 0 {
        return 0;
    }

    let target = ((total as f64 * pct).ceil() as u64).max(1);
    let mut running = 0;

    for (upper, count) in buckets {
        running += *count;
        if running >= target {
            if *upper == u64::MAX {
                return buckets
                    .iter()
                    .rev()
                    .find(|(u, _)| *u != u64::MAX)
                    .map(|(u, _)| u.saturating_add(1))
                    .unwrap_or(0);
            }
            return *upper;
        }
    }

    0
}
