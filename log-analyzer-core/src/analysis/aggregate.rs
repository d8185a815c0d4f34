use crate::analysis::constants::LATENCY_BUCKETS_MS;
use crate::analysis::error::AnalysisError;
use crate::analysis::histogram::Histogram;
use crate::analysis::types::{GrandTotals, ParsedEntry, UrlBucket};
use ahash::AHashMap;

/// Accumulates latency samples per url plus whole-file totals.
///
/// Memory grows with the number of samples; every latency is kept because the
/// median needs the full collection.
#[derive(Debug, Clone)]
pub struct Aggregator {
    buckets: AHashMap<String, UrlBucket>,
    totals: GrandTotals,
    histogram: Histogram,
}

impl Aggregator {
    pub fn new() -> Self {
        Self {
            buckets: AHashMap::new(),
            totals: GrandTotals::default(),
            histogram: Histogram::new(LATENCY_BUCKETS_MS),
        }
    }

    /// Drains `entries` to the end, stopping at the first error.
    ///
    /// Pass the stream by `&mut` to read its counters afterwards.
    pub fn accumulate<I>(entries: I) -> Result<Self, AnalysisError>
    where
        I: IntoIterator<Item = Result<Option<ParsedEntry>, AnalysisError>>,
    {
        let mut agg = Self::new();
        for entry in entries {
            agg.push(entry?);
        }
        Ok(agg)
    }

    /// Lines that failed to parse arrive as `None` and are skipped.
    pub fn push(&mut self, entry: Option<ParsedEntry>) {
        let Some(ParsedEntry { url, latency }) = entry else {
            return;
        };

        self.buckets.entry(url).or_default().push(latency);
        self.totals.all_count += 1;
        self.totals.all_latency_sum += latency;
        self.histogram.record_seconds(latency);
    }

    /// Reduces another partition into this one, bucket by bucket.
    pub fn merge(&mut self, other: Aggregator) {
        for (url, bucket) in other.buckets {
            self.buckets.entry(url).or_default().absorb(bucket);
        }
        self.totals.all_count += other.totals.all_count;
        self.totals.all_latency_sum += other.totals.all_latency_sum;
        self.histogram.merge(&other.histogram);
    }

    pub fn totals(&self) -> GrandTotals {
        self.totals
    }

    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    pub fn url_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn bucket(&self, url: &str) -> Option<&UrlBucket> {
        self.buckets.get(url)
    }

    pub fn into_buckets(self) -> AHashMap<String, UrlBucket> {
        self.buckets
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}
