/// Fraction of unparsable lines above which a log is rejected.
pub const DEFAULT_ERROR_THRESHOLD: f64 = 0.4;

/// Upper bounds (inclusive, milliseconds) of the whole-file latency histogram.
pub const LATENCY_BUCKETS_MS: &[u64] = &[1, 5, 10, 25, 50, 100, 250, 500, 1000, 5000];
