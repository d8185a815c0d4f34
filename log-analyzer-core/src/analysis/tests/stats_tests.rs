use crate::analysis::tests::test_helpers::entry;
use crate::analysis::{
    Aggregator, AnalysisError, GrandTotals, UrlBucket, compute_table, finalize, median, percentile,
};
use pretty_assertions::assert_eq;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn median_of_known_collections() {
    let cases: &[(&[f64], f64)] = &[
        (&[0.9, 1.2, 1.23, 1.4], 1.215),
        (&[0.0], 0.0),
        (&[0.3], 0.3),
        (&[0.30, 0.75, 0.8], 0.75),
    ];

    for (input, expected) in cases {
        let got = median(input).unwrap();
        assert!(close(got, *expected), "median({input:?}) = {got}");
    }
}

#[test]
fn median_of_empty_is_none() {
    assert_eq!(median(&[]), None);
}

#[test]
fn median_is_invariant_under_permutation() {
    let base = [0.5, 0.1, 0.9, 0.3, 0.7, 0.2];
    let mut expected_input = base.to_vec();
    expected_input.sort_by(f64::total_cmp);
    let expected = median(&expected_input).unwrap();

    // Rotate through every starting offset and reverse each rotation.
    for shift in 0..base.len() {
        let mut rotated = base.to_vec();
        rotated.rotate_left(shift);
        for mut candidate in [rotated.clone(), rotated.into_iter().rev().collect::<Vec<_>>()] {
            candidate.sort_by(f64::total_cmp);
            assert!(close(median(&candidate).unwrap(), expected));
        }
    }
    assert!(close(expected, 0.4));
}

#[test]
fn percentile_uses_nearest_rank() {
    let sorted: Vec<f64> = (1..=20).map(f64::from).collect();

    assert_eq!(percentile(&sorted, 0.95), Some(19.0));
    assert_eq!(percentile(&sorted, 1.0), Some(20.0));
    assert_eq!(percentile(&sorted, 0.0), Some(1.0));
    assert_eq!(percentile(&[], 0.5), None);
}

#[test]
fn finalize_sorts_before_reading_order_statistics() {
    // Arrange
    let mut agg = Aggregator::new();
    for latency in [0.4, 0.1, 0.3, 0.2] {
        agg.push(entry("/a", latency));
    }
    agg.push(entry("/b", 1.0));
    let totals = agg.totals();
    let bucket = agg.into_buckets().remove("/a").unwrap();

    // Act
    let stats = finalize("/a".to_string(), bucket, &totals).unwrap();

    // Assert
    assert_eq!(stats.count, 4);
    assert!(close(stats.latency_sum, 1.0));
    assert!(close(stats.latency_max, 0.4));
    assert!(close(stats.latency_median, 0.25));
    assert!(close(stats.latency_avg, 0.25));
    assert!(close(stats.count_percent, 80.0));
    assert!(close(stats.time_percent, 50.0));
    assert!(close(stats.latency_p95, 0.4));
}

#[test]
fn finalize_refuses_zero_totals() {
    let mut bucket = UrlBucket::default();
    bucket.push(0.1);

    let err = finalize("/a".to_string(), bucket, &GrandTotals::default()).unwrap_err();

    assert!(matches!(err, AnalysisError::DegenerateAggregate));
}

#[test]
fn finalize_refuses_empty_bucket() {
    let totals = GrandTotals {
        all_count: 1,
        all_latency_sum: 1.0,
    };

    let err = finalize("/a".to_string(), UrlBucket::default(), &totals).unwrap_err();

    assert!(matches!(err, AnalysisError::DegenerateAggregate));
}

#[test]
fn two_line_log_produces_expected_rows() {
    // Arrange
    let mut agg = Aggregator::new();
    agg.push(entry("/a", 0.100));
    agg.push(entry("/b", 0.300));

    // Act
    let table = compute_table(agg).unwrap();

    // Assert
    let urls: Vec<&str> = table.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(urls, vec!["/a", "/b"]);

    let a = &table[0];
    assert_eq!(a.count, 1);
    assert!(close(a.latency_sum, 0.1));
    assert!(close(a.count_percent, 50.0));
    assert!(close(a.time_percent, 25.0));
    assert!(close(a.latency_avg, 0.1));
    assert!(close(a.latency_max, 0.1));
    assert!(close(a.latency_median, 0.1));

    let b = &table[1];
    assert!(close(b.count_percent, 50.0));
    assert!(close(b.time_percent, 75.0));
    assert!(close(b.latency_avg, 0.3));
}

#[test]
fn shares_sum_to_one_hundred() {
    // Arrange
    let mut agg = Aggregator::new();
    for i in 0..500u32 {
        let url = format!("/api/v2/banner/{}", i % 37);
        agg.push(entry(&url, f64::from(i % 23) / 1000.0 + 0.001));
    }

    // Act
    let table = compute_table(agg).unwrap();

    // Assert
    let count_share: f64 = table.iter().map(|r| r.count_percent).sum();
    let time_share: f64 = table.iter().map(|r| r.time_percent).sum();
    assert_eq!(table.len(), 37);
    assert!((count_share - 100.0).abs() < 1e-6, "{count_share}");
    assert!((time_share - 100.0).abs() < 1e-6, "{time_share}");
}

#[test]
fn empty_aggregate_gives_empty_table() {
    let table = compute_table(Aggregator::new()).unwrap();

    assert!(table.is_empty());
}

#[test]
fn all_zero_latencies_give_empty_table() {
    let mut agg = Aggregator::new();
    agg.push(entry("/a", 0.0));
    agg.push(entry("/b", 0.0));

    assert!(compute_table(agg).unwrap().is_empty());
}

#[test]
fn table_is_ordered_by_url() {
    let mut agg = Aggregator::new();
    for url in ["/z", "/m", "/a", "/q"] {
        agg.push(entry(url, 0.5));
    }

    let table = compute_table(agg).unwrap();
    let urls: Vec<&str> = table.iter().map(|r| r.url.as_str()).collect();

    assert_eq!(urls, vec!["/a", "/m", "/q", "/z"]);
}
