use crate::analysis::select;
use crate::analysis::tests::test_helpers::row;

fn urls(rows: &[crate::analysis::UrlStats]) -> Vec<&str> {
    rows.iter().map(|r| r.url.as_str()).collect()
}

#[test]
fn keeps_highest_totals_with_stable_ties() {
    // Arrange
    let stats = vec![
        row("/a", 0.5),
        row("/b", 0.3),
        row("/c", 0.9),
        row("/d", 0.1),
        row("/e", 0.9),
    ];

    // Act
    let top = select(stats, 3);

    // Assert
    assert_eq!(urls(&top), vec!["/c", "/e", "/a"]);
}

#[test]
fn n_larger_than_input_keeps_everything() {
    let top = select(vec![row("/a", 0.1), row("/b", 0.2)], 10);

    assert_eq!(urls(&top), vec!["/b", "/a"]);
}

#[test]
fn zero_keeps_nothing() {
    assert!(select(vec![row("/a", 0.1)], 0).is_empty());
}

#[test]
fn empty_input_is_empty_output() {
    assert!(select(Vec::new(), 5).is_empty());
}
