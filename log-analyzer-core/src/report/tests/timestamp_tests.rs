use crate::report::write_timestamp;
use std::fs;
use tempfile::tempdir;

#[test]
fn writes_unix_seconds() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("log_analyzer.ts");

    write_timestamp(&path).unwrap();

    let written: f64 = fs::read_to_string(&path).unwrap().parse().unwrap();
    assert!(written > 1_500_000_000.0, "{written}");
}

#[test]
fn unwritable_target_is_an_error() {
    let dir = tempdir().unwrap();

    // A directory cannot be overwritten with a file.
    let err = write_timestamp(dir.path()).unwrap_err();

    assert!(err.to_string().contains("failed to write timestamp file"));
}
