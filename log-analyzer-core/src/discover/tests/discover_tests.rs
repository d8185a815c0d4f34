use crate::discover::{DiscoverError, LatestLog, find_latest_log, parse_log_date, resolve_glob};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn finds_the_newest_log() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("nginx-access-ui.log-20170630"), "").unwrap();
    fs::write(root.join("nginx-access-ui.log-20170701.gz"), "").unwrap();
    fs::write(root.join("nginx-access-ui.log-20170515"), "").unwrap();

    // Act
    let latest = find_latest_log(root).unwrap();

    // Assert
    assert_eq!(
        latest,
        Some(LatestLog {
            path: root.join("nginx-access-ui.log-20170701.gz"),
            date: date(2017, 7, 1),
        })
    );
}

#[test]
fn ignores_foreign_extensions_and_names() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("nginx-access-ui.log-20170630"), "").unwrap();
    fs::write(root.join("nginx-access-ui.log-20180101.bz2"), "").unwrap();
    fs::write(root.join("nginx-access-api.log-20190101"), "").unwrap();
    fs::write(root.join("nginx-access-ui.log-2019010"), "").unwrap();

    // Act
    let latest = find_latest_log(root).unwrap().unwrap();

    // Assert
    assert_eq!(latest.date, date(2017, 6, 30));
}

#[test]
fn ignores_impossible_dates() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("nginx-access-ui.log-20170630"), "").unwrap();
    fs::write(root.join("nginx-access-ui.log-20171341"), "").unwrap();

    let latest = find_latest_log(root).unwrap().unwrap();

    assert_eq!(latest.date, date(2017, 6, 30));
}

#[test]
fn plain_log_wins_a_date_tie() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("nginx-access-ui.log-20170630.gz"), "").unwrap();
    fs::write(root.join("nginx-access-ui.log-20170630"), "").unwrap();

    let latest = find_latest_log(root).unwrap().unwrap();

    assert_eq!(latest.path, root.join("nginx-access-ui.log-20170630"));
}

#[test]
fn directories_are_not_logs() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::create_dir(root.join("nginx-access-ui.log-20170630")).unwrap();

    assert_eq!(find_latest_log(root).unwrap(), None);
}

#[test]
fn empty_directory_has_no_log() {
    let dir = tempdir().unwrap();

    assert_eq!(find_latest_log(dir.path()).unwrap(), None);
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("log");

    let err = find_latest_log(&missing).unwrap_err();

    assert!(matches!(err, DiscoverError::MissingDir { path } if path == missing));
}

#[test]
fn parses_embedded_dates() {
    assert_eq!(
        parse_log_date("nginx-access-ui.log-20170630"),
        Some(date(2017, 6, 30))
    );
    assert_eq!(
        parse_log_date("nginx-access-ui.log-20170630.gz"),
        Some(date(2017, 6, 30))
    );
    assert_eq!(parse_log_date("nginx-access-ui.log-20170630.log"), None);
    assert_eq!(parse_log_date("nginx-access-ui.log-20170230"), None);
}

#[test]
fn resolve_glob_joins_root_and_pattern() {
    let resolved = resolve_glob(Path::new("/var/log/nginx"), "nginx-access-ui.log-*");

    assert_eq!(resolved, "/var/log/nginx/nginx-access-ui.log-*");
}

#[test]
fn resolve_glob_escapes_root_metacharacters() {
    let resolved = resolve_glob(Path::new("/srv/logs[prod]"), "nginx-access-ui.log-*");

    assert_eq!(resolved, "/srv/logs[[]prod[]]/nginx-access-ui.log-*");
}

#[test]
fn finds_logs_in_dir_with_glob_metacharacters() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path().join("logs[prod]*?");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("nginx-access-ui.log-20170630"), "").unwrap();

    // Act
    let latest = find_latest_log(&root).unwrap();

    // Assert
    assert_eq!(
        latest,
        Some(LatestLog {
            path: root.join("nginx-access-ui.log-20170630"),
            date: date(2017, 6, 30),
        })
    );
}
