use crate::discover::error::DiscoverError;
use chrono::NaiveDate;
use glob::{Pattern, glob};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Candidate file names inside the log directory.
pub const LOG_GLOB: &str = "nginx-access-ui.log-*";

static LOG_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^nginx-access-ui\.log-(?P<date>\d{8})(?:\.gz)?$")
        .expect("log file name grammar must compile")
});

/// The most recent access log in a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestLog {
    pub path: PathBuf,
    pub date: NaiveDate,
}

/// Extracts the date embedded in an access log file name.
///
/// Only plain and `.gz` logs qualify, and the date must exist in the calendar
/// (`20170231` does not).
pub fn parse_log_date(file_name: &str) -> Option<NaiveDate> {
    let caps = LOG_NAME.captures(file_name)?;
    NaiveDate::parse_from_str(caps.name("date")?.as_str(), "%Y%m%d").ok()
}

/// Finds the access log with the greatest embedded date.
///
/// Returns `Ok(None)` when the directory holds no qualifying file. When a
/// plain and a `.gz` log share the newest date, the plain one wins.
pub fn find_latest_log(log_dir: &Path) -> Result<Option<LatestLog>, DiscoverError> {
    if !log_dir.is_dir() {
        return Err(DiscoverError::MissingDir {
            path: log_dir.to_path_buf(),
        });
    }

    let pattern = resolve_glob(log_dir, LOG_GLOB);
    let paths = glob(&pattern).map_err(|e| DiscoverError::Glob {
        pattern: pattern.clone(),
        source: e,
    })?;

    let mut latest: Option<LatestLog> = None;

    // glob yields paths in alphabetical order
    for entry in paths {
        let path = match entry {
            Ok(path) if path.is_file() => path,
            Ok(_) => continue,
            Err(e) => {
                warn!(path = %e.path().display(), error = %e.error(), "unreadable log dir entry");
                continue;
            }
        };

        let Some(date) = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(parse_log_date)
        else {
            continue;
        };

        if latest.as_ref().is_none_or(|l| date > l.date) {
            latest = Some(LatestLog { path, date });
        }
    }

    Ok(latest)
}

/// Joins `pattern` onto `root` as a glob string.
///
/// Metacharacters in `root` are escaped so only `pattern` is matched.
pub fn resolve_glob(root: &Path, pattern: &str) -> String {
    let root = Pattern::escape(&root.to_string_lossy());
    Path::new(&root).join(pattern).to_string_lossy().into_owned()
}
