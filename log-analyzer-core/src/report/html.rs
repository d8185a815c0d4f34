use crate::analysis::UrlStats;
use crate::report::error::ReportError;
use chrono::NaiveDate;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Replaced with the JSON report table.
pub const PLACEHOLDER: &str = "$table_json";

/// `report_dir/report-YYYY.MM.DD.html` for the log's date.
pub fn report_path(report_dir: &Path, date: NaiveDate) -> PathBuf {
    report_dir.join(format!("report-{}.html", date.format("%Y.%m.%d")))
}

/// An HTML template known to contain [`PLACEHOLDER`].
#[derive(Debug, Clone)]
pub struct ReportTemplate {
    path: PathBuf,
    contents: String,
}

impl ReportTemplate {
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let contents = fs::read_to_string(path).map_err(|e| ReportError::ReadTemplate {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_string(path, contents)
    }

    pub fn from_string(path: &Path, contents: String) -> Result<Self, ReportError> {
        if !contents.contains(PLACEHOLDER) {
            return Err(ReportError::MissingPlaceholder {
                path: path.to_path_buf(),
                placeholder: PLACEHOLDER,
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            contents,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn render(&self, table: &[UrlStats]) -> Result<String, ReportError> {
        let json = serde_json::to_string(table)?;
        Ok(self.contents.replace(PLACEHOLDER, &json))
    }
}

/// Renders `table` into `path`.
///
/// The report is written to a temporary file next to its destination and
/// renamed into place, so `path` either does not exist or is complete.
pub fn write_report(
    path: &Path,
    template: &ReportTemplate,
    table: &[UrlStats],
) -> Result<(), ReportError> {
    let html = template.render(table)?;

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(|e| ReportError::write(dir, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ReportError::write(dir, e))?;
    tmp.write_all(html.as_bytes())
        .map_err(|e| ReportError::write(tmp.path(), e))?;
    tmp.persist(path)
        .map_err(|e| ReportError::write(path, e.error))?;

    Ok(())
}
