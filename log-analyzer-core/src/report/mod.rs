mod error;
mod html;
mod summary;
mod timestamp;

#[cfg(test)]
mod tests;

pub use error::ReportError;
pub use html::{PLACEHOLDER, ReportTemplate, report_path, write_report};
pub use summary::{RunSummary, SUMMARY_ROWS, render_summary};
pub use timestamp::write_timestamp;
