use chrono::NaiveDate;
use flate2::Compression;
use flate2::write::GzEncoder;
use log_analyzer_core::conf::AnalyzerConfig;
use log_analyzer_core::report::report_path;
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const TEMPLATE_HEAD: &str = "<html><script>var table = ";
const TEMPLATE_TAIL: &str = ";</script></html>";

/// A well-formed nginx `ui_short` line for `url` taking `latency` seconds.
pub fn access_line(url: &str, latency: &str) -> String {
    format!(
        "1.196.116.32 -  - [29/Jun/2017:03:50:22 +0300] \"GET {url} HTTP/1.1\" 200 927 \"-\" \
         \"Lynx/2.8.8dev.9 libwww-FM/2.14 SSL-MM/1.4.1 GNUTLS/2.10.5\" \"-\" \
         \"1498697422-2190034393-4708-9752759\" \"dc7161be3\" {latency}"
    )
}

/// Temporary directory tree for one analyzer run.
///
/// ```text
/// <tmp>/log/            access logs
/// <tmp>/reports/        created by the run
/// <tmp>/report.html     template
/// <tmp>/log_analyzer.ts
/// ```
pub struct TestWorkspace {
    root: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("failed to create temp dir");
        fs::create_dir(root.path().join("log")).expect("failed to create log dir");
        fs::write(
            root.path().join("report.html"),
            format!("{TEMPLATE_HEAD}$table_json{TEMPLATE_TAIL}"),
        )
        .expect("failed to write template");

        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn log_dir(&self) -> PathBuf {
        self.root().join("log")
    }

    pub fn report_dir(&self) -> PathBuf {
        self.root().join("reports")
    }

    pub fn ts_file(&self) -> PathBuf {
        self.root().join("log_analyzer.ts")
    }

    pub fn template(&self) -> PathBuf {
        self.root().join("report.html")
    }

    /// Config pointing every path into this workspace.
    pub fn config(&self, report_size: usize) -> AnalyzerConfig {
        AnalyzerConfig {
            report_size,
            report_dir: self.report_dir(),
            log_dir: self.log_dir(),
            report_template: self.template(),
            ts_file: self.ts_file(),
            script_log: None,
            min_lines: report_size as u64,
            ..AnalyzerConfig::default()
        }
    }

    pub fn write_log(&self, name: &str, lines: &[String]) -> PathBuf {
        let path = self.log_dir().join(name);
        let mut body = lines.join("\n");
        body.push('\n');
        fs::write(&path, body).expect("failed to write log");
        path
    }

    pub fn write_gz_log(&self, name: &str, lines: &[String]) -> PathBuf {
        let path = self.log_dir().join(name);
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        for line in lines {
            writeln!(encoder, "{line}").expect("failed to compress log");
        }
        fs::write(&path, encoder.finish().expect("failed to finish gzip"))
            .expect("failed to write log");
        path
    }

    pub fn report_path(&self, date: NaiveDate) -> PathBuf {
        report_path(&self.report_dir(), date)
    }

    pub fn read_report(&self, date: NaiveDate) -> String {
        fs::read_to_string(self.report_path(date)).expect("failed to read report")
    }

    /// The JSON table embedded in the report for `date`.
    pub fn report_table(&self, date: NaiveDate) -> Value {
        let html = self.read_report(date);
        let json = html
            .strip_prefix(TEMPLATE_HEAD)
            .and_then(|s| s.strip_suffix(TEMPLATE_TAIL))
            .expect("report does not match the workspace template");
        serde_json::from_str(json).expect("report table is not valid JSON")
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
