use crate::analysis::{BreakerParams, ParsedEntry, UrlStats};
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A well-formed nginx `ui_short` line for `url` taking `latency` seconds.
pub fn access_line(url: &str, latency: &str) -> String {
    format!(
        "1.196.116.32 -  - [29/Jun/2017:03:50:22 +0300] \"GET {url} HTTP/1.1\" 200 927 \"-\" \
         \"Lynx/2.8.8dev.9 libwww-FM/2.14 SSL-MM/1.4.1 GNUTLS/2.10.5\" \"-\" \
         \"1498697422-2190034393-4708-9752759\" \"dc7161be3\" {latency}"
    )
}

pub fn entry(url: &str, latency: f64) -> Option<ParsedEntry> {
    Some(ParsedEntry {
        url: url.to_string(),
        latency,
    })
}

pub fn write_plain(dir: &Path, name: &str, lines: &[String]) -> PathBuf {
    let path = dir.join(name);
    let mut body = lines.join("\n");
    body.push('\n');
    fs::write(&path, body).unwrap();
    path
}

pub fn write_gzip(dir: &Path, name: &str, lines: &[String]) -> PathBuf {
    let path = dir.join(name);
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    for line in lines {
        writeln!(encoder, "{line}").unwrap();
    }
    fs::write(&path, encoder.finish().unwrap()).unwrap();
    path
}

pub fn lenient() -> BreakerParams {
    BreakerParams {
        threshold: 1.0,
        min_lines: u64::MAX,
    }
}

pub fn row(url: &str, latency_sum: f64) -> UrlStats {
    UrlStats {
        url: url.to_string(),
        count: 1,
        count_percent: 0.0,
        latency_sum,
        time_percent: 0.0,
        latency_avg: latency_sum,
        latency_max: latency_sum,
        latency_median: latency_sum,
        latency_p95: latency_sum,
    }
}
