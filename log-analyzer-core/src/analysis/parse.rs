use crate::analysis::types::ParsedEntry;
use regex::Regex;

/// Method, request target, protocol version, and the request time as the last
/// field of the line (seconds with exactly three decimals).
const LINE_GRAMMAR: &str =
    r"\b(?:GET|POST|HEAD|PUT) (?P<url>\S.*?) HTTP/1\.[01]\b.*\s(?P<latency>\d+\.\d{3})$";

/// Extracts `(url, latency)` pairs from access log lines.
///
/// The grammar is compiled once per parser. Parsing is pure, so one parser
/// can be shared by any number of streams.
#[derive(Debug, Clone)]
pub struct LineParser {
    grammar: Regex,
}

impl LineParser {
    pub fn new() -> Self {
        Self {
            grammar: Regex::new(LINE_GRAMMAR).expect("access log grammar must compile"),
        }
    }

    /// Returns `None` for any line that does not match the grammar.
    pub fn parse(&self, line: &str) -> Option<ParsedEntry> {
        let line = line.trim_end_matches(['\n', '\r']);
        let caps = self.grammar.captures(line)?;

        let latency = caps.name("latency")?.as_str().parse::<f64>().ok()?;
        let url = caps.name("url")?.as_str().to_string();

        Some(ParsedEntry { url, latency })
    }
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}
