use crate::conf::error::ConfigError;
use crate::conf::types::{AnalyzerConfig, PartialConfig};
use std::fs;
use std::path::{Path, PathBuf};

/// Looked up in the working directory when no config path is given.
pub const DEFAULT_CONFIG_PATHS: &[&str] = &["log_analyzer.conf", "log_analyzer.hcl"];

/// Loads the configuration for one run.
///
/// An explicit `path` must exist. Without one, the first existing entry of
/// [`DEFAULT_CONFIG_PATHS`] is used, and built-in defaults when none exists.
pub fn load_config(path: Option<&Path>) -> Result<AnalyzerConfig, ConfigError> {
    match resolve_config_path(path) {
        Some(found) => load_config_file(&found),
        None => Ok(AnalyzerConfig::default()),
    }
}

/// The file [`load_config`] reads for `path`, or `None` when it falls back to
/// the built-in defaults.
pub fn resolve_config_path(path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = path {
        return Some(path.to_path_buf());
    }

    DEFAULT_CONFIG_PATHS
        .iter()
        .map(Path::new)
        .find(|p| p.is_file())
        .map(Path::to_path_buf)
}

pub fn load_config_file(path: &Path) -> Result<AnalyzerConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

    let partial = parse_config(path, &contents)?;
    let config = AnalyzerConfig::default().merge(partial);
    config.validate()?;

    Ok(config)
}

/// `.hcl` files are HCL; anything else is JSON.
pub fn parse_config(path: &Path, contents: &str) -> Result<PartialConfig, ConfigError> {
    let is_hcl = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("hcl"));

    if is_hcl {
        hcl::from_str(contents).map_err(|e| ConfigError::ParseHcl {
            path: path.to_path_buf(),
            source: e,
        })
    } else {
        serde_json::from_str(contents).map_err(|e| ConfigError::ParseJson {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
