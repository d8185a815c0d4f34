use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::Path;

/// Records the completion time of a run as Unix seconds.
pub fn write_timestamp<P: AsRef<Path>>(path: P) -> Result<()> {
    let now = Utc::now().timestamp_millis() as f64 / 1000.0;

    if let Some(parent) = path.as_ref().parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    fs::write(&path, format!("{now:.3}"))
        .with_context(|| format!("failed to write timestamp file {}", path.as_ref().display()))?;
    Ok(())
}
