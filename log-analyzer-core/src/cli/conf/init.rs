use anyhow::{Context, Result, bail};
use rust_embed::RustEmbed;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "config-templates/"]
pub struct ConfigTemplates;

/// Files written by `config init`, by template name.
pub const INIT_FILES: &[&str] = &["log_analyzer.hcl", "report.html"];

pub fn init(path: &Path) -> Result<()> {
    if path.is_file() {
        bail!("{} exists and is not a directory", path.display());
    }

    // Refuse to overwrite anything
    for name in INIT_FILES {
        let target = path.join(name);
        if target.exists() {
            bail!("{} already exists", target.display());
        }
    }

    fs::create_dir_all(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    for name in INIT_FILES {
        write_file(&path.join(name), &template(name)?)?;
    }

    println!("✔ Initialized log analyzer config in {}", path.display());
    println!("✔ Created:");
    for name in INIT_FILES {
        println!("  - {name}");
    }
    println!();
    println!("Next steps:");
    println!("  log-analyzer --config log_analyzer.hcl config check");
    println!("  log-analyzer --config log_analyzer.hcl run --summary");

    Ok(())
}

/// Fetch an embedded config template as UTF-8 text
pub fn template(name: &str) -> Result<String> {
    let file = ConfigTemplates::get(name)
        .with_context(|| format!("missing embedded config template: {name}"))?;

    let s =
        std::str::from_utf8(file.data.as_ref()).context("config template is not valid UTF-8")?;

    Ok(s.to_owned())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents.trim_start())
        .with_context(|| format!("failed to create {}", path.display()))
}
