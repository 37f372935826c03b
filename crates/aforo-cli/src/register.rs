//! Reading register files into a [`Registry`].

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use aforo_core::Registry;

/// Path that selects stdin instead of a file.
pub const STDIN_PATH: &str = "-";

/// Loads the register at `path`, or stdin for `-`.
pub fn load(path: &Path) -> Result<Registry> {
    if path.as_os_str() == STDIN_PATH {
        return from_reader(io::stdin().lock()).context("failed to read register from stdin");
    }

    let file = File::open(path)
        .with_context(|| format!("failed to open register file {}", path.display()))?;
    let registry = from_reader(BufReader::new(file))
        .with_context(|| format!("failed to read register file {}", path.display()))?;
    Ok(registry)
}

/// Builds a registry from register lines, skipping malformed ones.
pub fn from_reader<R: BufRead>(reader: R) -> Result<Registry> {
    let lines = reader
        .lines()
        .enumerate()
        .map(|(idx, line)| line.with_context(|| format!("failed to read line {}", idx + 1)))
        .collect::<Result<Vec<_>>>()?;

    let mut registry = Registry::new();
    let stats = registry.apply_lines(&lines);
    tracing::info!(
        applied = stats.applied,
        skipped = stats.skipped,
        users = registry.len(),
        "loaded register"
    );
    Ok(registry)
}
