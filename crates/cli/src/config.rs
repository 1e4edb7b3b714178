use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Optional settings file; command-line flags win over anything set here.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Search depth in plies
    pub depth: Option<u8>,
    /// Engine to play against: "minimax" or "random"
    pub engine: Option<String>,
}

/// Read the config file if it exists; a missing file is not an error.
pub fn load(path: &Path) -> Result<Option<CliConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let config = toml::from_str(&text)
        .with_context(|| format!("parsing config file {}", path.display()))?;
    Ok(Some(config))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
