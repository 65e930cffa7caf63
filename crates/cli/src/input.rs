//! Reading command input from files or stdin

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use textbench_core::ToolConfig;

/// Read a file, or stdin when no path is given
pub fn read_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

/// Load the configuration file when one is given, defaults otherwise
pub fn load_config(path: Option<&Path>) -> Result<ToolConfig> {
    match path {
        Some(path) => ToolConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(ToolConfig::default()),
    }
}
