pub mod coins;
pub mod config;
pub mod detect;
pub mod size;

use std::path::Path;

use anyhow::{Context, Result};
use refscale_core::config::AppConfig;
use tracing::debug;

/// Load a TOML config file, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    debug!(path = %path.display(), "Loaded config");
    Ok(config)
}
