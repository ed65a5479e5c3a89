use anyhow::{Context, Result};
use mpsver_core::Config;
use std::path::Path;
use tokio::fs::read_to_string;

use crate::get_mpsver_dir;

/// Load `.mpsver/config.json` under `root_dir`, falling back to defaults when it does not exist
///
/// # Errors
/// Returns error if the file exists but cannot be read or is not valid config JSON.
pub async fn get_mpsver_config(root_dir: &Path) -> Result<Config> {
    let config_file = get_mpsver_dir(root_dir).join("config.json");
    if !config_file.is_file() {
        log::debug!("no config at {}, using defaults", config_file.display());
        return Ok(Config::default());
    }
    let content = read_to_string(&config_file)
        .await
        .with_context(|| format!("Failed to read {}", config_file.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid config in {}", config_file.display()))
}
