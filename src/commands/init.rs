use crate::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG_TEMPLATE};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Write the default config into `dir`, refusing to overwrite unless `force`
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    log::info!("Wrote {}", config_path.display());
    Ok(config_path)
}

pub fn init_config(force: bool) -> Result<()> {
    let dir = std::env::current_dir().context("Failed to get current directory")?;
    init_config_in(&dir, force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(())
}
