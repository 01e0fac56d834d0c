//! # Configuration loader
//!
//! Reads a TOML file and maps it onto [`GalleryConfig`]. Mapping rules live
//! with the DTO in `clip-core`.

use std::path::Path;

use anyhow::Context;
use clip_core::config::GalleryConfig;

/// Load gallery configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read, is not valid TOML, or holds an
/// out-of-range value.
pub fn load_config(config_path: &Path) -> anyhow::Result<GalleryConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    GalleryConfig::from_toml(&toml_value)
}

/// Like [`load_config`], but a missing file yields defaults.
pub fn load_config_or_default(config_path: &Path) -> anyhow::Result<GalleryConfig> {
    if !config_path.exists() {
        return Ok(GalleryConfig::defaults());
    }
    load_config(config_path)
}
