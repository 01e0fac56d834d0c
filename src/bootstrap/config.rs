//! Resolves and loads the gallery configuration file.

use std::path::PathBuf;

use clip_core::ports::AppDirs;
use clip_core::GalleryConfig;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "UI_CLIP_CONFIG";

/// `UI_CLIP_CONFIG` if set, else `config.toml` in the app data directory.
pub fn resolve_config_path(app_dirs: Option<&AppDirs>) -> Option<PathBuf> {
    match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => app_dirs.map(AppDirs::config_file),
    }
}

/// Load the configuration; a missing file (or no location at all) means defaults.
pub fn load_gallery_config(app_dirs: Option<&AppDirs>) -> anyhow::Result<GalleryConfig> {
    match resolve_config_path(app_dirs) {
        Some(path) => clip_infra::config::load_config_or_default(&path),
        None => Ok(GalleryConfig::defaults()),
    }
}
