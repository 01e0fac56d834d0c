use std::path::PathBuf;

use thiserror::Error;

/// Resolved per-user application directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
}

impl AppDirs {
    pub fn preferences_file(&self) -> PathBuf {
        self.app_data_root.join("preferences.json")
    }

    pub fn config_file(&self) -> PathBuf {
        self.app_data_root.join("config.toml")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.app_data_root.join("logs")
    }
}

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data-local directory unavailable")]
    DataLocalDirUnavailable,
}

pub trait AppDirsPort: Send + Sync {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError>;
}
