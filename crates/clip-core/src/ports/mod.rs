//! Port interfaces for the application layer
//!
//! Ports define the contract between the gallery controllers and the
//! infrastructure/platform implementations behind them.

pub mod app_dirs;
pub mod clipboard;
pub mod storage;

pub use app_dirs::{AppDirs, AppDirsError, AppDirsPort};
pub use clipboard::{ClipboardPort, LegacyClipboardPort};
pub use storage::KeyValueStoragePort;
