//! Builds a [`GalleryController`] from concrete adapters.

use std::sync::Arc;

use anyhow::Context;
use clip_app::{GalleryController, GalleryDeps, PreferenceStore};
use clip_core::ports::AppDirs;
use clip_core::{Catalog, GalleryConfig};
use clip_infra::FileKeyValueStore;
use clip_platform::clipboard::{CarrierClipboard, SystemClipboard};
use tracing::{info, warn};

/// File-backed preferences when an app data directory exists, otherwise a
/// store that keeps nothing across restarts.
pub fn preference_store_for(app_dirs: Option<&AppDirs>) -> PreferenceStore {
    match app_dirs {
        Some(dirs) => {
            let path = dirs.preferences_file();
            info!(path = %path.display(), "preferences backed by file");
            PreferenceStore::new(Arc::new(FileKeyValueStore::new(path)))
        }
        None => {
            warn!("no app data directory, preferences will not persist");
            PreferenceStore::unavailable()
        }
    }
}

/// Wire the built-in catalog, preferences and system clipboard adapters.
pub fn build_gallery(
    config: GalleryConfig,
    app_dirs: Option<&AppDirs>,
) -> anyhow::Result<GalleryController> {
    let catalog = Catalog::builtin().context("load built-in catalog")?;
    let clipboard = SystemClipboard::new();
    if !clipboard.is_available() {
        warn!("system clipboard unavailable, copies will use the carrier fallback");
    }

    let deps = GalleryDeps {
        catalog: Arc::new(catalog),
        preferences: preference_store_for(app_dirs),
        clipboard: Arc::new(clipboard),
        legacy_clipboard: Arc::new(CarrierClipboard::new()),
    };
    Ok(GalleryController::new(deps, config))
}
