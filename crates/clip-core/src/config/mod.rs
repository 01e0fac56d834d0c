//! # Gallery configuration DTO
//!
//! Pure data. File loading lives in `clip-infra`; this module only maps an
//! already-parsed TOML value onto [`GalleryConfig`].

use std::time::Duration;

/// Storage key under which the selected category filter is persisted.
pub const DEFAULT_STORAGE_KEY: &str = "ui-clip-category-filter";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    /// Entries revealed per page.
    pub page_size: usize,

    /// Simulated latency of a "load more" request.
    pub load_more_delay: Duration,

    /// How long a "copied" acknowledgment stays visible.
    pub copy_ack_window: Duration,

    pub storage_key: String,
}

impl GalleryConfig {
    /// v1 defaults. Existing behavior depends on these values.
    pub fn defaults() -> Self {
        Self {
            page_size: 12,
            load_more_delay: Duration::from_millis(300),
            copy_ack_window: Duration::from_millis(2000),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    /// Overlay values from the `[gallery]` table of a TOML document.
    ///
    /// Keys that are absent or of the wrong type keep their default. A
    /// `page_size` of zero is rejected since pagination needs a positive step.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let mut config = Self::defaults();
        let Some(gallery) = toml_value.get("gallery") else {
            return Ok(config);
        };

        if let Some(page_size) = gallery.get("page_size").and_then(|v| v.as_integer()) {
            anyhow::ensure!(page_size > 0, "gallery.page_size must be positive, got {page_size}");
            config.page_size = page_size as usize;
        }
        if let Some(ms) = gallery.get("load_more_delay_ms").and_then(|v| v.as_integer()) {
            config.load_more_delay = Duration::from_millis(ms.max(0) as u64);
        }
        if let Some(ms) = gallery.get("copy_ack_window_ms").and_then(|v| v.as_integer()) {
            config.copy_ack_window = Duration::from_millis(ms.max(0) as u64);
        }
        if let Some(key) = gallery.get("storage_key").and_then(|v| v.as_str()) {
            config.storage_key = key.to_string();
        }

        Ok(config)
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self::defaults()
    }
}
