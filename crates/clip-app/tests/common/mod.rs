//! Shared fixtures for gallery integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use clip_app::{GalleryController, GalleryDeps, PreferenceStore};
use clip_core::ports::{ClipboardPort, KeyValueStoragePort, LegacyClipboardPort};
use clip_core::{Catalog, Category, Entry, GalleryConfig, Renderer};
use clip_infra::InMemoryKeyValueStore;

pub const STORAGE_KEY: &str = "ui-clip-category-filter";

/// 50 entries: 13 buttons, 13 loaders, 12 progress, 12 skeleton.
pub fn fixture_catalog() -> Arc<Catalog> {
    let layout = [
        (Category::Buttons, 13),
        (Category::Loaders, 13),
        (Category::Progress, 12),
        (Category::Skeleton, 12),
    ];
    let mut entries = Vec::new();
    for (category, count) in layout {
        for n in 0..count {
            let id = format!("{category}-{n:02}");
            entries.push(Entry::new(
                id.as_str(),
                format!("{category} #{n}"),
                "fixture entry",
                category,
                format!("<{id} />"),
                Renderer::component(id.clone()),
            ));
        }
    }
    Arc::new(Catalog::from_entries(entries).expect("fixture ids are unique"))
}

/// Clipboard fake recording every successful write.
#[derive(Default)]
pub struct RecordingClipboard {
    pub fail: bool,
    pub writes: Mutex<Vec<String>>,
}

impl RecordingClipboard {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

impl ClipboardPort for RecordingClipboard {
    fn write_text(&self, text: &str) -> anyhow::Result<()> {
        if self.fail {
            return Err(anyhow!("clipboard access denied"));
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

impl LegacyClipboardPort for RecordingClipboard {
    fn copy_via_carrier(&self, text: &str) -> anyhow::Result<()> {
        if self.fail {
            return Err(anyhow!("carrier copy rejected"));
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

pub struct Harness {
    pub controller: GalleryController,
    pub medium: Arc<InMemoryKeyValueStore>,
    pub clipboard: Arc<RecordingClipboard>,
    pub legacy: Arc<RecordingClipboard>,
}

pub fn harness_with(medium: Arc<InMemoryKeyValueStore>, clipboard: RecordingClipboard) -> Harness {
    let clipboard = Arc::new(clipboard);
    let legacy = Arc::new(RecordingClipboard::default());
    let controller = GalleryController::new(
        GalleryDeps {
            catalog: fixture_catalog(),
            preferences: PreferenceStore::new(medium.clone() as Arc<dyn KeyValueStoragePort>),
            clipboard: clipboard.clone(),
            legacy_clipboard: legacy.clone(),
        },
        GalleryConfig::defaults(),
    );
    Harness {
        controller,
        medium,
        clipboard,
        legacy,
    }
}

pub fn harness() -> Harness {
    harness_with(
        Arc::new(InMemoryKeyValueStore::new()),
        RecordingClipboard::default(),
    )
}

pub async fn ready_harness() -> Harness {
    let h = harness();
    h.controller.initialize().await;
    h
}
