use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use clip_core::ports::KeyValueStoragePort;
use tracing::debug;

type Document = BTreeMap<String, String>;

/// Key/value medium backed by a single JSON object file.
///
/// Every key maps to the raw string the caller stored. Writes rewrite the
/// whole document through a temp file and a rename, so a reader sees either
/// the previous or the new document.
pub struct FileKeyValueStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Document> {
        let content = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Document::new()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read preferences failed: {}", self.path.display()))
            }
        };
        if content.trim().is_empty() {
            return Ok(Document::new());
        }
        serde_json::from_str(&content)
            .with_context(|| format!("parse preferences failed: {}", self.path.display()))
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("create preferences dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    fn atomic_write(&self, doc: &Document) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(doc).context("serialize preferences failed")?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("write temp preferences failed: {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path).with_context(|| {
            format!(
                "rename temp preferences to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;
        Ok(())
    }

    fn update(&self, apply: impl FnOnce(&mut Document) -> bool) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| anyhow!("preferences write lock poisoned"))?;
        let mut doc = self.read_document()?;
        if apply(&mut doc) {
            self.atomic_write(&doc)?;
        }
        Ok(())
    }
}

impl KeyValueStoragePort for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_document()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.update(|doc| {
            doc.insert(key.to_string(), value.to_string());
            true
        })?;
        debug!(key, path = %self.path.display(), "preference written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.update(|doc| doc.remove(key).is_some())
    }
}
