use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::OnceCell;
use tracing::debug;

use super::PreferenceStore;
use crate::task::lock;

/// One persisted value with a deferred first load.
///
/// Three observable states: not loaded (`get` is `None`), loaded with the
/// default, loaded with a stored value. The first [`load`](Self::load) yields
/// to the scheduler once before touching storage, and concurrent loads share
/// that single read.
pub struct PersistedPreference<T> {
    store: PreferenceStore,
    key: String,
    default: T,
    loaded: OnceCell<()>,
    value: Mutex<Option<T>>,
}

impl<T> PersistedPreference<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync,
{
    pub fn new(store: PreferenceStore, key: impl Into<String>, default: T) -> Self {
        Self {
            store,
            key: key.into(),
            default,
            loaded: OnceCell::new(),
            value: Mutex::new(None),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.initialized()
    }

    /// Load the value, reading storage at most once.
    pub async fn load(&self) -> T {
        self.loaded
            .get_or_init(|| async {
                tokio::task::yield_now().await;
                let stored = self.store.read(&self.key, self.default.clone());
                debug!(key = %self.key, "preference loaded");
                let mut value = lock(&self.value);
                // A `set` that raced ahead of the first load wins.
                if value.is_none() {
                    *value = Some(stored);
                }
            })
            .await;
        self.current()
    }

    /// Current value, or `None` before the first load completes.
    pub fn get(&self) -> Option<T> {
        if !self.is_loaded() {
            return None;
        }
        lock(&self.value).clone()
    }

    /// Update the in-memory value and write it through to storage.
    pub fn set(&self, value: T) {
        self.store.write(&self.key, &value);
        *lock(&self.value) = Some(value);
    }

    /// Remove the stored value; the in-memory value falls back to the default.
    pub fn clear(&self) {
        self.store.remove(&self.key);
        *lock(&self.value) = Some(self.default.clone());
    }

    fn current(&self) -> T {
        lock(&self.value)
            .clone()
            .unwrap_or_else(|| self.default.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use clip_core::ports::KeyValueStoragePort;
    use clip_core::{Category, CategoryFilter};
    use clip_infra::InMemoryKeyValueStore;

    const KEY: &str = "ui-clip-category-filter";

    /// Counts reads so shared loads can be observed.
    struct CountingMedium {
        inner: InMemoryKeyValueStore,
        reads: AtomicUsize,
    }

    impl KeyValueStoragePort for CountingMedium {
        fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.get(key)
        }
        fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
            self.inner.set(key, value)
        }
        fn remove(&self, key: &str) -> anyhow::Result<()> {
            self.inner.remove(key)
        }
    }

    fn preference_with(raw: Option<&str>) -> PersistedPreference<CategoryFilter> {
        let medium = match raw {
            Some(raw) => InMemoryKeyValueStore::with_raw(KEY, raw),
            None => InMemoryKeyValueStore::new(),
        };
        PersistedPreference::new(
            PreferenceStore::new(Arc::new(medium)),
            KEY,
            CategoryFilter::All,
        )
    }

    #[tokio::test]
    async fn not_loaded_until_first_load() {
        let pref = preference_with(Some("\"loaders\""));
        assert!(!pref.is_loaded());
        assert_eq!(pref.get(), None);

        assert_eq!(pref.load().await, CategoryFilter::Only(Category::Loaders));
        assert!(pref.is_loaded());
        assert_eq!(pref.get(), Some(CategoryFilter::Only(Category::Loaders)));
    }

    #[tokio::test]
    async fn missing_or_corrupt_value_loads_default() {
        assert_eq!(preference_with(None).load().await, CategoryFilter::All);
        assert_eq!(preference_with(Some("{{")).load().await, CategoryFilter::All);
    }

    #[tokio::test]
    async fn concurrent_loads_share_one_read() {
        let medium = Arc::new(CountingMedium {
            inner: InMemoryKeyValueStore::with_raw(KEY, "\"skeleton\""),
            reads: AtomicUsize::new(0),
        });
        let pref = PersistedPreference::new(
            PreferenceStore::new(medium.clone()),
            KEY,
            CategoryFilter::All,
        );

        let (a, b) = tokio::join!(pref.load(), pref.load());
        assert_eq!(a, CategoryFilter::Only(Category::Skeleton));
        assert_eq!(a, b);
        assert_eq!(medium.reads.load(Ordering::SeqCst), 1);

        pref.load().await;
        assert_eq!(medium.reads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn set_writes_through() {
        let medium = Arc::new(InMemoryKeyValueStore::new());
        let pref = PersistedPreference::new(
            PreferenceStore::new(medium.clone()),
            KEY,
            CategoryFilter::All,
        );
        pref.load().await;

        pref.set(CategoryFilter::Only(Category::Buttons));
        assert_eq!(pref.get(), Some(CategoryFilter::Only(Category::Buttons)));
        assert_eq!(medium.get(KEY).unwrap().as_deref(), Some("\"buttons\""));

        pref.clear();
        assert_eq!(pref.get(), Some(CategoryFilter::All));
        assert_eq!(medium.get(KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn set_before_load_is_not_overwritten() {
        let pref = preference_with(Some("\"loaders\""));
        pref.set(CategoryFilter::Only(Category::Progress));
        assert_eq!(pref.load().await, CategoryFilter::Only(Category::Progress));
    }
}
