//! Key/value storage port - abstracts the persistence medium behind
//! user preferences (a single keyed namespace, last write wins).

use anyhow::Result;

pub trait KeyValueStoragePort: Send + Sync {
    /// Raw stored string for `key`, or `None` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Deleting an absent key succeeds.
    fn remove(&self, key: &str) -> Result<()>;
}
