//! Persisted user preferences.
//!
//! [`PreferenceStore`] is the never-failing facade over a key/value storage
//! port. [`PersistedPreference`] binds one key to an in-memory value with a
//! deferred first load.

mod persisted;
mod store;

pub use persisted::PersistedPreference;
pub use store::PreferenceStore;
