pub mod config;
pub mod storage;

pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
