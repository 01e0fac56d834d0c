//! # clip-core
//!
//! Core domain models and ports for the ui-clip animation gallery.
//!
//! This crate contains pure domain logic without any infrastructure dependencies.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod ids;
pub mod ports;

// Re-export commonly used types at the crate root
pub use catalog::{Catalog, Category, CategoryFilter, Entry, Preview, Renderer};
pub use config::GalleryConfig;
pub use errors::{CatalogError, CategoryParseError};
pub use ids::EntryId;
