//! ui-clip
//!
//! Headless gallery of UI animation snippets: category filtering,
//! incremental pagination, copy-to-clipboard and a persisted filter choice.

pub mod bootstrap;

pub use clip_app::{GalleryController, GalleryView};
