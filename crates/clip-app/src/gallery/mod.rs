//! Filterable, paginated gallery over the catalog.

mod controller;
mod view;

pub use controller::{GalleryController, GalleryDeps};
pub use view::GalleryView;
