//! ui-clip application layer
//!
//! Controllers that turn the static catalog into an interactive gallery:
//!
//! ```text
//! Catalog ──► GalleryController ──► GalleryView (render boundary)
//!                 │       │
//!                 │       └──► CopyInteractionHandler ──► clipboard ports
//!                 └──► PersistedPreference ──► PreferenceStore ──► storage port
//! ```

pub mod copy;
pub mod gallery;
pub mod preference;
pub mod task;

pub use copy::{CopyInteractionHandler, CopyOutcome};
pub use gallery::{GalleryController, GalleryDeps, GalleryView};
pub use preference::{PersistedPreference, PreferenceStore};
pub use task::ScheduledTask;
