use clip_core::{CategoryFilter, Entry, EntryId};
use serde::Serialize;

/// Everything the presentation layer reads.
///
/// Derived from controller state on each change; never stored back.
#[derive(Debug, Clone, Serialize)]
pub struct GalleryView {
    pub visible_entries: Vec<Entry>,
    pub selected_category: CategoryFilter,
    pub displayed_count: usize,
    /// Size of the filtered set.
    pub total_count: usize,
    pub has_more: bool,
    pub is_loading: bool,
    pub is_ready: bool,
    pub copied_entry_id: Option<EntryId>,
}

impl GalleryView {
    pub(crate) fn uninitialized() -> Self {
        Self {
            visible_entries: Vec::new(),
            selected_category: CategoryFilter::All,
            displayed_count: 0,
            total_count: 0,
            has_more: false,
            is_loading: false,
            is_ready: false,
            copied_entry_id: None,
        }
    }

    /// The "no entries for this category" state.
    pub fn is_empty(&self) -> bool {
        self.is_ready && self.total_count == 0
    }

    pub fn is_copied(&self, id: &EntryId) -> bool {
        self.copied_entry_id.as_ref() == Some(id)
    }
}
