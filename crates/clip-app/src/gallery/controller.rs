use std::sync::{Arc, Mutex};

use clip_core::ports::{ClipboardPort, LegacyClipboardPort};
use clip_core::{Catalog, CategoryFilter, EntryId, GalleryConfig};
use tokio::sync::watch;
use tracing::{debug, info};

use super::GalleryView;
use crate::copy::{CopyInteractionHandler, CopyOutcome};
use crate::preference::{PersistedPreference, PreferenceStore};
use crate::task::{lock, ScheduledTask};

/// Collaborators a [`GalleryController`] is built from.
///
/// Plain parameter grouping; every field is required.
pub struct GalleryDeps {
    pub catalog: Arc<Catalog>,
    pub preferences: PreferenceStore,
    pub clipboard: Arc<dyn ClipboardPort>,
    pub legacy_clipboard: Arc<dyn LegacyClipboardPort>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Uninitialized,
    Ready,
}

#[derive(Debug)]
struct GalleryState {
    phase: Phase,
    selected: CategoryFilter,
    displayed_count: usize,
    is_loading: bool,
    // Bumped by every category change; a load completion carrying an older
    // generation is stale.
    generation: u64,
}

struct Shared {
    catalog: Arc<Catalog>,
    config: GalleryConfig,
    preference: PersistedPreference<CategoryFilter>,
    state: Mutex<GalleryState>,
    copied: watch::Receiver<Option<EntryId>>,
    view_tx: watch::Sender<GalleryView>,
}

impl Shared {
    fn initial_count(&self, filter: CategoryFilter) -> usize {
        self.config.page_size.min(self.catalog.count(filter))
    }

    fn compute_view(&self) -> GalleryView {
        let state = lock(&self.state);
        if state.phase == Phase::Uninitialized {
            return GalleryView::uninitialized();
        }

        let total_count = self.catalog.count(state.selected);
        GalleryView {
            visible_entries: self
                .catalog
                .filtered(state.selected)
                .take(state.displayed_count)
                .cloned()
                .collect(),
            selected_category: state.selected,
            displayed_count: state.displayed_count,
            total_count,
            has_more: state.displayed_count < total_count,
            is_loading: state.is_loading,
            is_ready: true,
            copied_entry_id: self.copied.borrow().clone(),
        }
    }

    fn publish(&self) {
        self.view_tx.send_replace(self.compute_view());
    }

    fn complete_load_more(&self, generation: u64) {
        {
            let mut state = lock(&self.state);
            if state.generation != generation {
                debug!(generation, current = state.generation, "stale load more discarded");
                return;
            }
            let total = self.catalog.count(state.selected);
            state.displayed_count = (state.displayed_count + self.config.page_size).min(total);
            state.is_loading = false;
            debug!(displayed = state.displayed_count, total, "load more applied");
        }
        self.publish();
    }
}

/// State machine behind one gallery view.
///
/// Starts `Uninitialized`; [`initialize`](Self::initialize) loads the
/// persisted category and moves it to `Ready`. Actions issued before that are
/// ignored. Dropping the controller cancels its pending load and the copy
/// acknowledgment timer.
pub struct GalleryController {
    shared: Arc<Shared>,
    copy_handler: CopyInteractionHandler,
    load_task: Mutex<ScheduledTask>,
    ack_forward: Mutex<ScheduledTask>,
}

impl GalleryController {
    pub fn new(deps: GalleryDeps, config: GalleryConfig) -> Self {
        let copy_handler = CopyInteractionHandler::new(
            deps.clipboard,
            deps.legacy_clipboard,
            config.copy_ack_window,
        );
        let preference =
            PersistedPreference::new(deps.preferences, config.storage_key.clone(), CategoryFilter::All);
        let (view_tx, _view_rx) = watch::channel(GalleryView::uninitialized());

        let shared = Arc::new(Shared {
            catalog: deps.catalog,
            config,
            preference,
            state: Mutex::new(GalleryState {
                phase: Phase::Uninitialized,
                selected: CategoryFilter::All,
                displayed_count: 0,
                is_loading: false,
                generation: 0,
            }),
            copied: copy_handler.subscribe(),
            view_tx,
        });

        Self {
            shared,
            copy_handler,
            load_task: Mutex::new(ScheduledTask::new()),
            ack_forward: Mutex::new(ScheduledTask::new()),
        }
    }

    /// Load the persisted category and become ready. Idempotent.
    pub async fn initialize(&self) {
        let selected = self.shared.preference.load().await;
        {
            let mut state = lock(&self.shared.state);
            if state.phase == Phase::Ready {
                return;
            }
            state.phase = Phase::Ready;
            state.selected = selected;
            state.displayed_count = self.shared.initial_count(selected);
            info!(
                category = %selected,
                displayed = state.displayed_count,
                "gallery ready"
            );
        }

        let shared = Arc::clone(&self.shared);
        let mut copied = self.copy_handler.subscribe();
        let handle = tokio::spawn(async move {
            while copied.changed().await.is_ok() {
                shared.publish();
            }
        });
        lock(&self.ack_forward).replace(handle.abort_handle());

        self.shared.publish();
    }

    pub fn is_ready(&self) -> bool {
        lock(&self.shared.state).phase == Phase::Ready
    }

    /// Current render-boundary snapshot.
    pub fn view(&self) -> GalleryView {
        self.shared.compute_view()
    }

    /// Receiver updated after every state change.
    pub fn subscribe(&self) -> watch::Receiver<GalleryView> {
        self.shared.view_tx.subscribe()
    }

    /// Switch category. Resets pagination, supersedes any in-flight load,
    /// and writes the choice through to the preference store.
    pub fn select_category(&self, filter: CategoryFilter) {
        {
            let mut state = lock(&self.shared.state);
            if state.phase != Phase::Ready {
                debug!(category = %filter, "select ignored, gallery not ready");
                return;
            }
            state.selected = filter;
            state.displayed_count = self.shared.initial_count(filter);
            state.is_loading = false;
            state.generation += 1;
            debug!(category = %filter, displayed = state.displayed_count, "category selected");
        }
        lock(&self.load_task).cancel();
        self.shared.preference.set(filter);
        self.shared.publish();
    }

    /// Reveal the next page after the configured latency.
    ///
    /// Returns `false` (and does nothing) when not ready, when a load is
    /// already in flight, or when every filtered entry is already shown.
    pub fn load_more(&self) -> bool {
        let generation = {
            let mut state = lock(&self.shared.state);
            if state.phase != Phase::Ready {
                debug!("load more ignored, gallery not ready");
                return false;
            }
            if state.is_loading {
                debug!("load more ignored, already loading");
                return false;
            }
            if state.displayed_count >= self.shared.catalog.count(state.selected) {
                return false;
            }
            state.is_loading = true;
            state.generation
        };
        self.shared.publish();

        let shared = Arc::clone(&self.shared);
        let delay = self.shared.config.load_more_delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            shared.complete_load_more(generation);
        });
        lock(&self.load_task).replace(handle.abort_handle());
        true
    }

    /// Copy the payload of `id`. `None` when not ready or the id is unknown.
    pub fn copy(&self, id: &EntryId) -> Option<CopyOutcome> {
        if !self.is_ready() {
            debug!(entry_id = %id, "copy ignored, gallery not ready");
            return None;
        }
        let Some(entry) = self.shared.catalog.entry_by_id(id) else {
            debug!(entry_id = %id, "copy ignored, unknown entry");
            return None;
        };
        let outcome = self.copy_handler.copy(entry);
        self.shared.publish();
        Some(outcome)
    }

    pub fn selected_category(&self) -> CategoryFilter {
        lock(&self.shared.state).selected
    }

    pub fn displayed_count(&self) -> usize {
        lock(&self.shared.state).displayed_count
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.shared.state).is_loading
    }

    pub fn copied_entry_id(&self) -> Option<EntryId> {
        self.copy_handler.copied_entry_id()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.shared.catalog
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.shared.config
    }
}
