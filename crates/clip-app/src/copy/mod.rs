//! Copy-to-clipboard interaction with a transient "copied" acknowledgment.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clip_core::ports::{ClipboardPort, LegacyClipboardPort};
use clip_core::{Entry, EntryId};
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::task::{lock, ScheduledTask};

/// Which clipboard path handled a copy.
///
/// Every variant arms the acknowledgment, including `FallbackFailed`: the
/// UI never shows a copy failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyOutcome {
    Copied,
    CopiedViaFallback,
    FallbackFailed,
}

impl CopyOutcome {
    pub fn reached_clipboard(&self) -> bool {
        !matches!(self, CopyOutcome::FallbackFailed)
    }
}

struct Acknowledgment {
    tx: watch::Sender<Option<EntryId>>,
    // Bumped on every copy; a clear timer only acts on its own generation.
    generation: AtomicU64,
}

pub struct CopyInteractionHandler {
    clipboard: Arc<dyn ClipboardPort>,
    legacy: Arc<dyn LegacyClipboardPort>,
    window: Duration,
    ack: Arc<Acknowledgment>,
    clear_task: Mutex<ScheduledTask>,
}

impl CopyInteractionHandler {
    pub fn new(
        clipboard: Arc<dyn ClipboardPort>,
        legacy: Arc<dyn LegacyClipboardPort>,
        window: Duration,
    ) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            clipboard,
            legacy,
            window,
            ack: Arc::new(Acknowledgment {
                tx,
                generation: AtomicU64::new(0),
            }),
            clear_task: Mutex::new(ScheduledTask::new()),
        }
    }

    /// Copy `entry.payload` and acknowledge `entry.id` for the window.
    ///
    /// Must be called from within a Tokio runtime; the acknowledgment clear
    /// is a spawned timer. A new copy replaces any pending acknowledgment
    /// and restarts the window.
    pub fn copy(&self, entry: &Entry) -> CopyOutcome {
        let outcome = match self.clipboard.write_text(&entry.payload) {
            Ok(()) => CopyOutcome::Copied,
            Err(err) => {
                warn!(entry_id = %entry.id, error = %err, "clipboard write failed, trying carrier fallback");
                match self.legacy.copy_via_carrier(&entry.payload) {
                    Ok(()) => CopyOutcome::CopiedViaFallback,
                    Err(err) => {
                        warn!(entry_id = %entry.id, error = %err, "carrier fallback failed");
                        CopyOutcome::FallbackFailed
                    }
                }
            }
        };

        self.acknowledge(entry.id.clone());
        info!(entry_id = %entry.id, ?outcome, "entry copied");
        outcome
    }

    pub fn copied_entry_id(&self) -> Option<EntryId> {
        self.ack.tx.borrow().clone()
    }

    pub fn is_copied(&self, id: &EntryId) -> bool {
        self.ack.tx.borrow().as_ref() == Some(id)
    }

    /// Receiver notified whenever the acknowledged entry changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<EntryId>> {
        self.ack.tx.subscribe()
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    fn acknowledge(&self, id: EntryId) {
        let mut generation = 0;
        self.ack.tx.send_modify(|current| {
            generation = self.ack.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *current = Some(id);
        });

        let ack = Arc::clone(&self.ack);
        let window = self.window;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(window).await;
            let cleared = ack.tx.send_if_modified(|current| {
                if ack.generation.load(Ordering::SeqCst) != generation || current.is_none() {
                    return false;
                }
                *current = None;
                true
            });
            if cleared {
                debug!("copy acknowledgment cleared");
            }
        });
        lock(&self.clear_task).replace(handle.abort_handle());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use clip_core::{Category, Renderer};
    use tokio::time::sleep;

    mockall::mock! {
        Primary {}
        impl ClipboardPort for Primary {
            fn write_text(&self, text: &str) -> anyhow::Result<()>;
        }
    }

    mockall::mock! {
        Legacy {}
        impl LegacyClipboardPort for Legacy {
            fn copy_via_carrier(&self, text: &str) -> anyhow::Result<()>;
        }
    }

    const WINDOW: Duration = Duration::from_millis(2000);

    fn entry(id: &str) -> Entry {
        Entry::new(
            id,
            id,
            "",
            Category::Buttons,
            format!("<{id} />"),
            Renderer::component(id),
        )
    }

    fn ok_primary() -> MockPrimary {
        let mut primary = MockPrimary::new();
        primary.expect_write_text().returning(|_| Ok(()));
        primary
    }

    fn unused_legacy() -> MockLegacy {
        let mut legacy = MockLegacy::new();
        legacy.expect_copy_via_carrier().never();
        legacy
    }

    fn handler(primary: MockPrimary, legacy: MockLegacy) -> CopyInteractionHandler {
        CopyInteractionHandler::new(Arc::new(primary), Arc::new(legacy), WINDOW)
    }

    #[tokio::test(start_paused = true)]
    async fn primary_success_acknowledges_for_window() {
        let mut primary = MockPrimary::new();
        primary
            .expect_write_text()
            .withf(|text| text == "<a />")
            .times(1)
            .returning(|_| Ok(()));
        let handler = handler(primary, unused_legacy());

        assert_eq!(handler.copy(&entry("a")), CopyOutcome::Copied);
        assert_eq!(handler.copied_entry_id(), Some(EntryId::from("a")));

        sleep(Duration::from_millis(1999)).await;
        assert!(handler.is_copied(&EntryId::from("a")));

        sleep(Duration::from_millis(2)).await;
        assert_eq!(handler.copied_entry_id(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn second_copy_restarts_window() {
        let handler = handler(ok_primary(), unused_legacy());

        handler.copy(&entry("a"));
        sleep(Duration::from_millis(500)).await;
        handler.copy(&entry("b"));

        // t = 2400ms: the first timer would have fired at 2000ms.
        sleep(Duration::from_millis(1900)).await;
        assert_eq!(handler.copied_entry_id(), Some(EntryId::from("b")));

        // t = 2600ms: past the restarted window.
        sleep(Duration::from_millis(200)).await;
        assert_eq!(handler.copied_entry_id(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn primary_failure_uses_fallback() {
        let mut primary = MockPrimary::new();
        primary
            .expect_write_text()
            .returning(|_| Err(anyhow!("permission denied")));
        let mut legacy = MockLegacy::new();
        legacy
            .expect_copy_via_carrier()
            .withf(|text| text == "<a />")
            .times(1)
            .returning(|_| Ok(()));
        let handler = handler(primary, legacy);

        assert_eq!(handler.copy(&entry("a")), CopyOutcome::CopiedViaFallback);
        assert!(handler.is_copied(&EntryId::from("a")));
    }

    #[tokio::test(start_paused = true)]
    async fn both_paths_failing_still_acknowledges() {
        let mut primary = MockPrimary::new();
        primary
            .expect_write_text()
            .returning(|_| Err(anyhow!("no clipboard")));
        let mut legacy = MockLegacy::new();
        legacy
            .expect_copy_via_carrier()
            .returning(|_| Err(anyhow!("no carrier")));
        let handler = handler(primary, legacy);

        let outcome = handler.copy(&entry("a"));
        assert_eq!(outcome, CopyOutcome::FallbackFailed);
        assert!(!outcome.reached_clipboard());
        assert!(handler.is_copied(&EntryId::from("a")));

        sleep(WINDOW + Duration::from_millis(1)).await;
        assert_eq!(handler.copied_entry_id(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_set_and_clear() {
        let handler = handler(ok_primary(), unused_legacy());
        let mut rx = handler.subscribe();

        handler.copy(&entry("a"));
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), Some(EntryId::from("a")));

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_handler_cancels_clear_timer() {
        let handler = handler(ok_primary(), unused_legacy());
        let mut rx = handler.subscribe();
        handler.copy(&entry("a"));
        let _ = rx.borrow_and_update();

        drop(handler);
        sleep(WINDOW * 2).await;
        // Sender is gone and no clear was ever sent.
        assert!(rx.has_changed().is_err());
        assert_eq!(*rx.borrow(), Some(EntryId::from("a")));
    }
}
