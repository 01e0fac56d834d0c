use std::sync::Mutex;

use anyhow::{anyhow, Result};
use clip_core::ports::ClipboardPort;
use clipboard_rs::{Clipboard, ClipboardContext};
use tracing::{debug, instrument, warn};

fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

/// Primary clipboard path backed by `clipboard-rs`.
///
/// The native context is opened once. When that fails the adapter stays
/// usable but every write reports the clipboard as unavailable, which sends
/// callers down their fallback path.
pub struct SystemClipboard {
    inner: Option<Mutex<ClipboardContext>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        match map_clipboard_err(ClipboardContext::new()) {
            Ok(ctx) => Self {
                inner: Some(Mutex::new(ctx)),
            },
            Err(err) => {
                warn!(error = %err, "system clipboard unavailable");
                Self { inner: None }
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.inner.is_some()
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardPort for SystemClipboard {
    #[instrument(skip_all, fields(text_len = text.len()))]
    fn write_text(&self, text: &str) -> Result<()> {
        let inner = self
            .inner
            .as_ref()
            .ok_or_else(|| anyhow!("system clipboard unavailable"))?;
        let ctx = inner
            .lock()
            .map_err(|_| anyhow!("system clipboard lock poisoned"))?;
        map_clipboard_err(ctx.set_text(text.to_string()))?;
        debug!("text written to system clipboard");
        Ok(())
    }
}
