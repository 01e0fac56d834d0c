use anyhow::{anyhow, Result};
use clip_core::ports::LegacyClipboardPort;
use tracing::{debug, instrument};

/// Fallback clipboard path backed by `arboard`.
///
/// Each copy opens a fresh clipboard handle as the carrier, loads the text,
/// and drops the handle once the copy is issued.
#[derive(Debug, Default)]
pub struct CarrierClipboard;

impl CarrierClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl LegacyClipboardPort for CarrierClipboard {
    #[instrument(skip_all, fields(text_len = text.len()))]
    fn copy_via_carrier(&self, text: &str) -> Result<()> {
        let mut carrier =
            arboard::Clipboard::new().map_err(|e| anyhow!("open clipboard carrier failed: {e}"))?;
        carrier
            .set_text(text.to_string())
            .map_err(|e| anyhow!("carrier copy failed: {e}"))?;
        debug!("text copied through carrier clipboard");
        Ok(())
    }
}
