//! Clipboard ports - plain-text writes to the system clipboard.

use anyhow::Result;

/// Primary clipboard path.
///
/// Fails when the platform denies access or no clipboard is available.
pub trait ClipboardPort: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Fallback clipboard path used when [`ClipboardPort`] fails.
///
/// Implementations create a short-lived carrier, load `text` into it and
/// issue the copy through it, then dispose of the carrier.
pub trait LegacyClipboardPort: Send + Sync {
    fn copy_via_carrier(&self, text: &str) -> Result<()>;
}
