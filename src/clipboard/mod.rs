//! Copying conversion results to the system clipboard

use anyhow::{Context, Result, bail};
use arboard::Clipboard;

/// Upper bound on copied text. A u64 in binary with sign and prefix is 67 bytes;
/// anything far beyond that is not a conversion result.
const MAX_CLIPBOARD_SIZE: usize = 4 * 1024;

/// Clipboard seam so copy logic can be tested without a display server
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

fn validate_clipboard_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        bail!("Nothing to copy: convert a number first");
    }

    if text.len() > MAX_CLIPBOARD_SIZE {
        bail!("Text too large for clipboard ({} bytes, max {})", text.len(), MAX_CLIPBOARD_SIZE);
    }

    Ok(())
}

fn copy_with_provider(text: &str, provider: &mut dyn ClipboardProvider) -> Result<()> {
    validate_clipboard_text(text)?;
    provider.set_text(text)
}

/// Copy text to the system clipboard.
///
/// Validation runs before the clipboard is opened, so empty or oversized input
/// fails the same way in headless environments.
///
/// # Errors
/// - Text is empty or whitespace
/// - Text is larger than 4 KiB
/// - The system clipboard is unavailable (no display, access denied)
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    validate_clipboard_text(text)?;
    let mut clipboard = SystemClipboard::new()?;
    copy_with_provider(text, &mut clipboard)
}
