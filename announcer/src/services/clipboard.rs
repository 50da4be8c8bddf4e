// System clipboard access.
//
// On X11/Wayland the copying process owns the selection: the text is gone as soon
// as the owner exits unless a clipboard manager (or another app) has taken it over.
// A short-lived CLI therefore has to hold on until that hand-off happens.
use crate::error::{AnnouncerError, Result};

pub trait ClipboardWriter: Send + Sync {
    /// Returns once the text is available to other applications.
    fn write_text(&self, text: &str) -> Result<()>;
}

#[derive(Debug, Default, Clone)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        copy_text(text)
    }
}

/// Copies text to the system clipboard. Empty text is left alone.
///
/// Blocks on Linux until another owner takes the selection over.
pub fn copy_text(text: &str) -> Result<()> {
    if text.is_empty() {
        return Ok(());
    }

    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| AnnouncerError::Clipboard(e.to_string()))?;
    set_and_hand_off(&mut clipboard, text)?;

    tracing::debug!(bytes = text.len(), "Copied message to clipboard");
    Ok(())
}

#[cfg(target_os = "linux")]
fn set_and_hand_off(clipboard: &mut arboard::Clipboard, text: &str) -> Result<()> {
    use arboard::SetExtLinux;

    tracing::info!("Holding the clipboard until another application takes it over");
    clipboard
        .set()
        .wait()
        .text(text)
        .map_err(|e| AnnouncerError::Clipboard(e.to_string()))
}

#[cfg(not(target_os = "linux"))]
fn set_and_hand_off(clipboard: &mut arboard::Clipboard, text: &str) -> Result<()> {
    clipboard
        .set_text(text)
        .map_err(|e| AnnouncerError::Clipboard(e.to_string()))
}
