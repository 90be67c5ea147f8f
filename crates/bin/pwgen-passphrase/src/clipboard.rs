//! system clipboard

use std::time::Duration;

use anyhow::Result;
use arboard::Clipboard;
use tracing::debug;

/// joins multiple passphrases in the clipboard text
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// on x11/wayland the owning process serves the selection, so we stay
/// alive briefly to let a clipboard manager take it over
const HANDOFF_DELAY: Duration = Duration::from_millis(500);

pub fn copy(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    debug!(chars = text.chars().count(), "clipboard set");
    std::thread::sleep(HANDOFF_DELAY);
    Ok(())
}
