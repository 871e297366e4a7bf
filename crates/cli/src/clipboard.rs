//! The host clipboard behind the core `Clipboard` trait.

use cmdsheet_core::error::{Error, Result};
use cmdsheet_core::session::Clipboard;

/// Opens the system clipboard on every write, so running without a display
/// only fails when a copy is actually requested.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(text))
            .map_err(|e| Error::Clipboard(e.to_string()))
    }
}
