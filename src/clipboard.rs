//! Clipboard access for pasting links with Ctrl+V.

use arboard::Clipboard;

/// Handler for clipboard operations.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    pub fn new() -> Result<Self, arboard::Error> {
        let clipboard = Clipboard::new()?;
        Ok(Self { clipboard })
    }

    /// Read text from the system clipboard.
    pub fn get_text(&mut self) -> Result<String, arboard::Error> {
        self.clipboard.get_text()
    }
}
