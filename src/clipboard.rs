//! Clipboard port used when sharing a unit.

use arboard::Clipboard;

pub trait ClipboardPort {
    fn copy_text(&mut self, text: &str) -> Result<(), String>;
}

/// The desktop clipboard. Opened lazily so a headless session still starts.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl ClipboardPort for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), String> {
        if self.inner.is_none() {
            self.inner = Some(Clipboard::new().map_err(|e| e.to_string())?);
        }
        match self.inner.as_mut() {
            Some(clipboard) => clipboard.set_text(text).map_err(|e| e.to_string()),
            None => Err("clipboard unavailable".to_string()),
        }
    }
}

/// Keeps copied text in memory.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

#[cfg(test)]
impl ClipboardPort for MemoryClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), String> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
