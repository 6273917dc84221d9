use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Failed to access clipboard: {0}")]
    Unavailable(String),
    #[error("Failed to copy to clipboard: {0}")]
    WriteFailed(String),
}

/// Something that can place text on a clipboard
pub trait ClipboardWriter {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The platform clipboard.
///
/// A handle is opened for each write and dropped before `write` returns,
/// whether or not the copy succeeded. On Linux the selection is owned by the
/// process that set it, so `write` blocks until another client takes it over
/// (a paste into a clipboard manager, or a newer copy); the text lives only
/// as long as its owner.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        set_text(&mut clipboard, text).map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

#[cfg(target_os = "linux")]
fn set_text(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;
    clipboard.set().wait().text(text)
}

#[cfg(not(target_os = "linux"))]
fn set_text(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

/// Copy text, reporting failure to the caller
pub fn try_copy_text(writer: &mut dyn ClipboardWriter, text: &str) -> Result<(), ClipboardError> {
    writer.write(text)?;
    tracing::debug!(chars = text.chars().count(), "copied text to clipboard");
    Ok(())
}

/// Copy text to the clipboard. Failures are logged and otherwise ignored.
pub fn copy_text(writer: &mut dyn ClipboardWriter, text: &str) {
    if let Err(e) = try_copy_text(writer, text) {
        tracing::warn!(error = %e, "clipboard copy failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryClipboard {
        contents: Option<String>,
        writes: usize,
    }

    impl ClipboardWriter for MemoryClipboard {
        fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.writes += 1;
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    struct BrokenClipboard;

    impl ClipboardWriter for BrokenClipboard {
        fn write(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable("no display".to_string()))
        }
    }

    #[test]
    fn copy_places_text() {
        let mut clipboard = MemoryClipboard::default();
        copy_text(&mut clipboard, "https://api.example.com/media/x.png");
        assert_eq!(clipboard.contents.as_deref(), Some("https://api.example.com/media/x.png"));
        assert_eq!(clipboard.writes, 1);
    }

    #[test]
    fn copy_overwrites_previous_contents() {
        let mut clipboard = MemoryClipboard::default();
        copy_text(&mut clipboard, "first");
        copy_text(&mut clipboard, "second");
        assert_eq!(clipboard.contents.as_deref(), Some("second"));
        assert_eq!(clipboard.writes, 2);
    }

    #[test]
    fn copy_failure_is_silent() {
        let mut clipboard = BrokenClipboard;
        copy_text(&mut clipboard, "lost");
    }

    #[test]
    fn try_copy_reports_failure() {
        let mut clipboard = BrokenClipboard;
        let err = try_copy_text(&mut clipboard, "lost").unwrap_err();
        assert!(matches!(err, ClipboardError::Unavailable(_)));
        assert_eq!(err.to_string(), "Failed to access clipboard: no display");
    }
}
