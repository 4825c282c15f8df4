//! Notepad document model

use tracing::debug;
use crate::error::{AppError, AppResult};

/// File name used for every save
pub const SAVE_FILE_NAME: &str = "notepad.txt";

/// MIME type of saved files
pub const SAVE_MIME_TYPE: &str = "text/plain";

/// A file ready for the host to download
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Text being edited in one notepad window
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    text: String,
    /// Name of the last opened file
    file_name: Option<String>,
    dirty: bool,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the editor contents (user typing)
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.dirty = true;
    }

    /// Changed since the last new/open/save
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Clear the editor
    ///
    /// `confirm` is asked only when there is text to lose. Declining
    /// returns [`AppError::Cancelled`] and keeps the text.
    pub fn new_file(&mut self, confirm: impl FnOnce() -> bool) -> AppResult<()> {
        if !self.text.is_empty() && !confirm() {
            return Err(AppError::Cancelled);
        }
        self.text.clear();
        self.file_name = None;
        self.dirty = false;
        Ok(())
    }

    /// Load a picked `.txt` file
    ///
    /// On error the current text is left untouched.
    pub fn open_bytes(&mut self, name: &str, bytes: &[u8]) -> AppResult<()> {
        if !name.to_ascii_lowercase().ends_with(".txt") {
            return Err(AppError::UnsupportedFile(name.to_string()));
        }
        let text = std::str::from_utf8(bytes).map_err(|_| AppError::InvalidEncoding {
            file_name: name.to_string(),
        })?;

        self.text = text.to_string();
        self.file_name = Some(name.to_string());
        self.dirty = false;
        debug!(file_name = name, len = bytes.len(), "file opened");
        Ok(())
    }

    /// Snapshot the text as a downloadable file
    pub fn save(&mut self) -> SavedFile {
        self.dirty = false;
        SavedFile {
            file_name: SAVE_FILE_NAME.to_string(),
            mime: SAVE_MIME_TYPE.to_string(),
            bytes: self.text.as_bytes().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_file_on_empty_does_not_ask() {
        let mut doc = Document::new();
        assert!(doc.new_file(|| panic!("should not ask")).is_ok());
    }

    #[test]
    fn test_new_file_declined_keeps_text() {
        let mut doc = Document::new();
        doc.set_text("draft");

        assert_eq!(doc.new_file(|| false), Err(AppError::Cancelled));
        assert_eq!(doc.text(), "draft");
        assert!(doc.is_dirty());

        doc.new_file(|| true).unwrap();
        assert_eq!(doc.text(), "");
        assert!(!doc.is_dirty());
    }

    #[test]
    fn test_open_txt() {
        let mut doc = Document::new();
        doc.open_bytes("Notes.TXT", "héllo".as_bytes()).unwrap();
        assert_eq!(doc.text(), "héllo");
        assert_eq!(doc.file_name(), Some("Notes.TXT"));
        assert!(!doc.is_dirty());
    }

    #[test]
    fn test_open_rejects_other_types_and_bad_utf8() {
        let mut doc = Document::new();
        doc.set_text("keep");

        assert_eq!(
            doc.open_bytes("image.png", b"\x89PNG"),
            Err(AppError::UnsupportedFile("image.png".to_string()))
        );
        assert_eq!(
            doc.open_bytes("broken.txt", &[0xff, 0xfe, 0x00]),
            Err(AppError::InvalidEncoding { file_name: "broken.txt".to_string() })
        );
        assert_eq!(doc.text(), "keep");
    }

    #[test]
    fn test_save() {
        let mut doc = Document::new();
        doc.set_text("line one\nline two");

        let file = doc.save();
        assert_eq!(file.file_name, "notepad.txt");
        assert_eq!(file.mime, "text/plain");
        assert_eq!(file.bytes, b"line one\nline two");
        assert!(!doc.is_dirty());
    }
}
