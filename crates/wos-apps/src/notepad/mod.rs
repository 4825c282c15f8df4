//! Notepad Application
//!
//! Plain-text editor bound to a desktop window. Demonstrates:
//! - Opening app windows through the engine
//! - Document state kept outside the window manager
//! - Tracking window lifecycle events

mod document;

pub use document::{Document, SavedFile, SAVE_FILE_NAME, SAVE_MIME_TYPE};

use std::collections::HashMap;
use tracing::{debug, info};
use wos_desktop::{DesktopEngine, WindowEvent, WindowId};
use crate::error::AppResult;

/// Dock and catalogue id of the notepad app
pub const APP_ID: &str = "notepad";

/// Toolbar buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotepadCommand {
    New,
    Open,
    Save,
}

impl NotepadCommand {
    /// Map a toolbar button's CSS class
    pub fn from_class(class: &str) -> Option<Self> {
        match class {
            "new-btn" => Some(NotepadCommand::New),
            "open-btn" => Some(NotepadCommand::Open),
            "save-btn" => Some(NotepadCommand::Save),
            _ => None,
        }
    }
}

/// What a toolbar command asks of the host
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotepadOutcome {
    /// The editor was emptied
    Cleared,
    /// Show a file picker, then hand the file to [`Document::open_bytes`]
    PickFile,
    /// Offer this file for download
    Saved(SavedFile),
}

/// One notepad window and its document
#[derive(Clone, Debug)]
pub struct Notepad {
    window_id: WindowId,
    document: Document,
}

impl Notepad {
    /// Open a new notepad window
    ///
    /// The window id defaults to `notepad-{now_ms}`. An id that is already
    /// open fails with a desktop error.
    pub fn open(engine: &mut DesktopEngine, id: Option<WindowId>, now_ms: f64) -> AppResult<Self> {
        let window_id = id.unwrap_or_else(|| format!("{}-{}", APP_ID, now_ms as u64));
        let window_id = engine.launch_app_with_id(APP_ID, window_id)?;
        Ok(Self::attach(window_id))
    }

    /// Bind a document to a window that is already open
    pub fn attach(window_id: impl Into<WindowId>) -> Self {
        Self {
            window_id: window_id.into(),
            document: Document::new(),
        }
    }

    pub fn window_id(&self) -> &str {
        &self.window_id
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Run a toolbar command
    ///
    /// `confirm` is asked before discarding text on New.
    pub fn run(
        &mut self,
        command: NotepadCommand,
        confirm: impl FnOnce() -> bool,
    ) -> AppResult<NotepadOutcome> {
        debug!(window_id = %self.window_id, ?command, "notepad command");
        match command {
            NotepadCommand::New => {
                self.document.new_file(confirm)?;
                Ok(NotepadOutcome::Cleared)
            }
            NotepadCommand::Open => Ok(NotepadOutcome::PickFile),
            NotepadCommand::Save => Ok(NotepadOutcome::Saved(self.document.save())),
        }
    }
}

/// Keeps one [`Notepad`] per open notepad window
#[derive(Debug, Default)]
pub struct NotepadHost {
    notepads: HashMap<WindowId, Notepad>,
}

impl NotepadHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a notepad window and start tracking it
    pub fn open(
        &mut self,
        engine: &mut DesktopEngine,
        id: Option<WindowId>,
        now_ms: f64,
    ) -> AppResult<&mut Notepad> {
        let notepad = Notepad::open(engine, id, now_ms)?;
        let window_id = notepad.window_id.clone();
        Ok(self.notepads.entry(window_id).or_insert(notepad))
    }

    /// Apply pending window events from the engine
    ///
    /// Picks up notepads launched from icons, the dock or menus, and drops
    /// the ones whose window closed.
    pub fn pump(&mut self, engine: &mut DesktopEngine) {
        for event in engine.take_events() {
            let is_notepad = engine
                .dock
                .app_for_window(event.window_id())
                .is_some_and(|app| app.id == APP_ID);
            self.on_window_event(&event, is_notepad);
        }
    }

    /// Track one lifecycle event; `is_notepad` says whether the window
    /// belongs to the notepad app
    pub fn on_window_event(&mut self, event: &WindowEvent, is_notepad: bool) {
        match event {
            WindowEvent::Created { id } if is_notepad => {
                if !self.notepads.contains_key(id) {
                    debug!(window_id = %id, "tracking notepad");
                    self.notepads.insert(id.clone(), Notepad::attach(id.clone()));
                }
            }
            WindowEvent::Closed { id } => {
                if let Some(notepad) = self.notepads.remove(id) {
                    info!(
                        window_id = %id,
                        unsaved = notepad.document.is_dirty(),
                        "notepad closed"
                    );
                }
            }
            _ => {}
        }
    }

    /// Dispatch a toolbar button click
    ///
    /// Returns `Ok(None)` when the window is not a tracked notepad or the
    /// class is not a toolbar button.
    pub fn click(
        &mut self,
        window_id: &str,
        class: &str,
        confirm: impl FnOnce() -> bool,
    ) -> AppResult<Option<NotepadOutcome>> {
        let Some(command) = NotepadCommand::from_class(class) else {
            return Ok(None);
        };
        match self.notepads.get_mut(window_id) {
            Some(notepad) => notepad.run(command, confirm).map(Some),
            None => Ok(None),
        }
    }

    pub fn get(&self, window_id: &str) -> Option<&Notepad> {
        self.notepads.get(window_id)
    }

    pub fn get_mut(&mut self, window_id: &str) -> Option<&mut Notepad> {
        self.notepads.get_mut(window_id)
    }

    pub fn len(&self) -> usize {
        self.notepads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notepads.is_empty()
    }
}
