//! Web OS Applications
//!
//! Applications that run inside desktop windows. Each app keeps its own
//! document state and binds to a window opened through
//! [`wos_desktop::DesktopEngine`].
//!
//! - **Notepad**: plain-text editor with new/open/save
//! - **NotepadHost**: tracks one notepad per open window
//!
//! # Example
//!
//! ```rust
//! use wos_apps::NotepadHost;
//! use wos_desktop::{DesktopConfig, DesktopEngine, Size};
//!
//! let mut engine = DesktopEngine::new(DesktopConfig::default(), Size::new(1280.0, 720.0));
//! let mut host = NotepadHost::new();
//!
//! let id = host.open(&mut engine, None, 1_000.0).unwrap().window_id().to_string();
//! host.get_mut(&id).unwrap().document_mut().set_text("hello");
//!
//! engine.close_window(&id);
//! host.pump(&mut engine);
//! assert!(host.get(&id).is_none());
//! ```

pub mod error;
pub mod notepad;

pub use error::{AppError, AppResult};
pub use notepad::{Document, Notepad, NotepadCommand, NotepadHost, NotepadOutcome, SavedFile};
