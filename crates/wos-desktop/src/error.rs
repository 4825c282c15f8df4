//! Error types for the desktop
//!
//! Only a handful of operations can fail. Window lifecycle calls on ids
//! that are no longer open are silent no-ops, so they never show up here.

use crate::shell::IconId;
use crate::window::WindowId;

/// Errors that can occur in desktop operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// A window with this id is already open
    DuplicateId(WindowId),

    /// A desktop icon with this id already exists
    DuplicateIcon(IconId),

    /// Every cell of the icon grid is taken
    GridFull,

    /// No application is registered under this id
    UnknownApp(String),

    /// The application is registered but cannot be launched yet
    AppUnavailable(String),

    /// Configuration could not be parsed or failed validation
    InvalidConfig(String),
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "window already exists: {}", id),
            Self::DuplicateIcon(id) => write!(f, "icon already exists: {}", id),
            Self::GridFull => write!(f, "icon grid is full"),
            Self::UnknownApp(id) => write!(f, "unknown application: {}", id),
            Self::AppUnavailable(title) => write!(f, "{} is coming soon", title),
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for DesktopError {}

impl From<serde_json::Error> for DesktopError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidConfig(e.to_string())
    }
}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;
