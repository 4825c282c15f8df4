//! Error Types for Web OS Apps
//!
//! Defines errors that can occur while an app handles user actions.

use std::fmt;
use wos_desktop::DesktopError;

/// Errors that can occur in app execution
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// The desktop refused to open or track the app's window
    Desktop(DesktopError),

    /// File contents are not valid UTF-8
    InvalidEncoding {
        file_name: String,
    },

    /// File type the app does not open
    UnsupportedFile(String),

    /// The user declined a confirmation
    Cancelled,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Desktop(e) => write!(f, "Desktop error: {}", e),
            AppError::InvalidEncoding { file_name } => {
                write!(f, "Error reading file: {} is not valid UTF-8 text", file_name)
            }
            AppError::UnsupportedFile(name) => write!(f, "Unsupported file: {}", name),
            AppError::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Desktop(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DesktopError> for AppError {
    fn from(e: DesktopError) -> Self {
        AppError::Desktop(e)
    }
}

/// Result type alias for app operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_desktop_error_is_source() {
        let err = AppError::from(DesktopError::DuplicateId("notepad-1".to_string()));
        assert!(err.to_string().contains("notepad-1"));
        assert!(err.source().is_some());
        assert!(AppError::Cancelled.source().is_none());
    }
}
