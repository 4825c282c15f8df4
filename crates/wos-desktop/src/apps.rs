//! Built-in application catalogue
//!
//! Shared by the dock, the boot-time desktop icons and `launch_app`.

use crate::math::Size;

/// Window an application opens when launched
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppWindow {
    pub title: &'static str,
    pub size: Size,
    /// Initial window markup
    pub content: &'static str,
}

/// A launchable application
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppInfo {
    pub id: &'static str,
    pub label: &'static str,
    /// Image source for dock and desktop icons
    pub icon: &'static str,
    /// `None` for apps that are announced but not implemented yet
    pub window: Option<AppWindow>,
}

impl AppInfo {
    #[inline]
    pub fn is_available(&self) -> bool {
        self.window.is_some()
    }
}

pub const NOTEPAD_MARKUP: &str = r#"<div class="notepad-toolbar"><button class="new-btn">New</button><button class="open-btn">Open</button><button class="save-btn">Save</button></div><textarea class="notepad-editor" spellcheck="false"></textarea>"#;

pub const WELCOME_MARKUP: &str = r#"<div style="padding: 20px; text-align: center;"><h1>Welcome to Web OS!</h1><p>This is a web-based operating system interface.</p><p>Features available:</p><ul style="list-style: none; padding: 0;"><li>✨ Draggable windows</li><li>🔄 Window management</li><li>📑 Multiple windows support</li></ul></div>"#;

const FINDER_ICON: &str = "data:image/svg+xml,%3Csvg%20xmlns%3D%22http%3A//www.w3.org/2000/svg%22%20viewBox%3D%220%200%2024%2024%22%20fill%3D%22%230078D4%22%3E%3Cpath%20d%3D%22M20%204H4c-1.1%200-2%20.9-2%202v12c0%201.1.9%202%202%202h16c1.1%200%202-.9%202-2V6c0-1.1-.9-2-2-2zm0%2014H4V8h16v10z%22/%3E%3C/svg%3E";
const NOTEPAD_ICON: &str = "data:image/svg+xml,%3Csvg%20xmlns%3D%22http%3A//www.w3.org/2000/svg%22%20viewBox%3D%220%200%2024%2024%22%20fill%3D%22%23FFA500%22%3E%3Cpath%20d%3D%22M19%203H5c-1.1%200-2%20.9-2%202v14c0%201.1.9%202%202%202h14c1.1%200%202-.9%202-2V5c0-1.1-.9-2-2-2zm0%2016H5V5h14v14z%22/%3E%3Cpath%20d%3D%22M7%207h10v2H7zm0%204h10v2H7zm0%204h7v2H7z%22/%3E%3C/svg%3E";
const CALCULATOR_ICON: &str = "data:image/svg+xml,%3Csvg%20xmlns%3D%22http%3A//www.w3.org/2000/svg%22%20viewBox%3D%220%200%2024%2024%22%20fill%3D%22%234CAF50%22%3E%3Cpath%20d%3D%22M19%203H5c-1.1%200-2%20.9-2%202v14c0%201.1.9%202%202%202h14c1.1%200%202-.9%202-2V5c0-1.1-.9-2-2-2zm0%2016H5V5h14v14z%22/%3E%3Cpath%20d%3D%22M7%207h4v4H7zm6%200h4v4h-4zm-6%206h4v4H7zm6%200h4v4h-4z%22/%3E%3C/svg%3E";
const TERMINAL_ICON: &str = "data:image/svg+xml,%3Csvg%20xmlns%3D%22http%3A//www.w3.org/2000/svg%22%20viewBox%3D%220%200%2024%2024%22%20fill%3D%22%23E91E63%22%3E%3Cpath%20d%3D%22M20%204H4c-1.1%200-2%20.9-2%202v12c0%201.1.9%202%202%202h16c1.1%200%202-.9%202-2V6c0-1.1-.9-2-2-2zm0%2014H4V8h16v10z%22/%3E%3Cpath%20d%3D%22M6%2012l3-3v6zM12%2014h6v2h-6z%22/%3E%3C/svg%3E";
const SETTINGS_ICON: &str = "data:image/svg+xml,%3Csvg%20xmlns%3D%22http%3A//www.w3.org/2000/svg%22%20viewBox%3D%220%200%2024%2024%22%20fill%3D%22%239E9E9E%22%3E%3Ccircle%20cx%3D%2212%22%20cy%3D%2212%22%20r%3D%223.6%22/%3E%3C/svg%3E";

pub const FINDER: AppInfo = AppInfo { id: "finder", label: "Finder", icon: FINDER_ICON, window: None };

pub const NOTEPAD: AppInfo = AppInfo {
    id: "notepad",
    label: "Notepad",
    icon: NOTEPAD_ICON,
    window: Some(AppWindow {
        title: "Notepad",
        size: Size::new(500.0, 400.0),
        content: NOTEPAD_MARKUP,
    }),
};

pub const CALCULATOR: AppInfo = AppInfo { id: "calculator", label: "Calculator", icon: CALCULATOR_ICON, window: None };

pub const TERMINAL: AppInfo = AppInfo { id: "terminal", label: "Terminal", icon: TERMINAL_ICON, window: None };

pub const SETTINGS: AppInfo = AppInfo { id: "settings", label: "Settings", icon: SETTINGS_ICON, window: None };

/// Every built-in app in dock order
pub const BUILTIN_APPS: [AppInfo; 5] = [FINDER, NOTEPAD, CALCULATOR, TERMINAL, SETTINGS];

/// Apps that get a desktop icon at boot
pub const DESKTOP_APPS: [AppInfo; 4] = [NOTEPAD, CALCULATOR, TERMINAL, SETTINGS];

/// Look up a built-in app
pub fn find_app(id: &str) -> Option<&'static AppInfo> {
    BUILTIN_APPS.iter().find(|app| app.id == id)
}
