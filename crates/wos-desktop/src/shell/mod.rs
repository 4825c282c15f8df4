//! Desktop shell module
//!
//! Desktop icons on a snapping grid, icon selection, keyboard navigation
//! and context menus. The shell never touches windows directly; it reports
//! [`ShellAction`]s that the engine turns into window manager calls.

mod grid;
mod icon;
mod menu;
mod shell;

pub use grid::{GridPos, IconGrid, IconSize};
pub use icon::DesktopIcon;
pub use menu::{ContextMenu, MenuAction, MenuItem, MenuTarget};
pub use shell::{DesktopShell, Key, ShellAction};

/// Unique desktop icon identifier
pub type IconId = String;
