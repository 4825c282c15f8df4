//! Window surface manager and desktop shell for Web OS
//!
//! This crate provides the core desktop environment functionality:
//! - Window management (create, close, focus, z-order, minimize, maximize)
//! - Drag constraints that keep windows inside the desktop
//! - Desktop icons on a snapping grid with selection and context menus
//! - A dock that tracks running applications
//! - Input routing and hit testing
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Rect`, `Size`)
//! - [`window`]: Window lifecycle and management
//! - [`shell`]: Desktop icons, selection and menus
//! - [`dock`]: Launchers and running indicators
//! - [`input`]: Input routing and drag state machine
//! - [`invariants`]: Checks for the window manager's cross-window rules
//!
//! ## Example
//!
//! ```rust
//! use wos_desktop::{Size, WindowContent, WindowManager, WindowOptions};
//!
//! let mut wm = WindowManager::new(Size::new(1280.0, 720.0));
//! wm.create_window("w1", "My Window", WindowContent::Empty, Some(WindowOptions::sized(640.0, 480.0)))
//!     .unwrap();
//! wm.move_to("w1", -50.0, 20.0);
//! assert_eq!(wm.get("w1").unwrap().geometry().x, 0.0);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Injected Bounds**: The window manager reads the desktop size through an
//!    accessor; the engine backs it with a shared cell that hosts update through
//!    `resize_desktop`
//! 3. **Single Owner**: Windows are mutated only through their manager

pub mod apps;
pub mod config;
pub mod dock;
pub mod error;
pub mod input;
pub mod invariants;
pub mod math;
pub mod shell;
pub mod window;

mod engine;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{Rect, Size, Vec2, FRAME_STYLE, FrameStyle};
pub use window::{
    ContentNode, DesktopBounds, SubscriptionId, Window, WindowContent, WindowEvent, WindowId,
    WindowManager, WindowOptions, WindowRegion, WindowState,
};
pub use shell::{ContextMenu, DesktopIcon, DesktopShell, GridPos, IconId, IconSize, Key, MenuAction, ShellAction};
pub use dock::{Dock, DockApp, DockItem};
pub use input::{DragState, InputResult, InputRouter, Modifiers};
pub use config::DesktopConfig;
pub use error::{DesktopError, DesktopResult};

pub use engine::{DesktopEngine, MenuOutcome, WELCOME_WINDOW_ID};
