//! Desktop engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `input`: Pointer and keyboard handling, drag operations
//! - `windows`: App launching, window operations and context menus

mod input;
mod windows;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, info, warn};
use crate::apps::{DESKTOP_APPS, WELCOME_MARKUP};
use crate::config::DesktopConfig;
use crate::dock::Dock;
use crate::error::DesktopResult;
use crate::input::InputRouter;
use crate::math::{Size, Vec2};
use crate::shell::DesktopShell;
use crate::window::{WindowEvent, WindowManager, WindowOptions};

pub use windows::MenuOutcome;

/// Id of the window opened by [`DesktopEngine::boot`]
pub const WELCOME_WINDOW_ID: &str = "welcome-window";

/// Desktop engine coordinating all desktop components
///
/// This is the main entry point for desktop operations, managing:
/// - Window manager (window lifecycle, focus, z-order)
/// - Desktop shell (icons, selection, context menus)
/// - Dock (launchers and running apps)
/// - Input router (drag/resize state machine)
pub struct DesktopEngine {
    /// Window manager
    pub windows: WindowManager,
    /// Icons and menus on the desktop surface
    pub shell: DesktopShell,
    /// Launchers and running indicators
    pub dock: Dock,
    /// Input router
    pub input: InputRouter,
    config: DesktopConfig,
    /// Desktop size shared with the window manager
    bounds: Rc<Cell<Size>>,
    /// Events captured from the window manager, not yet applied to the dock
    pending: Rc<RefCell<Vec<WindowEvent>>>,
    /// Events applied to the dock, waiting for the host
    outbox: Vec<WindowEvent>,
    booted: bool,
}

impl DesktopEngine {
    /// Create a new desktop engine for a desktop of `size`
    pub fn new(config: DesktopConfig, size: Size) -> Self {
        let bounds = Rc::new(Cell::new(size));
        let shared = Rc::clone(&bounds);
        let mut windows = WindowManager::with_config(move || shared.get(), &config);

        let pending = Rc::new(RefCell::new(Vec::new()));
        let queue = Rc::clone(&pending);
        windows.subscribe(move |event: &WindowEvent| queue.borrow_mut().push(event.clone()));

        Self {
            windows,
            shell: DesktopShell::new(size, config.icon_size),
            dock: Dock::with_defaults(),
            input: InputRouter::new(),
            config,
            bounds,
            pending,
            outbox: Vec::new(),
            booted: false,
        }
    }

    /// Open the welcome window and place the built-in desktop icons
    ///
    /// Calling it again is a no-op.
    pub fn boot(&mut self) -> DesktopResult<()> {
        if self.booted {
            debug!("boot skipped: already booted");
            return Ok(());
        }

        let size = self.desktop_size();
        if self.config.welcome_window {
            let options = WindowOptions::at(
                (size.width / 2.0 - 200.0).round(),
                (size.height / 2.0 - 150.0).round(),
                400.0,
                300.0,
            );
            self.windows
                .create_window(WELCOME_WINDOW_ID, "Welcome to Web OS", WELCOME_MARKUP, Some(options))?;
        }

        let pitch = self.config.icon_size.cell().width;
        let per_row = self.config.icons_per_row;
        for (i, app) in DESKTOP_APPS.iter().enumerate() {
            let preferred = Vec2::new(
                (i % per_row) as f32 * pitch + 20.0,
                (i / per_row) as f32 * self.config.icon_row_spacing + 20.0,
            );
            self.shell
                .add_icon(app.id, app.label, app.icon, app.id, Some(preferred))?;
        }

        self.booted = true;
        self.process_events();
        info!(width = size.width, height = size.height, "desktop booted");
        Ok(())
    }

    /// Current desktop size
    #[inline]
    pub fn desktop_size(&self) -> Size {
        self.bounds.get()
    }

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    /// The desktop element changed size
    ///
    /// Maximized windows are re-fitted and the icon grid is rebuilt.
    pub fn resize_desktop(&mut self, width: f32, height: f32) {
        let size = Size::new(width.max(0.0), height.max(0.0));
        if size == self.bounds.get() {
            return;
        }
        self.bounds.set(size);
        self.windows.refit_maximized();
        for icon in self.shell.relayout(size) {
            warn!(icon_id = %icon.id, "icon dropped after desktop resize");
        }
        debug!(width = size.width, height = size.height, "desktop resized");
    }

    /// Window events since the last call, for hosts that track windows
    pub fn take_events(&mut self) -> Vec<WindowEvent> {
        self.process_events();
        std::mem::take(&mut self.outbox)
    }

    /// Apply captured window events to the dock
    pub(crate) fn process_events(&mut self) {
        let events: Vec<WindowEvent> = self.pending.borrow_mut().drain(..).collect();
        for event in events {
            self.dock.on_window_event(&event);
            self.outbox.push(event);
        }
    }
}

impl std::fmt::Debug for DesktopEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesktopEngine")
            .field("windows", &self.windows)
            .field("icons", &self.shell.icons().len())
            .field("desktop_size", &self.bounds.get())
            .field("booted", &self.booted)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Rect;
    use crate::shell::GridPos;

    fn engine() -> DesktopEngine {
        DesktopEngine::new(DesktopConfig::default(), Size::new(1024.0, 768.0))
    }

    #[test]
    fn test_boot_opens_welcome_window() {
        let mut engine = engine();
        engine.boot().unwrap();

        let welcome = engine.windows.get(WELCOME_WINDOW_ID).unwrap();
        assert_eq!(welcome.geometry(), Rect::new(312.0, 234.0, 400.0, 300.0));
        assert!(welcome.is_active());
        assert_eq!(welcome.z_index(), 1001);
    }

    #[test]
    fn test_boot_places_icons_in_first_row() {
        let mut engine = engine();
        engine.boot().unwrap();

        let cells: Vec<GridPos> = engine.shell.icons().iter().map(|i| i.cell).collect();
        assert_eq!(
            cells,
            vec![GridPos::new(0, 0), GridPos::new(0, 1), GridPos::new(0, 2), GridPos::new(0, 3)]
        );
    }

    #[test]
    fn test_boot_is_idempotent() {
        let mut engine = engine();
        engine.boot().unwrap();
        engine.boot().unwrap();
        assert_eq!(engine.windows.count(), 1);
        assert_eq!(engine.shell.icons().len(), 4);
    }

    #[test]
    fn test_boot_without_welcome() {
        let config = DesktopConfig { welcome_window: false, ..Default::default() };
        let mut engine = DesktopEngine::new(config, Size::new(800.0, 600.0));
        engine.boot().unwrap();
        assert_eq!(engine.windows.count(), 0);
    }

    #[test]
    fn test_resize_refits_maximized() {
        let mut engine = engine();
        engine.boot().unwrap();
        engine.windows.toggle_maximize(WELCOME_WINDOW_ID);

        engine.resize_desktop(1280.0, 800.0);
        let welcome = engine.windows.get(WELCOME_WINDOW_ID).unwrap();
        assert_eq!(welcome.geometry(), Rect::new(0.0, 0.0, 1280.0, 800.0));
        assert_eq!(engine.shell.grid().columns(), 12);
    }

    #[test]
    fn test_take_events_drains() {
        let mut engine = engine();
        engine.boot().unwrap();

        let events = engine.take_events();
        assert_eq!(events, vec![WindowEvent::Created { id: WELCOME_WINDOW_ID.to_string() }]);
        assert!(engine.take_events().is_empty());
    }
}
