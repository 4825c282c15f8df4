//! Dock (taskbar) model
//!
//! Tracks which launchers are shown, which apps are running and which
//! windows belong to each app. Rendering is left to the host.

use serde::Serialize;
use tracing::debug;
use crate::apps::{AppInfo, BUILTIN_APPS};
use crate::window::{WindowEvent, WindowId};

/// A launcher in the dock
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DockApp {
    pub id: String,
    pub label: String,
    pub icon: String,
    running: bool,
    /// Open windows launched from this entry, oldest first
    windows: Vec<WindowId>,
}

impl DockApp {
    pub fn new(id: impl Into<String>, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
            running: false,
            windows: Vec::new(),
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn windows(&self) -> &[WindowId] {
        &self.windows
    }
}

impl From<&AppInfo> for DockApp {
    fn from(app: &AppInfo) -> Self {
        DockApp::new(app.id, app.label, app.icon)
    }
}

/// One dock slot
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DockItem {
    App(DockApp),
    Separator,
}

/// Ordered set of launchers and separators
#[derive(Clone, Debug, Default, Serialize)]
pub struct Dock {
    items: Vec<DockItem>,
}

impl Dock {
    /// Empty dock
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in apps with a separator before Settings
    pub fn with_defaults() -> Self {
        let mut dock = Self::new();
        for app in &BUILTIN_APPS {
            if app.id == "settings" {
                dock.push_separator();
            }
            dock.push_app(DockApp::from(app));
        }
        dock
    }

    /// Append a launcher; an existing id is replaced in place
    pub fn push_app(&mut self, app: DockApp) {
        match self.app_mut(&app.id) {
            Some(existing) => *existing = app,
            None => self.items.push(DockItem::App(app)),
        }
    }

    pub fn push_separator(&mut self) {
        self.items.push(DockItem::Separator);
    }

    pub fn items(&self) -> &[DockItem] {
        &self.items
    }

    /// Launchers only, in dock order
    pub fn apps(&self) -> impl Iterator<Item = &DockApp> {
        self.items.iter().filter_map(|item| match item {
            DockItem::App(app) => Some(app),
            DockItem::Separator => None,
        })
    }

    pub fn app(&self, id: &str) -> Option<&DockApp> {
        self.apps().find(|app| app.id == id)
    }

    fn app_mut(&mut self, id: &str) -> Option<&mut DockApp> {
        self.items.iter_mut().find_map(|item| match item {
            DockItem::App(app) if app.id == id => Some(app),
            _ => None,
        })
    }

    /// Resolve a click on a launcher
    pub fn click(&self, app_id: &str) -> Option<&DockApp> {
        let app = self.app(app_id);
        if app.is_none() {
            debug!(app_id, "dock click on unknown app");
        }
        app
    }

    /// Set the running indicator; returns false for unknown apps
    pub fn set_running(&mut self, app_id: &str, running: bool) -> bool {
        match self.app_mut(app_id) {
            Some(app) => {
                app.running = running;
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self, app_id: &str) -> bool {
        self.app(app_id).is_some_and(DockApp::is_running)
    }

    /// Record that `window_id` belongs to `app_id` and mark the app running
    pub fn attach_window(&mut self, app_id: &str, window_id: impl Into<WindowId>) -> bool {
        let window_id = window_id.into();
        let Some(app) = self.app_mut(app_id) else {
            return false;
        };
        if !app.windows.contains(&window_id) {
            app.windows.push(window_id);
        }
        app.running = true;
        true
    }

    /// Forget a window; returns the app it belonged to
    ///
    /// The app stops running once its last window is gone.
    pub fn detach_window(&mut self, window_id: &str) -> Option<String> {
        let app = self.items.iter_mut().find_map(|item| match item {
            DockItem::App(app) if app.windows.iter().any(|w| w == window_id) => Some(app),
            _ => None,
        })?;
        app.windows.retain(|w| w != window_id);
        if app.windows.is_empty() {
            app.running = false;
        }
        debug!(window_id, app_id = %app.id, "window detached from dock");
        Some(app.id.clone())
    }

    /// App owning a window
    pub fn app_for_window(&self, window_id: &str) -> Option<&DockApp> {
        self.apps().find(|app| app.windows.iter().any(|w| w == window_id))
    }

    /// Keep the dock in step with window lifecycle events
    pub fn on_window_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::Closed { id } = event {
            self.detach_window(id);
        }
    }
}
