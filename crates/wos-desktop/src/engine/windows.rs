//! App launching, window operations and context menu actions

use serde::Serialize;
use tracing::{debug, info, warn};
use crate::apps::find_app;
use crate::error::{DesktopError, DesktopResult};
use crate::math::Vec2;
use crate::shell::{IconId, IconSize, MenuAction};
use crate::window::{WindowId, WindowOptions};
use super::DesktopEngine;

/// What running a context menu entry produced
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "ids", rename_all = "camelCase")]
pub enum MenuOutcome {
    /// Nothing further for the host to do
    Done,
    /// Windows opened by the action
    Launched(Vec<WindowId>),
    /// Host should prompt for a new label and call `rename_icon`
    RenameRequested(IconId),
    /// Icons removed from the desktop
    Deleted(Vec<IconId>),
}

impl DesktopEngine {
    /// Launch an application in a new window with id `"{app_id}-{now_ms}"`
    pub fn launch_app(&mut self, app_id: &str, now_ms: f64) -> DesktopResult<WindowId> {
        self.launch_app_with_id(app_id, format!("{}-{}", app_id, now_ms as u64))
    }

    /// Launch an application in a window with a caller-chosen id
    ///
    /// The window is attached to the app's dock entry, which is marked running.
    pub fn launch_app_with_id(
        &mut self,
        app_id: &str,
        window_id: impl Into<WindowId>,
    ) -> DesktopResult<WindowId> {
        let app = find_app(app_id).ok_or_else(|| DesktopError::UnknownApp(app_id.to_string()))?;
        let Some(spec) = app.window else {
            info!(app_id, "app not available yet");
            return Err(DesktopError::AppUnavailable(app.label.to_string()));
        };

        let window_id = window_id.into();
        let options = WindowOptions::sized(spec.size.width, spec.size.height);
        self.windows
            .create_window(window_id.clone(), spec.title, spec.content, Some(options))?;
        self.dock.attach_window(app.id, window_id.clone());
        self.process_events();

        info!(app_id, window_id = %window_id, "app launched");
        Ok(window_id)
    }

    /// Handle a dock launcher click
    pub fn click_dock(&mut self, app_id: &str, now_ms: f64) -> DesktopResult<WindowId> {
        let app_id = self
            .dock
            .click(app_id)
            .map(|app| app.id.clone())
            .ok_or_else(|| DesktopError::UnknownApp(app_id.to_string()))?;
        self.launch_app(&app_id, now_ms)
    }

    /// Bring back an app's most recent window, un-minimizing it if needed
    ///
    /// Returns `None` when the app has no open window.
    pub fn restore_from_dock(&mut self, app_id: &str) -> Option<WindowId> {
        let window_id = self.dock.app(app_id)?.windows().last()?.clone();
        if !self.windows.contains(&window_id) {
            return None;
        }
        self.windows.focus(&window_id);
        self.process_events();
        Some(window_id)
    }

    /// Close a window and update the dock
    pub fn close_window(&mut self, id: &str) {
        if self.input.drag_state().and_then(|d| d.window_id()) == Some(id) {
            self.input.cancel();
        }
        self.windows.close(id);
        self.process_events();
    }

    /// Focus a window (brings to top)
    pub fn focus_window(&mut self, id: &str) {
        self.windows.focus(id);
        self.process_events();
    }

    /// Minimize or restore a window
    pub fn minimize_window(&mut self, id: &str) {
        self.windows.toggle_minimize(id);
        self.process_events();
    }

    /// Maximize or restore a window
    pub fn maximize_window(&mut self, id: &str) {
        self.windows.toggle_maximize(id);
        self.process_events();
    }

    /// Move window
    #[inline]
    pub fn move_window(&mut self, id: &str, x: f32, y: f32) {
        self.windows.move_to(id, x, y);
    }

    /// Resize window
    #[inline]
    pub fn resize_window(&mut self, id: &str, width: f32, height: f32) {
        self.windows.resize(id, width, height);
    }

    // =========================================================================
    // Context menus
    // =========================================================================

    /// Open the context menu matching what is under the pointer
    ///
    /// Returns false over a window, where the app gets the event.
    pub fn open_context_menu(&mut self, x: f32, y: f32) -> bool {
        let point = Vec2::new(x, y);
        if self.windows.region_at(point).is_some() {
            return false;
        }
        match self.shell.icon_at(point).map(|icon| icon.id.clone()) {
            Some(id) => self.shell.open_icon_menu(&id, point),
            None => self.shell.open_desktop_menu(point),
        }
        true
    }

    /// Run a menu entry and close the menu
    ///
    /// Actions that are not offered by the open menu are ignored.
    pub fn run_menu_action(&mut self, action: MenuAction, now_ms: f64) -> DesktopResult<MenuOutcome> {
        let Some(menu) = self.shell.close_menu() else {
            debug!(?action, "menu action ignored: no menu open");
            return Ok(MenuOutcome::Done);
        };
        if !menu.offers(action) {
            warn!(?action, "menu action not offered by open menu");
            return Ok(MenuOutcome::Done);
        }

        match action {
            MenuAction::Open => {
                let mut launched = Vec::new();
                for icon_id in self.shell.selection() {
                    let Some(app_id) = self.shell.icon(&icon_id).map(|icon| icon.app_id.clone()) else {
                        continue;
                    };
                    // Distinct ids when several icons open in the same millisecond
                    let stamp = now_ms + launched.len() as f64;
                    launched.push(self.launch_app(&app_id, stamp)?);
                }
                Ok(MenuOutcome::Launched(launched))
            }
            MenuAction::Rename => Ok(self
                .shell
                .selection()
                .into_iter()
                .next()
                .map_or(MenuOutcome::Done, MenuOutcome::RenameRequested)),
            MenuAction::Delete => {
                let deleted: Vec<IconId> = self
                    .shell
                    .selection()
                    .into_iter()
                    .filter(|id| self.shell.remove_icon(id).is_some())
                    .collect();
                info!(count = deleted.len(), "icons deleted");
                Ok(MenuOutcome::Deleted(deleted))
            }
            MenuAction::NewNotepad => Ok(MenuOutcome::Launched(vec![self.launch_app("notepad", now_ms)?])),
            MenuAction::Refresh => {
                let size = self.desktop_size();
                let overflow = self.shell.relayout(size);
                Ok(MenuOutcome::Deleted(overflow.into_iter().map(|icon| icon.id).collect()))
            }
            MenuAction::SmallIcons | MenuAction::LargeIcons => {
                let icon_size = if action == MenuAction::SmallIcons {
                    IconSize::Small
                } else {
                    IconSize::Large
                };
                let size = self.desktop_size();
                self.config.icon_size = icon_size;
                let overflow = self.shell.set_icon_size(icon_size, size);
                Ok(MenuOutcome::Deleted(overflow.into_iter().map(|icon| icon.id).collect()))
            }
        }
    }
}
