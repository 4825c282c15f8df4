//! Input handling for pointer events, keyboard and drag operations

use tracing::trace;
use crate::error::DesktopResult;
use crate::input::{calculate_resize, DragState, InputResult, Modifiers, PointerButton};
use crate::math::{Rect, Vec2};
use crate::shell::{Key, ShellAction};
use crate::window::{WindowId, WindowRegion, WindowState};
use super::DesktopEngine;

impl DesktopEngine {
    /// Handle pointer down
    pub fn handle_pointer_down(&mut self, x: f32, y: f32, button: u8, modifiers: Modifiers) -> InputResult {
        let pos = Vec2::new(x, y);

        // Any press dismisses an open menu
        let had_menu = self.shell.close_menu().is_some();

        match PointerButton::from(button) {
            PointerButton::Primary => self.handle_primary_down(pos, modifiers),
            PointerButton::Secondary => {
                if self.open_context_menu(x, y) {
                    InputResult::Handled
                } else {
                    self.pointer_on_window(pos)
                }
            }
            _ if had_menu => InputResult::Handled,
            _ => InputResult::Unhandled,
        }
    }

    fn handle_primary_down(&mut self, pos: Vec2, modifiers: Modifiers) -> InputResult {
        if let Some((window_id, region)) = self.windows.region_at(pos) {
            return self.handle_window_press(window_id, region, pos);
        }

        if let Some((icon_id, origin)) = self.shell.icon_at(pos).map(|i| (i.id.clone(), i.position)) {
            self.shell.click_icon(&icon_id, modifiers.additive());
            self.input.start_icon_move(icon_id, pos - origin);
            return InputResult::Handled;
        }

        // Bare desktop
        self.windows.clear_focus();
        if !modifiers.additive() {
            self.shell.clear_selection();
        }
        self.input.start_area_select(pos, modifiers.additive());
        InputResult::Handled
    }

    /// Dispatch a press on a window region
    fn handle_window_press(&mut self, window_id: WindowId, region: WindowRegion, pos: Vec2) -> InputResult {
        match region {
            WindowRegion::CloseButton => {
                self.close_window(&window_id);
                InputResult::Handled
            }
            WindowRegion::MinimizeButton => {
                self.minimize_window(&window_id);
                InputResult::Handled
            }
            WindowRegion::MaximizeButton => {
                self.maximize_window(&window_id);
                InputResult::Handled
            }
            WindowRegion::TitleBar => self.handle_title_bar_press(window_id, pos),
            WindowRegion::Content => {
                self.focus_window(&window_id);
                self.forward_to(&window_id, pos)
            }
            handle => self.handle_resize_press(window_id, handle, pos),
        }
    }

    /// Handle press on title bar - starts window move
    fn handle_title_bar_press(&mut self, window_id: WindowId, pos: Vec2) -> InputResult {
        self.focus_window(&window_id);
        if let Some(window) = self.windows.get(&window_id) {
            if window.state() != WindowState::Maximized {
                let offset = pos - window.geometry().position();
                self.input.start_window_move(window_id, offset);
            }
        }
        InputResult::Handled
    }

    /// Handle press on resize handle
    fn handle_resize_press(&mut self, window_id: WindowId, handle: WindowRegion, pos: Vec2) -> InputResult {
        self.focus_window(&window_id);
        if let Some(window) = self.windows.get(&window_id) {
            let frame = window.geometry();
            self.input.start_window_resize(window_id, handle, frame, pos);
        }
        InputResult::Handled
    }

    /// Focus and forward a press landing inside a window
    fn pointer_on_window(&mut self, pos: Vec2) -> InputResult {
        match self.windows.region_at(pos) {
            Some((window_id, _)) => {
                self.focus_window(&window_id);
                self.forward_to(&window_id, pos)
            }
            None => InputResult::Unhandled,
        }
    }

    fn forward_to(&self, window_id: &str, pos: Vec2) -> InputResult {
        match self.windows.get(window_id) {
            Some(window) => {
                let local = pos - window.content_rect().position();
                InputResult::Forward {
                    window_id: window_id.to_string(),
                    local_x: local.x,
                    local_y: local.y,
                }
            }
            None => InputResult::Unhandled,
        }
    }

    /// Handle pointer move
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        let pos = Vec2::new(x, y);
        let min_size = self.config.min_window_size;

        let Some(drag) = self.input.drag_state_mut() else {
            return InputResult::Unhandled;
        };

        match drag {
            DragState::MoveWindow { window_id, offset } => {
                let target = pos - *offset;
                self.windows.move_to(window_id, target.x, target.y);
            }
            DragState::ResizeWindow { window_id, handle, start_frame, start_pointer } => {
                let frame = calculate_resize(*handle, *start_frame, pos - *start_pointer, min_size);
                self.windows.set_frame(window_id, frame);
            }
            DragState::MoveIcon { icon_id, offset, moved } => {
                *moved = true;
                self.shell.drag_icon_to(icon_id, pos - *offset);
            }
            DragState::SelectArea { anchor, current, additive } => {
                *current = pos;
                self.shell.select_in_area(Rect::from_corners(*anchor, pos), *additive);
            }
        }
        trace!(x, y, "drag update");
        InputResult::Handled
    }

    /// Handle pointer up
    pub fn handle_pointer_up(&mut self) -> InputResult {
        match self.input.end_drag() {
            Some(DragState::MoveIcon { icon_id, moved: true, .. }) => {
                self.shell.drop_icon(&icon_id);
                InputResult::Handled
            }
            Some(_) => InputResult::Handled,
            None => InputResult::Unhandled,
        }
    }

    /// Handle double click: icons launch their app
    ///
    /// Returns the launch error for apps that cannot open yet.
    pub fn handle_double_click(&mut self, x: f32, y: f32, now_ms: f64) -> DesktopResult<InputResult> {
        let pos = Vec2::new(x, y);
        if let Some((window_id, _)) = self.windows.region_at(pos) {
            return Ok(self.forward_to(&window_id, pos));
        }
        let Some(app_id) = self.shell.icon_at(pos).map(|icon| icon.app_id.clone()) else {
            return Ok(InputResult::Unhandled);
        };
        self.launch_app(&app_id, now_ms)?;
        Ok(InputResult::Handled)
    }

    /// Handle a key press
    ///
    /// Escape first cancels a drag or closes the context menu. Other keys
    /// go to the focused window when there is one, otherwise to the
    /// desktop icons.
    pub fn handle_key(&mut self, key: Key, now_ms: f64) -> DesktopResult<InputResult> {
        if key == Key::Escape && self.input.is_dragging() {
            self.input.cancel();
            return Ok(InputResult::Handled);
        }
        if key == Key::Escape && self.shell.menu().is_some() {
            self.shell.close_menu();
            return Ok(InputResult::Handled);
        }
        if let Some(window) = self.windows.focused() {
            return Ok(InputResult::Forward {
                window_id: window.id().to_string(),
                local_x: 0.0,
                local_y: 0.0,
            });
        }

        match self.shell.handle_key(key) {
            ShellAction::Ignored => Ok(InputResult::Unhandled),
            ShellAction::Handled => Ok(InputResult::Handled),
            ShellAction::Launch(icon_id) => {
                if let Some(app_id) = self.shell.icon(&icon_id).map(|icon| icon.app_id.clone()) {
                    self.launch_app(&app_id, now_ms)?;
                }
                Ok(InputResult::Handled)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DesktopConfig;
    use crate::error::DesktopError;
    use crate::math::Size;
    use crate::window::WindowOptions;

    fn engine() -> DesktopEngine {
        let config = DesktopConfig { welcome_window: false, ..Default::default() };
        let mut engine = DesktopEngine::new(config, Size::new(800.0, 600.0));
        engine.boot().unwrap();
        engine
    }

    fn open(engine: &mut DesktopEngine, id: &str, frame: Rect) {
        engine
            .windows
            .create_window(id, id, "", Some(WindowOptions::at(frame.x, frame.y, frame.width, frame.height)))
            .unwrap();
    }

    #[test]
    fn test_title_bar_drag_moves_window() {
        let mut engine = engine();
        open(&mut engine, "w", Rect::new(200.0, 200.0, 300.0, 200.0));

        engine.handle_pointer_down(250.0, 210.0, 0, Modifiers::NONE);
        assert!(engine.input.drag_state().is_some_and(DragState::is_move));

        engine.handle_pointer_move(300.0, 260.0);
        assert_eq!(engine.windows.get("w").unwrap().geometry().position(), Vec2::new(250.0, 250.0));

        // Dragging far past the corner pins the window inside
        engine.handle_pointer_move(-500.0, -500.0);
        assert_eq!(engine.windows.get("w").unwrap().geometry().position(), Vec2::ZERO);

        assert_eq!(engine.handle_pointer_up(), InputResult::Handled);
        assert_eq!(engine.handle_pointer_up(), InputResult::Unhandled);
    }

    #[test]
    fn test_maximized_title_bar_does_not_drag() {
        let mut engine = engine();
        open(&mut engine, "w", Rect::new(200.0, 200.0, 300.0, 200.0));
        engine.maximize_window("w");

        engine.handle_pointer_down(100.0, 10.0, 0, Modifiers::NONE);
        assert!(!engine.input.is_dragging());
    }

    #[test]
    fn test_press_focuses_lower_window() {
        let mut engine = engine();
        open(&mut engine, "a", Rect::new(100.0, 100.0, 300.0, 200.0));
        open(&mut engine, "b", Rect::new(500.0, 100.0, 250.0, 200.0));

        let result = engine.handle_pointer_down(150.0, 200.0, 0, Modifiers::NONE);
        assert!(result.is_forward());
        assert_eq!(engine.windows.focused().map(|w| w.id()), Some("a"));
    }

    #[test]
    fn test_buttons() {
        let mut engine = engine();
        open(&mut engine, "w", Rect::new(100.0, 100.0, 300.0, 200.0));

        let max = engine.windows.get("w").unwrap().maximize_button_rect().center();
        engine.handle_pointer_down(max.x, max.y, 0, Modifiers::NONE);
        assert_eq!(engine.windows.get("w").unwrap().state(), WindowState::Maximized);

        let close = engine.windows.get("w").unwrap().close_button_rect().center();
        engine.handle_pointer_down(close.x, close.y, 0, Modifiers::NONE);
        assert!(!engine.windows.contains("w"));
    }

    #[test]
    fn test_edge_drag_resizes_with_minimum() {
        let mut engine = engine();
        open(&mut engine, "w", Rect::new(100.0, 100.0, 300.0, 200.0));

        // Bottom-right corner
        engine.handle_pointer_down(398.0, 298.0, 0, Modifiers::NONE);
        assert!(engine.input.drag_state().is_some_and(DragState::is_resize));

        engine.handle_pointer_move(448.0, 318.0);
        assert_eq!(engine.windows.get("w").unwrap().geometry(), Rect::new(100.0, 100.0, 350.0, 220.0));

        engine.handle_pointer_move(0.0, 0.0);
        assert_eq!(engine.windows.get("w").unwrap().geometry(), Rect::new(100.0, 100.0, 200.0, 150.0));
    }

    #[test]
    fn test_west_edge_drag_stops_at_desktop_edge() {
        let mut engine = engine();
        open(&mut engine, "w", Rect::new(100.0, 200.0, 400.0, 300.0));

        engine.handle_pointer_down(101.0, 350.0, 0, Modifiers::NONE);
        assert!(engine.input.drag_state().is_some_and(DragState::is_resize));

        engine.handle_pointer_move(-199.0, 350.0);
        let frame = engine.windows.get("w").unwrap().geometry();
        assert_eq!(frame, Rect::new(0.0, 200.0, 500.0, 300.0));
        assert_eq!(frame.right(), 500.0);
    }

    #[test]
    fn test_desktop_press_clears_focus_and_selects_area() {
        let mut engine = engine();
        open(&mut engine, "w", Rect::new(500.0, 300.0, 250.0, 200.0));
        engine.shell.click_icon("notepad", false);

        engine.handle_pointer_down(450.0, 250.0, 0, Modifiers::NONE);
        assert!(engine.windows.focused().is_none());
        assert!(engine.shell.selection().is_empty());

        engine.handle_pointer_move(150.0, 50.0);
        assert_eq!(engine.shell.selection(), vec!["calculator".to_string(), "settings".to_string(), "terminal".to_string()]);
        engine.handle_pointer_up();
    }

    #[test]
    fn test_icon_drag_snaps_on_drop() {
        let mut engine = engine();
        engine.handle_pointer_down(50.0, 50.0, 0, Modifiers::NONE);
        assert!(engine.shell.is_selected("notepad"));

        engine.handle_pointer_move(60.0, 340.0);
        engine.handle_pointer_up();
        assert_eq!(engine.shell.icon("notepad").unwrap().position, Vec2::new(0.0, 300.0));
    }

    #[test]
    fn test_icon_click_without_move_stays() {
        let mut engine = engine();
        engine.handle_pointer_down(150.0, 50.0, 0, Modifiers::NONE);
        engine.handle_pointer_up();
        assert_eq!(engine.shell.icon("calculator").unwrap().position, Vec2::new(100.0, 0.0));
    }

    #[test]
    fn test_secondary_button_opens_menu() {
        let mut engine = engine();
        assert_eq!(engine.handle_pointer_down(600.0, 500.0, 2, Modifiers::NONE), InputResult::Handled);
        assert!(engine.shell.menu().is_some());

        engine.handle_pointer_down(600.0, 500.0, 0, Modifiers::NONE);
        assert!(engine.shell.menu().is_none());
    }

    #[test]
    fn test_double_click_icon() {
        let mut engine = engine();
        assert_eq!(
            engine.handle_double_click(150.0, 50.0, 8.0),
            Err(DesktopError::AppUnavailable("Calculator".to_string()))
        );
        assert_eq!(engine.handle_double_click(700.0, 550.0, 9.0), Ok(InputResult::Unhandled));

        assert_eq!(engine.handle_double_click(50.0, 50.0, 7.0), Ok(InputResult::Handled));
        assert!(engine.windows.contains("notepad-7"));
    }

    #[test]
    fn test_keyboard_launch() {
        let mut engine = engine();
        engine.handle_key(Key::ArrowRight, 0.0).unwrap();
        assert_eq!(engine.shell.focused_icon(), Some("notepad"));

        assert_eq!(engine.handle_key(Key::Enter, 3.0), Ok(InputResult::Handled));
        assert!(engine.windows.contains("notepad-3"));

        // The new window now has focus and receives keys
        assert!(engine.handle_key(Key::ArrowRight, 4.0).unwrap().is_forward());
    }

    #[test]
    fn test_escape_closes_menu_before_window_gets_keys() {
        let mut engine = engine();
        open(&mut engine, "w", Rect::new(500.0, 100.0, 250.0, 200.0));

        assert_eq!(engine.handle_pointer_down(100.0, 500.0, 2, Modifiers::NONE), InputResult::Handled);
        assert!(engine.shell.menu().is_some());
        assert_eq!(engine.windows.focused().map(|w| w.id()), Some("w"));

        assert_eq!(engine.handle_key(Key::Escape, 0.0), Ok(InputResult::Handled));
        assert!(engine.shell.menu().is_none());

        // With the menu gone, Escape reaches the window again
        assert!(engine.handle_key(Key::Escape, 0.0).unwrap().is_forward());
    }
}
