//! WASM exports for the desktop
//!
//! This module provides wasm-bindgen exports for the DesktopEngine,
//! letting the page drive the desktop from DOM events.

use wasm_bindgen::prelude::*;

use crate::config::DesktopConfig;
use crate::engine::DesktopEngine;
use crate::input::Modifiers;
use crate::math::Size;
use crate::shell::{Key, MenuAction};
use crate::window::WindowState;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    fn date_now() -> f64;
}

/// Size of the desktop element's bounding box
fn element_size(element: &web_sys::Element) -> Size {
    let rect = element.get_bounding_client_rect();
    Size::new(rect.width() as f32, rect.height() as f32)
}

/// Wrap a message in a JS `Error` so callers get a stack trace
fn js_error(message: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&message.to_string()).into()
}

fn to_json<T: serde::Serialize>(value: &T, fallback: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| fallback.to_string())
}

fn window_state_to_str(state: WindowState) -> &'static str {
    match state {
        WindowState::Normal => "normal",
        WindowState::Maximized => "maximized",
        WindowState::Minimized => "minimized",
    }
}

fn menu_action_from_str(action: &str) -> Option<MenuAction> {
    Some(match action {
        "open" => MenuAction::Open,
        "rename" => MenuAction::Rename,
        "delete" => MenuAction::Delete,
        "newNotepad" => MenuAction::NewNotepad,
        "refresh" => MenuAction::Refresh,
        "smallIcons" => MenuAction::SmallIcons,
        "largeIcons" => MenuAction::LargeIcons,
        _ => return None,
    })
}

/// Desktop controller for WASM - wraps DesktopEngine with JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    engine: DesktopEngine,
    element: web_sys::Element,
}

#[wasm_bindgen]
impl DesktopController {
    /// Attach to the desktop element with id `element_id`
    ///
    /// `config_json` may be empty for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(element_id: &str, config_json: &str) -> Result<DesktopController, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| js_error("no document"))?;
        let element = document
            .get_element_by_id(element_id)
            .ok_or_else(|| js_error(format!("element not found: {}", element_id)))?;

        let config = if config_json.trim().is_empty() {
            DesktopConfig::default()
        } else {
            DesktopConfig::from_json(config_json).map_err(js_error)?
        };

        let engine = DesktopEngine::new(config, element_size(&element));
        Ok(Self { engine, element })
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Open the welcome window and place desktop icons
    #[wasm_bindgen]
    pub fn boot(&mut self) -> Result<(), JsValue> {
        self.engine.boot().map_err(js_error)
    }

    /// Re-read the desktop element size
    ///
    /// Called before commands that place windows; the page should also call
    /// it from its `resize` listener.
    #[wasm_bindgen]
    pub fn sync_bounds(&mut self) {
        let size = element_size(&self.element);
        self.engine.resize_desktop(size.width, size.height);
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Launch an application; errors carry a user-facing message
    #[wasm_bindgen]
    pub fn launch_app(&mut self, app_id: &str) -> Result<String, JsValue> {
        self.sync_bounds();
        self.engine
            .launch_app(app_id, date_now())
            .map_err(js_error)
    }

    /// Handle a dock launcher click
    #[wasm_bindgen]
    pub fn click_dock(&mut self, app_id: &str) -> Result<String, JsValue> {
        self.sync_bounds();
        self.engine
            .click_dock(app_id, date_now())
            .map_err(js_error)
    }

    #[wasm_bindgen]
    pub fn close_window(&mut self, id: &str) {
        self.engine.close_window(id);
    }

    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: &str) {
        self.engine.focus_window(id);
    }

    #[wasm_bindgen]
    pub fn minimize_window(&mut self, id: &str) {
        self.engine.minimize_window(id);
    }

    #[wasm_bindgen]
    pub fn maximize_window(&mut self, id: &str) {
        self.sync_bounds();
        self.engine.maximize_window(id);
    }

    /// Get all windows back to front as JSON
    #[wasm_bindgen]
    pub fn get_windows_json(&self) -> String {
        let windows: Vec<serde_json::Value> = self
            .engine
            .windows
            .windows_by_z()
            .iter()
            .map(|w| {
                let g = w.geometry();
                serde_json::json!({
                    "id": w.id(),
                    "title": w.title,
                    "content": w.content,
                    "position": { "x": g.x, "y": g.y },
                    "size": { "width": g.width, "height": g.height },
                    "state": window_state_to_str(w.state()),
                    "zIndex": w.z_index(),
                    "focused": w.is_active(),
                    "classes": w.css_classes()
                })
            })
            .collect();
        to_json(&windows, "[]")
    }

    /// Window events since the last call as JSON
    #[wasm_bindgen]
    pub fn take_events_json(&mut self) -> String {
        to_json(&self.engine.take_events(), "[]")
    }

    // =========================================================================
    // Desktop shell and dock
    // =========================================================================

    #[wasm_bindgen]
    pub fn get_icons_json(&self) -> String {
        let icons: Vec<serde_json::Value> = self
            .engine
            .shell
            .icons()
            .iter()
            .map(|icon| {
                serde_json::json!({
                    "icon": icon,
                    "selected": self.engine.shell.is_selected(&icon.id),
                    "focused": self.engine.shell.focused_icon() == Some(icon.id.as_str())
                })
            })
            .collect();
        to_json(&icons, "[]")
    }

    #[wasm_bindgen]
    pub fn get_dock_json(&self) -> String {
        to_json(&self.engine.dock, "{}")
    }

    #[wasm_bindgen]
    pub fn get_menu_json(&self) -> String {
        to_json(&self.engine.shell.menu(), "null")
    }

    /// Run a menu entry by its serialized action name
    #[wasm_bindgen]
    pub fn run_menu_action(&mut self, action: &str) -> Result<String, JsValue> {
        let action = menu_action_from_str(action)
            .ok_or_else(|| js_error(format!("unknown menu action: {}", action)))?;
        self.sync_bounds();
        let outcome = self
            .engine
            .run_menu_action(action, date_now())
            .map_err(js_error)?;
        Ok(to_json(&outcome, r#"{"type":"done"}"#))
    }

    #[wasm_bindgen]
    pub fn rename_icon(&mut self, id: &str, label: &str) -> bool {
        self.engine.shell.rename_icon(id, label)
    }

    // =========================================================================
    // Input Handling
    // =========================================================================

    /// Handle pointer down event
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32, button: u8, ctrl: bool, shift: bool) -> String {
        self.sync_bounds();
        let result = self.engine.handle_pointer_down(x, y, button, Modifiers { ctrl, shift });
        to_json(&result, r#"{"type":"unhandled"}"#)
    }

    /// Handle pointer move event
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> String {
        let result = self.engine.handle_pointer_move(x, y);
        to_json(&result, r#"{"type":"unhandled"}"#)
    }

    /// Handle pointer up event
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> String {
        let result = self.engine.handle_pointer_up();
        to_json(&result, r#"{"type":"unhandled"}"#)
    }

    /// Handle double click event
    #[wasm_bindgen]
    pub fn double_click(&mut self, x: f32, y: f32) -> Result<String, JsValue> {
        self.sync_bounds();
        let result = self
            .engine
            .handle_double_click(x, y, date_now())
            .map_err(js_error)?;
        Ok(to_json(&result, r#"{"type":"unhandled"}"#))
    }

    /// Handle key down event (`KeyboardEvent.key`)
    #[wasm_bindgen]
    pub fn key_down(&mut self, key: &str) -> Result<String, JsValue> {
        let result = self
            .engine
            .handle_key(Key::from_dom(key), date_now())
            .map_err(js_error)?;
        Ok(to_json(&result, r#"{"type":"unhandled"}"#))
    }
}
