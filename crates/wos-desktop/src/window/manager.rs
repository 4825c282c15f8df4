//! Window manager for lifecycle, focus, z-order and drag constraints

use std::collections::HashMap;
use tracing::{debug, warn};
use crate::config::DesktopConfig;
use crate::error::{DesktopError, DesktopResult};
use crate::math::{Rect, Size, Vec2, FRAME_STYLE};
use super::events::Listeners;
use super::{
    DesktopBounds, PriorState, SubscriptionId, Window, WindowContent, WindowEvent, WindowId,
    WindowOptions, WindowRegion, WindowState,
};

/// Window manager owning every open window on one desktop
///
/// All stacking changes draw from a single counter, so the most recently
/// created or focused window always has the highest z-index and no two
/// windows ever share one.
pub struct WindowManager {
    /// All windows by ID
    windows: HashMap<WindowId, Window>,
    /// First z-index handed out is `base_z + 1`
    base_z: u32,
    /// Last z-index handed out
    z_counter: u32,
    /// Live desktop size
    bounds: Box<dyn DesktopBounds>,
    /// Geometry used for fields missing from `WindowOptions`
    defaults: Rect,
    /// Smallest size a resize may produce
    min_size: Size,
    listeners: Listeners,
}

impl WindowManager {
    /// Create a manager with default configuration
    pub fn new(bounds: impl DesktopBounds + 'static) -> Self {
        Self::with_config(bounds, &DesktopConfig::default())
    }

    /// Create a manager from configuration
    pub fn with_config(bounds: impl DesktopBounds + 'static, config: &DesktopConfig) -> Self {
        Self {
            windows: HashMap::new(),
            base_z: config.base_z_index,
            z_counter: config.base_z_index,
            bounds: Box::new(bounds),
            defaults: config.window_defaults,
            min_size: config.min_window_size,
            listeners: Listeners::default(),
        }
    }

    /// Current desktop size as reported by the bounds accessor
    #[inline]
    pub fn desktop_size(&self) -> Size {
        self.bounds.size()
    }

    /// Open a new window on top of the stack and give it focus
    ///
    /// Fails with [`DesktopError::DuplicateId`] if `id` is already open, in
    /// which case nothing is created and no existing window changes.
    pub fn create_window(
        &mut self,
        id: impl Into<WindowId>,
        title: impl Into<String>,
        content: impl Into<WindowContent>,
        options: Option<WindowOptions>,
    ) -> DesktopResult<&Window> {
        let id = id.into();
        if self.windows.contains_key(&id) {
            warn!(window_id = %id, "rejecting duplicate window id");
            return Err(DesktopError::DuplicateId(id));
        }

        let geometry = options.unwrap_or_default().resolve(self.defaults);
        let z_index = self.next_z_index();
        self.deactivate_all();

        let window = Window {
            id: id.clone(),
            title: title.into(),
            content: content.into(),
            geometry,
            z_index,
            state: WindowState::Normal,
            restore_geometry: None,
            prior_state: None,
            is_active: true,
        };
        self.windows.insert(id.clone(), window);
        debug!(window_id = %id, z_index, "window created");

        self.listeners.emit(&WindowEvent::Created { id: id.clone() });
        Ok(&self.windows[&id])
    }

    /// Close a window and notify subscribers
    pub fn close(&mut self, id: &str) {
        if self.windows.remove(id).is_none() {
            debug!(window_id = id, "close ignored: unknown window");
            return;
        }
        debug!(window_id = id, "window closed");
        self.listeners.emit(&WindowEvent::Closed { id: id.to_string() });
    }

    /// Get a window by ID
    #[inline]
    pub fn get(&self, id: &str) -> Option<&Window> {
        self.windows.get(id)
    }

    /// Check whether a window is open
    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.windows.contains_key(id)
    }

    /// Focus a window (brings to top)
    ///
    /// A minimized window is restored to its prior state first.
    pub fn focus(&mut self, id: &str) {
        let Some(window) = self.windows.get(id) else {
            debug!(window_id = id, "focus ignored: unknown window");
            return;
        };
        if window.state == WindowState::Minimized {
            self.toggle_minimize(id);
        }

        let z_index = self.next_z_index();
        self.deactivate_all();
        if let Some(window) = self.windows.get_mut(id) {
            window.z_index = z_index;
            window.is_active = true;
        }
        self.listeners.emit(&WindowEvent::Focused { id: id.to_string() });
    }

    /// Deactivate every window, as when the bare desktop is clicked
    ///
    /// Stacking order is left untouched.
    pub fn clear_focus(&mut self) {
        self.deactivate_all();
    }

    /// Get the active window, if any
    pub fn focused(&self) -> Option<&Window> {
        self.windows.values().find(|w| w.is_active)
    }

    /// Move a window, keeping it fully inside the desktop
    ///
    /// Ignored while the window is maximized.
    pub fn move_to(&mut self, id: &str, x: f32, y: f32) {
        let bounds = self.bounds.size();
        let Some(window) = self.windows.get_mut(id) else {
            return;
        };
        if window.state == WindowState::Maximized {
            return;
        }
        window.geometry = window
            .geometry
            .with_position(Vec2::new(x, y))
            .confine_to(bounds);
    }

    /// Resize a window in place
    ///
    /// The size is held at or above the minimum window size and at or below
    /// the desktop size, then the frame is moved inside the desktop. Only
    /// windows in the normal state can be resized.
    pub fn resize(&mut self, id: &str, width: f32, height: f32) {
        if let Some(window) = self.windows.get(id) {
            let frame = Rect::new(window.geometry.x, window.geometry.y, width, height);
            self.apply_frame(id, frame);
        }
    }

    /// Set position and size at once (used by edge drags)
    ///
    /// Edges dragged past the desktop are clipped to it, so the edges the
    /// drag did not touch stay where they are. Size limits then apply as
    /// for [`resize`](Self::resize).
    pub fn set_frame(&mut self, id: &str, frame: Rect) {
        let bounds = self.bounds.size();
        let left = frame.x.max(0.0);
        let top = frame.y.max(0.0);
        let right = frame.right().min(bounds.width);
        let bottom = frame.bottom().min(bounds.height);
        self.apply_frame(id, Rect::new(left, top, right - left, bottom - top));
    }

    fn apply_frame(&mut self, id: &str, frame: Rect) {
        let bounds = self.bounds.size();
        let min_size = self.min_size;
        let Some(window) = self.windows.get_mut(id) else {
            return;
        };
        if window.state != WindowState::Normal {
            return;
        }
        let size = frame.size().min(bounds).max(min_size);
        window.geometry = Rect::from_pos_size(frame.position(), size).confine_to(bounds);
    }

    /// Maximize a window, or restore it if already maximized
    ///
    /// Minimized windows are left alone; their title bar is not reachable.
    pub fn toggle_maximize(&mut self, id: &str) {
        let bounds = self.bounds.size();
        let Some(window) = self.windows.get_mut(id) else {
            return;
        };

        match window.state {
            WindowState::Normal => {
                window.restore_geometry = Some(window.geometry);
                window.geometry = Rect::from_pos_size(Vec2::ZERO, bounds);
                window.state = WindowState::Maximized;
            }
            WindowState::Maximized => {
                if let Some(restore) = window.restore_geometry.take() {
                    window.geometry = restore;
                }
                window.state = WindowState::Normal;
            }
            WindowState::Minimized => {
                debug!(window_id = id, "maximize ignored: window is minimized");
                return;
            }
        }

        let state = window.state;
        debug!(window_id = id, ?state, "window state changed");
        self.listeners.emit(&WindowEvent::StateChanged { id: id.to_string(), state });
    }

    /// Minimize a window, or bring a minimized one back
    ///
    /// A minimized window remembers whether it was maximized and returns to
    /// exactly that state and geometry. Minimizing drops focus.
    pub fn toggle_minimize(&mut self, id: &str) {
        let bounds = self.bounds.size();
        let Some(window) = self.windows.get_mut(id) else {
            return;
        };

        match window.state {
            WindowState::Normal => {
                window.prior_state = Some(PriorState::Normal);
                window.state = WindowState::Minimized;
                window.is_active = false;
            }
            WindowState::Maximized => {
                let restore = window.restore_geometry.take().unwrap_or(window.geometry);
                window.prior_state = Some(PriorState::Maximized { restore });
                window.state = WindowState::Minimized;
                window.is_active = false;
            }
            WindowState::Minimized => match window.prior_state.take() {
                Some(PriorState::Maximized { restore }) => {
                    window.restore_geometry = Some(restore);
                    window.geometry = Rect::from_pos_size(Vec2::ZERO, bounds);
                    window.state = WindowState::Maximized;
                }
                Some(PriorState::Normal) | None => {
                    window.state = WindowState::Normal;
                }
            },
        }

        let state = window.state;
        debug!(window_id = id, ?state, "window state changed");
        self.listeners.emit(&WindowEvent::StateChanged { id: id.to_string(), state });
    }

    /// Re-fit maximized windows after the desktop was resized
    pub fn refit_maximized(&mut self) {
        let fill = Rect::from_pos_size(Vec2::ZERO, self.bounds.size());
        for window in self.windows.values_mut() {
            if window.state == WindowState::Maximized {
                window.geometry = fill;
            }
        }
    }

    /// Register a lifecycle listener
    pub fn subscribe(&mut self, listener: impl FnMut(&WindowEvent) + 'static) -> SubscriptionId {
        self.listeners.add(Box::new(listener))
    }

    /// Remove a listener; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id)
    }

    /// Get windows sorted by z-index (back to front)
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.values().collect();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    /// Get all windows in no particular order
    pub fn all_windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.values()
    }

    /// Get the number of open windows
    #[inline]
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    /// Base of the z-index counter
    #[inline]
    pub fn base_z_index(&self) -> u32 {
        self.base_z
    }

    /// Last z-index handed out
    #[inline]
    pub fn z_counter(&self) -> u32 {
        self.z_counter
    }

    /// Find which region of which visible window is at a point (topmost)
    pub fn region_at(&self, pos: Vec2) -> Option<(WindowId, WindowRegion)> {
        let mut windows: Vec<&Window> = self.windows.values().filter(|w| w.is_visible()).collect();
        windows.sort_by_key(|w| std::cmp::Reverse(w.z_index));

        windows
            .into_iter()
            .find(|w| w.geometry.contains(pos))
            .map(|w| (w.id.clone(), hit_test_window(w, pos)))
    }

    fn next_z_index(&mut self) -> u32 {
        if self.z_counter == u32::MAX {
            self.compact_z_order();
        }
        self.z_counter += 1;
        self.z_counter
    }

    /// Renumber z-indices from the base, preserving order
    fn compact_z_order(&mut self) {
        let mut order: Vec<(u32, WindowId)> = self
            .windows
            .values()
            .map(|w| (w.z_index, w.id.clone()))
            .collect();
        order.sort_by_key(|(z, _)| *z);

        self.z_counter = self.base_z;
        for (_, id) in order {
            self.z_counter += 1;
            if let Some(window) = self.windows.get_mut(&id) {
                window.z_index = self.z_counter;
            }
        }
        debug!(z_counter = self.z_counter, "z-order compacted");
    }

    fn deactivate_all(&mut self) {
        for window in self.windows.values_mut() {
            window.is_active = false;
        }
    }

    #[cfg(test)]
    pub(crate) fn set_z_counter(&mut self, value: u32) {
        self.z_counter = value;
    }
}

impl std::fmt::Debug for WindowManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowManager")
            .field("windows", &self.windows.len())
            .field("z_counter", &self.z_counter)
            .field("desktop_size", &self.bounds.size())
            .field("listeners", &self.listeners)
            .finish()
    }
}

// =============================================================================
// Hit testing helper functions
// =============================================================================

/// Hit test a window already known to contain `pos`
fn hit_test_window(window: &Window, pos: Vec2) -> WindowRegion {
    if let Some(region) = hit_test_buttons(window, pos) {
        return region;
    }

    // Maximized windows cannot be resized, so their edges belong to the
    // title bar and content.
    let resizable = window.state == WindowState::Normal;

    if resizable {
        if let Some(region) = hit_test_resize_corners(window, pos) {
            return region;
        }
    }
    if window.title_bar_rect().contains(pos) {
        return WindowRegion::TitleBar;
    }
    if resizable {
        if let Some(region) = hit_test_resize_edges(window, pos) {
            return region;
        }
    }
    WindowRegion::Content
}

/// Hit test window buttons (close, maximize, minimize)
fn hit_test_buttons(window: &Window, pos: Vec2) -> Option<WindowRegion> {
    if window.close_button_rect().contains(pos) {
        return Some(WindowRegion::CloseButton);
    }
    if window.maximize_button_rect().contains(pos) {
        return Some(WindowRegion::MaximizeButton);
    }
    if window.minimize_button_rect().contains(pos) {
        return Some(WindowRegion::MinimizeButton);
    }
    None
}

/// Hit test resize corner handles
fn hit_test_resize_corners(window: &Window, pos: Vec2) -> Option<WindowRegion> {
    let corner = FRAME_STYLE.resize_handle_size * 2.0;
    let rect = window.geometry;

    let left = pos.x < rect.x + corner;
    let right = pos.x >= rect.right() - corner;
    let top = pos.y < rect.y + corner;
    let bottom = pos.y >= rect.bottom() - corner;

    match (top, bottom, left, right) {
        (true, _, true, _) => Some(WindowRegion::ResizeNW),
        (true, _, _, true) => Some(WindowRegion::ResizeNE),
        (_, true, true, _) => Some(WindowRegion::ResizeSW),
        (_, true, _, true) => Some(WindowRegion::ResizeSE),
        _ => None,
    }
}

/// Hit test resize edge handles (non-corner)
fn hit_test_resize_edges(window: &Window, pos: Vec2) -> Option<WindowRegion> {
    let edge = FRAME_STYLE.resize_handle_size;
    let rect = window.geometry;

    if pos.y < rect.y + edge {
        return Some(WindowRegion::ResizeN);
    }
    if pos.y >= rect.bottom() - edge {
        return Some(WindowRegion::ResizeS);
    }
    if pos.x < rect.x + edge {
        return Some(WindowRegion::ResizeW);
    }
    if pos.x >= rect.right() - edge {
        return Some(WindowRegion::ResizeE);
    }
    None
}
