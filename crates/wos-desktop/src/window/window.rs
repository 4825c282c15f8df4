//! Window struct and state

use serde::{Deserialize, Serialize};
use crate::math::{Rect, FRAME_STYLE};
use super::WindowId;

/// Window display state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    #[default]
    Normal,
    Maximized,
    Minimized,
}

/// State a minimized window returns to
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PriorState {
    Normal,
    Maximized { restore: Rect },
}

/// Opaque handle to a content node built by the rendering layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentNode(pub u64);

/// What an application places inside the window's content area
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum WindowContent {
    #[default]
    Empty,
    /// Raw markup, inserted as-is
    Markup(String),
    /// A node the application built itself
    Node(ContentNode),
}

impl From<&str> for WindowContent {
    fn from(markup: &str) -> Self {
        if markup.is_empty() {
            Self::Empty
        } else {
            Self::Markup(markup.to_string())
        }
    }
}

impl From<String> for WindowContent {
    fn from(markup: String) -> Self {
        if markup.is_empty() {
            Self::Empty
        } else {
            Self::Markup(markup)
        }
    }
}

impl From<ContentNode> for WindowContent {
    fn from(node: ContentNode) -> Self {
        Self::Node(node)
    }
}

/// A window on the desktop
///
/// Geometry, stacking and state are only mutated through
/// [`WindowManager`](super::WindowManager) so the cross-window invariants
/// (single active window, distinct z-indices) hold between calls.
#[derive(Clone, Debug)]
pub struct Window {
    pub(crate) id: WindowId,
    /// Title bar text
    pub title: String,
    /// Content supplied at creation
    pub content: WindowContent,
    pub(crate) geometry: Rect,
    pub(crate) z_index: u32,
    pub(crate) state: WindowState,
    pub(crate) restore_geometry: Option<Rect>,
    pub(crate) prior_state: Option<PriorState>,
    pub(crate) is_active: bool,
}

impl Window {
    /// Unique identifier
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current geometry in desktop pixels
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Stacking order (higher = on top)
    #[inline]
    pub fn z_index(&self) -> u32 {
        self.z_index
    }

    /// Current display state
    #[inline]
    pub fn state(&self) -> WindowState {
        self.state
    }

    /// Geometry to return to when leaving the maximized state
    #[inline]
    pub fn restore_geometry(&self) -> Option<Rect> {
        self.restore_geometry
    }

    /// Whether this is the focused window
    #[inline]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Whether the window is drawn at all
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.state != WindowState::Minimized
    }

    /// Get the title bar rectangle
    pub fn title_bar_rect(&self) -> Rect {
        Rect::new(
            self.geometry.x,
            self.geometry.y,
            self.geometry.width,
            FRAME_STYLE.title_bar_height,
        )
    }

    /// Get the content container rectangle (below the title bar)
    pub fn content_rect(&self) -> Rect {
        Rect::new(
            self.geometry.x,
            self.geometry.y + FRAME_STYLE.title_bar_height,
            self.geometry.width,
            (self.geometry.height - FRAME_STYLE.title_bar_height).max(0.0),
        )
    }

    /// Get the close button rectangle (rightmost control)
    pub fn close_button_rect(&self) -> Rect {
        self.control_rect(0)
    }

    /// Get the maximize button rectangle
    pub fn maximize_button_rect(&self) -> Rect {
        self.control_rect(1)
    }

    /// Get the minimize button rectangle (leftmost control)
    pub fn minimize_button_rect(&self) -> Rect {
        self.control_rect(2)
    }

    /// Title bar control `slot`, counted from the right edge
    fn control_rect(&self, slot: u8) -> Rect {
        let slot = f32::from(slot);
        let x = self.geometry.right()
            - FRAME_STYLE.button_margin
            - FRAME_STYLE.button_size * (slot + 1.0)
            - FRAME_STYLE.button_spacing * slot;
        let y = self.geometry.y + (FRAME_STYLE.title_bar_height - FRAME_STYLE.button_size) / 2.0;
        Rect::new(x, y, FRAME_STYLE.button_size, FRAME_STYLE.button_size)
    }

    /// CSS classes the renderer applies, derived from state
    pub fn css_classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["window"];
        if self.is_active {
            classes.push("active");
        }
        match self.state {
            WindowState::Normal => {}
            WindowState::Maximized => classes.push("maximized"),
            WindowState::Minimized => classes.push("minimized"),
        }
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_window() -> Window {
        Window {
            id: "w1".to_string(),
            title: "Test".to_string(),
            content: WindowContent::Empty,
            geometry: Rect::new(100.0, 100.0, 400.0, 300.0),
            z_index: 1001,
            state: WindowState::Normal,
            restore_geometry: None,
            prior_state: None,
            is_active: true,
        }
    }

    #[test]
    fn test_content_rect_below_title_bar() {
        let w = create_test_window();
        let r = w.content_rect();
        assert!((r.y - (100.0 + FRAME_STYLE.title_bar_height)).abs() < 0.001);
        assert!((r.height - (300.0 - FRAME_STYLE.title_bar_height)).abs() < 0.001);
    }

    #[test]
    fn test_controls_ordered_right_to_left() {
        let w = create_test_window();
        let close = w.close_button_rect();
        let maximize = w.maximize_button_rect();
        let minimize = w.minimize_button_rect();

        assert!(close.x > maximize.x);
        assert!(maximize.x > minimize.x);
        assert!((close.right() - (500.0 - FRAME_STYLE.button_margin)).abs() < 0.001);
        assert!(w.title_bar_rect().contains(minimize.position()));
    }

    #[test]
    fn test_css_classes_follow_state() {
        let mut w = create_test_window();
        assert_eq!(w.css_classes(), vec!["window", "active"]);

        w.is_active = false;
        w.state = WindowState::Minimized;
        assert_eq!(w.css_classes(), vec!["window", "minimized"]);
    }

    #[test]
    fn test_content_from_markup() {
        assert_eq!(WindowContent::from(""), WindowContent::Empty);
        assert_eq!(
            WindowContent::from("<p>hi</p>"),
            WindowContent::Markup("<p>hi</p>".to_string())
        );
    }
}
