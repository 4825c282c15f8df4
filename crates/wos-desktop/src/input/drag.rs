//! Drag state for input operations

use crate::math::{Rect, Vec2};
use crate::shell::IconId;
use crate::window::{WindowId, WindowRegion};

/// Current drag operation state
#[derive(Clone, Debug, PartialEq)]
pub enum DragState {
    /// Moving a window by its title bar
    MoveWindow {
        /// Window being moved
        window_id: WindowId,
        /// Offset from window origin to cursor
        offset: Vec2,
    },
    /// Resizing a window
    ResizeWindow {
        /// Window being resized
        window_id: WindowId,
        /// Which resize handle
        handle: WindowRegion,
        /// Window frame at start
        start_frame: Rect,
        /// Pointer position at start
        start_pointer: Vec2,
    },
    /// Dragging a desktop icon
    MoveIcon {
        icon_id: IconId,
        /// Offset from icon origin to cursor
        offset: Vec2,
        /// Set once the pointer actually moved
        moved: bool,
    },
    /// Rubber-band selection on the bare desktop
    SelectArea {
        /// Pointer-down position
        anchor: Vec2,
        /// Latest pointer position
        current: Vec2,
        /// Extend rather than replace the selection
        additive: bool,
    },
}

impl DragState {
    /// Check if this is a window move operation
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, DragState::MoveWindow { .. })
    }

    /// Check if this is a window resize operation
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, DragState::ResizeWindow { .. })
    }

    /// Get the window ID if this is a window operation
    pub fn window_id(&self) -> Option<&str> {
        match self {
            DragState::MoveWindow { window_id, .. } | DragState::ResizeWindow { window_id, .. } => {
                Some(window_id)
            }
            _ => None,
        }
    }

    /// Current rubber-band rectangle
    pub fn selection_rect(&self) -> Option<Rect> {
        match self {
            DragState::SelectArea { anchor, current, .. } => Some(Rect::from_corners(*anchor, *current)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_window_state() {
        let state = DragState::MoveWindow {
            window_id: "w1".to_string(),
            offset: Vec2::new(10.0, 20.0),
        };

        assert!(state.is_move());
        assert!(!state.is_resize());
        assert_eq!(state.window_id(), Some("w1"));
        assert!(state.selection_rect().is_none());
    }

    #[test]
    fn test_resize_window_state() {
        let state = DragState::ResizeWindow {
            window_id: "w2".to_string(),
            handle: WindowRegion::ResizeSE,
            start_frame: Rect::new(100.0, 100.0, 800.0, 600.0),
            start_pointer: Vec2::new(900.0, 700.0),
        };

        assert!(state.is_resize());
        assert_eq!(state.window_id(), Some("w2"));
    }

    #[test]
    fn test_icon_drag_has_no_window() {
        let state = DragState::MoveIcon {
            icon_id: "notepad".to_string(),
            offset: Vec2::ZERO,
            moved: false,
        };
        assert!(state.window_id().is_none());
    }

    #[test]
    fn test_selection_rect_normalizes() {
        let state = DragState::SelectArea {
            anchor: Vec2::new(300.0, 300.0),
            current: Vec2::new(100.0, 350.0),
            additive: false,
        };
        assert_eq!(state.selection_rect(), Some(Rect::new(100.0, 300.0, 200.0, 50.0)));
    }
}
