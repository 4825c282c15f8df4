//! Input routing module
//!
//! Provides the pointer state machine for window moves, edge resizes,
//! icon drags and rubber-band selection.

mod router;
mod drag;
mod result;

pub use router::InputRouter;
pub use drag::DragState;
pub use result::InputResult;

use crate::math::{Rect, Size, Vec2};
use crate::window::WindowRegion;

/// Modifier keys held during a pointer event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { ctrl: false, shift: false };

    /// Ctrl or Shift extends a selection instead of replacing it
    #[inline]
    pub fn additive(&self) -> bool {
        self.ctrl || self.shift
    }
}

/// Pointer button as reported by DOM `MouseEvent.button`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
    Other(u8),
}

impl From<u8> for PointerButton {
    fn from(button: u8) -> Self {
        match button {
            0 => PointerButton::Primary,
            1 => PointerButton::Middle,
            2 => PointerButton::Secondary,
            other => PointerButton::Other(other),
        }
    }
}

/// Calculate the frame after dragging a resize handle by `delta`
///
/// Edges not owned by the handle stay put. When a dimension hits `min`,
/// the edge opposite the handle keeps its place, so dragging the west edge
/// too far right stops the window rather than sliding it.
pub fn calculate_resize(handle: WindowRegion, start: Rect, delta: Vec2, min: Size) -> Rect {
    let mut frame = start;

    if handle.moves_right_edge() {
        frame.width = (start.width + delta.x).max(min.width);
    }
    if handle.moves_left_edge() {
        frame.width = (start.width - delta.x).max(min.width);
        frame.x = start.right() - frame.width;
    }
    if handle.moves_bottom_edge() {
        frame.height = (start.height + delta.y).max(min.height);
    }
    if handle.moves_top_edge() {
        frame.height = (start.height - delta.y).max(min.height);
        frame.y = start.bottom() - frame.height;
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: Rect = Rect::new(100.0, 100.0, 400.0, 300.0);
    const MIN: Size = Size::new(200.0, 150.0);

    #[test]
    fn test_resize_south() {
        let frame = calculate_resize(WindowRegion::ResizeS, START, Vec2::new(30.0, 50.0), MIN);
        assert_eq!(frame, Rect::new(100.0, 100.0, 400.0, 350.0));
    }

    #[test]
    fn test_resize_north() {
        let frame = calculate_resize(WindowRegion::ResizeN, START, Vec2::new(0.0, -50.0), MIN);
        assert_eq!(frame, Rect::new(100.0, 50.0, 400.0, 350.0));
    }

    #[test]
    fn test_resize_west_clamps_against_right_edge() {
        let frame = calculate_resize(WindowRegion::ResizeW, START, Vec2::new(350.0, 0.0), MIN);
        assert_eq!(frame.width, 200.0);
        assert_eq!(frame.right(), START.right());
    }

    #[test]
    fn test_resize_corner_moves_two_edges() {
        let frame = calculate_resize(WindowRegion::ResizeNW, START, Vec2::new(-20.0, -10.0), MIN);
        assert_eq!(frame, Rect::new(80.0, 90.0, 420.0, 310.0));

        let frame = calculate_resize(WindowRegion::ResizeSE, START, Vec2::new(-500.0, -500.0), MIN);
        assert_eq!(frame, Rect::new(100.0, 100.0, 200.0, 150.0));
    }

    #[test]
    fn test_non_resize_region_is_identity() {
        let frame = calculate_resize(WindowRegion::TitleBar, START, Vec2::new(10.0, 10.0), MIN);
        assert_eq!(frame, START);
    }

    #[test]
    fn test_modifiers_and_buttons() {
        assert!(!Modifiers::NONE.additive());
        assert!(Modifiers { ctrl: false, shift: true }.additive());
        assert_eq!(PointerButton::from(2), PointerButton::Secondary);
        assert_eq!(PointerButton::from(4), PointerButton::Other(4));
    }
}
