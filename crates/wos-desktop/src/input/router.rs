//! Input router state machine

use crate::math::{Rect, Vec2};
use crate::shell::IconId;
use crate::window::{WindowId, WindowRegion};
use super::DragState;

/// Input router managing drag state
#[derive(Debug, Default)]
pub struct InputRouter {
    /// Current drag state
    drag: Option<DragState>,
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self { drag: None }
    }

    /// Get current drag state
    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    pub(crate) fn drag_state_mut(&mut self) -> Option<&mut DragState> {
        self.drag.as_mut()
    }

    /// Check if currently dragging
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Start window move operation
    pub fn start_window_move(&mut self, window_id: WindowId, offset: Vec2) {
        self.drag = Some(DragState::MoveWindow { window_id, offset });
    }

    /// Start window resize operation
    pub fn start_window_resize(
        &mut self,
        window_id: WindowId,
        handle: WindowRegion,
        start_frame: Rect,
        start_pointer: Vec2,
    ) {
        self.drag = Some(DragState::ResizeWindow {
            window_id,
            handle,
            start_frame,
            start_pointer,
        });
    }

    /// Start dragging a desktop icon
    pub fn start_icon_move(&mut self, icon_id: IconId, offset: Vec2) {
        self.drag = Some(DragState::MoveIcon { icon_id, offset, moved: false });
    }

    /// Start a rubber-band selection
    pub fn start_area_select(&mut self, anchor: Vec2, additive: bool) {
        self.drag = Some(DragState::SelectArea { anchor, current: anchor, additive });
    }

    /// End current drag operation, returning it
    pub fn end_drag(&mut self) -> Option<DragState> {
        self.drag.take()
    }

    /// Drop any drag without completing it
    #[inline]
    pub fn cancel(&mut self) {
        self.drag = None;
    }
}
