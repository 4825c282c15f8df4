//! Window region for hit testing

/// Region of a window under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRegion {
    /// Title bar area (starts a move drag)
    TitleBar,
    /// Content area (forwarded to the application)
    Content,
    /// Close button
    CloseButton,
    /// Minimize button
    MinimizeButton,
    /// Maximize / restore button
    MaximizeButton,
    /// North (top) resize edge
    ResizeN,
    /// South (bottom) resize edge
    ResizeS,
    /// East (right) resize edge
    ResizeE,
    /// West (left) resize edge
    ResizeW,
    /// Northeast corner
    ResizeNE,
    /// Northwest corner
    ResizeNW,
    /// Southeast corner
    ResizeSE,
    /// Southwest corner
    ResizeSW,
}

impl WindowRegion {
    /// Check if this is a resize region
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(
            self,
            WindowRegion::ResizeN
                | WindowRegion::ResizeS
                | WindowRegion::ResizeE
                | WindowRegion::ResizeW
                | WindowRegion::ResizeNE
                | WindowRegion::ResizeNW
                | WindowRegion::ResizeSE
                | WindowRegion::ResizeSW
        )
    }

    /// Check if this is one of the title bar buttons
    #[inline]
    pub fn is_control(&self) -> bool {
        matches!(
            self,
            WindowRegion::CloseButton | WindowRegion::MinimizeButton | WindowRegion::MaximizeButton
        )
    }

    /// Whether dragging this handle moves the left edge
    #[inline]
    pub(crate) fn moves_left_edge(&self) -> bool {
        matches!(self, WindowRegion::ResizeW | WindowRegion::ResizeNW | WindowRegion::ResizeSW)
    }

    /// Whether dragging this handle moves the right edge
    #[inline]
    pub(crate) fn moves_right_edge(&self) -> bool {
        matches!(self, WindowRegion::ResizeE | WindowRegion::ResizeNE | WindowRegion::ResizeSE)
    }

    /// Whether dragging this handle moves the top edge
    #[inline]
    pub(crate) fn moves_top_edge(&self) -> bool {
        matches!(self, WindowRegion::ResizeN | WindowRegion::ResizeNE | WindowRegion::ResizeNW)
    }

    /// Whether dragging this handle moves the bottom edge
    #[inline]
    pub(crate) fn moves_bottom_edge(&self) -> bool {
        matches!(self, WindowRegion::ResizeS | WindowRegion::ResizeSE | WindowRegion::ResizeSW)
    }

    /// Get CSS cursor style for this region
    pub fn cursor(&self) -> &'static str {
        match self {
            WindowRegion::TitleBar => "move",
            WindowRegion::Content => "default",
            WindowRegion::CloseButton | WindowRegion::MinimizeButton | WindowRegion::MaximizeButton => "pointer",
            WindowRegion::ResizeN | WindowRegion::ResizeS => "ns-resize",
            WindowRegion::ResizeE | WindowRegion::ResizeW => "ew-resize",
            WindowRegion::ResizeNE | WindowRegion::ResizeSW => "nesw-resize",
            WindowRegion::ResizeNW | WindowRegion::ResizeSE => "nwse-resize",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_moves_two_edges() {
        let nw = WindowRegion::ResizeNW;
        assert!(nw.is_resize());
        assert!(nw.moves_left_edge() && nw.moves_top_edge());
        assert!(!nw.moves_right_edge() && !nw.moves_bottom_edge());
    }

    #[test]
    fn test_controls_are_not_resize() {
        for region in [
            WindowRegion::CloseButton,
            WindowRegion::MinimizeButton,
            WindowRegion::MaximizeButton,
        ] {
            assert!(region.is_control());
            assert!(!region.is_resize());
            assert_eq!(region.cursor(), "pointer");
        }
    }
}
