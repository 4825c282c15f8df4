//! Axis-aligned rectangle type

use serde::{Deserialize, Serialize};
use super::{Size, Vec2};

/// Axis-aligned rectangle, used for window geometry and hit areas
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Create from position and size
    #[inline]
    pub fn from_pos_size(pos: Vec2, size: Size) -> Self {
        Self::new(pos.x, pos.y, size.width, size.height)
    }

    /// Create the rectangle spanned by two arbitrary corners
    ///
    /// Used for rubber-band selection where the pointer may travel
    /// up or left of the anchor.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let origin = a.min(b);
        let extent = (b - a).abs();
        Self::new(origin.x, origin.y, extent.x, extent.y)
    }

    /// Get the center point
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Get position (top-left corner)
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Get size
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if a point is inside the rectangle
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Check if two rectangles intersect
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Same size, moved to `pos`
    #[inline]
    pub fn with_position(&self, pos: Vec2) -> Rect {
        Rect::from_pos_size(pos, self.size())
    }

    /// Move the rectangle (never resize it) so it lies within `bounds`
    /// anchored at the origin.
    ///
    /// When the rectangle is larger than `bounds` on an axis, that axis
    /// is pinned to 0.
    pub fn confine_to(&self, bounds: Size) -> Rect {
        let max_x = bounds.width - self.width;
        let max_y = bounds.height - self.height;
        Rect::new(
            self.x.min(max_x).max(0.0),
            self.y.min(max_y).max(0.0),
            self.width,
            self.height,
        )
    }
}
