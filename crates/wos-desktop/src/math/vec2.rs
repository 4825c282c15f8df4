//! 2D vector type for pointer positions and drag offsets

use serde::{Deserialize, Serialize};

/// 2D vector for positions and offsets
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Desktop origin
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a new vector
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise absolute value
    #[inline]
    pub fn abs(self) -> Vec2 {
        Vec2::new(self.x.abs(), self.y.abs())
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_offset_round_trip() {
        let pointer = Vec2::new(130.0, 75.0);
        let origin = Vec2::new(100.0, 50.0);

        let offset = pointer - origin;
        assert_eq!(offset, Vec2::new(30.0, 25.0));
        assert_eq!(origin + offset, pointer);
    }

    #[test]
    fn test_min_and_abs() {
        let a = Vec2::new(10.0, -5.0);
        let b = Vec2::new(-3.0, 8.0);
        assert_eq!(a.min(b), Vec2::new(-3.0, -5.0));
        assert_eq!((b - a).abs(), Vec2::new(13.0, 13.0));
    }
}
