//! Desktop bounds accessor

use crate::math::Size;

/// Source of the desktop's current size
///
/// The manager queries this on every clamp and maximize instead of caching
/// the size, so a host can back it with a live DOM measurement.
pub trait DesktopBounds {
    /// Current desktop width and height in pixels
    fn size(&self) -> Size;
}

impl DesktopBounds for Size {
    fn size(&self) -> Size {
        *self
    }
}

impl<F> DesktopBounds for F
where
    F: Fn() -> Size,
{
    fn size(&self) -> Size {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_fixed_bounds() {
        let bounds = Size::new(800.0, 600.0);
        assert_eq!(DesktopBounds::size(&bounds), Size::new(800.0, 600.0));
    }

    #[test]
    fn test_closure_bounds_track_changes() {
        let shared = Rc::new(Cell::new(Size::new(800.0, 600.0)));
        let reader = {
            let shared = Rc::clone(&shared);
            move || shared.get()
        };

        assert_eq!(reader.size(), Size::new(800.0, 600.0));
        shared.set(Size::new(1024.0, 768.0));
        assert_eq!(reader.size(), Size::new(1024.0, 768.0));
    }
}
