//! Geometry types for the desktop surface
//!
//! All coordinates are CSS pixels relative to the desktop element's
//! top-left corner.

mod vec2;
mod rect;
mod size;
mod style;

pub use vec2::Vec2;
pub use rect::Rect;
pub use size::Size;
pub use style::{FrameStyle, FRAME_STYLE};
