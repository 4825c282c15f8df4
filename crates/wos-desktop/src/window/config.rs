//! Window placement options for creation

use serde::{Deserialize, Serialize};
use crate::math::Rect;

/// Placement options for a new window
///
/// Any field left as `None` falls back to the manager's configured
/// defaults (50, 50, 400 x 300 unless overridden).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowOptions {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl WindowOptions {
    /// Options pinning every field
    pub const fn at(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
        }
    }

    /// Options that only set the size
    pub const fn sized(width: f32, height: f32) -> Self {
        Self {
            x: None,
            y: None,
            width: Some(width),
            height: Some(height),
        }
    }

    /// Resolve against defaults into concrete geometry
    pub fn resolve(&self, defaults: Rect) -> Rect {
        Rect::new(
            self.x.unwrap_or(defaults.x),
            self.y.unwrap_or(defaults.y),
            self.width.unwrap_or(defaults.width),
            self.height.unwrap_or(defaults.height),
        )
    }
}
