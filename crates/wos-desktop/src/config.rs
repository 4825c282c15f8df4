//! Desktop configuration

use serde::{Deserialize, Serialize};
use crate::error::{DesktopError, DesktopResult};
use crate::math::{Rect, Size};
use crate::shell::IconSize;

/// Tunables for the window manager, icon grid and boot layout
///
/// Every field has a default, so a partial JSON document is enough.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// z-index counter start; the first window gets `base_z_index + 1`
    pub base_z_index: u32,
    /// Geometry for fields missing from `WindowOptions`
    pub window_defaults: Rect,
    /// Smallest size a resize may produce
    pub min_window_size: Size,
    /// Desktop icon cell size
    pub icon_size: IconSize,
    /// Vertical pitch between icon rows in the boot layout
    pub icon_row_spacing: f32,
    /// Icons per row in the boot layout
    pub icons_per_row: usize,
    /// Open the welcome window on boot
    pub welcome_window: bool,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            base_z_index: 1000,
            window_defaults: Rect::new(50.0, 50.0, 400.0, 300.0),
            min_window_size: Size::new(200.0, 150.0),
            icon_size: IconSize::Large,
            icon_row_spacing: 120.0,
            icons_per_row: 4,
            welcome_window: true,
        }
    }
}

impl DesktopConfig {
    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        let config: DesktopConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> DesktopResult<()> {
        if self.window_defaults.size().is_empty() {
            return Err(DesktopError::InvalidConfig(
                "window_defaults must have a positive size".to_string(),
            ));
        }
        if self.min_window_size.is_empty() {
            return Err(DesktopError::InvalidConfig(
                "min_window_size must be positive".to_string(),
            ));
        }
        if self.base_z_index > u32::MAX / 2 {
            return Err(DesktopError::InvalidConfig(format!(
                "base_z_index {} leaves no room for stacking",
                self.base_z_index
            )));
        }
        if self.icons_per_row == 0 {
            return Err(DesktopError::InvalidConfig(
                "icons_per_row must be at least 1".to_string(),
            ));
        }
        if self.icon_row_spacing <= 0.0 {
            return Err(DesktopError::InvalidConfig(
                "icon_row_spacing must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = DesktopConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.base_z_index, 1000);
        assert_eq!(config.window_defaults, Rect::new(50.0, 50.0, 400.0, 300.0));
    }

    #[test]
    fn test_partial_json() {
        let config = DesktopConfig::from_json(r#"{"base_z_index": 10, "icon_size": "small"}"#).unwrap();
        assert_eq!(config.base_z_index, 10);
        assert_eq!(config.icon_size, IconSize::Small);
        assert_eq!(config.icons_per_row, 4);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = DesktopConfig::from_json(r#"{"icons_per_row": 0}"#).unwrap_err();
        assert!(matches!(err, DesktopError::InvalidConfig(_)));

        let err = DesktopConfig::from_json(
            r#"{"min_window_size": {"width": 0, "height": 100}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("min_window_size"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = DesktopConfig::from_json("[1, 2").unwrap_err();
        assert!(matches!(err, DesktopError::InvalidConfig(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let config = DesktopConfig {
            welcome_window: false,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(DesktopConfig::from_json(&json).unwrap(), config);
    }
}
