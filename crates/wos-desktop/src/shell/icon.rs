//! Desktop icon

use serde::Serialize;
use crate::math::Vec2;
use super::{GridPos, IconId};

/// An icon on the desktop grid
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesktopIcon {
    /// Unique identifier
    pub id: IconId,
    /// Caption under the image
    pub label: String,
    /// Image source (URL or data URI)
    pub image: String,
    /// Application launched on double-click
    pub app_id: String,
    /// Committed grid cell
    pub cell: GridPos,
    /// Rendered top-left corner; differs from the committed cell while dragged
    pub position: Vec2,
    /// Cell shown while a drag is in progress
    #[serde(skip)]
    pub(crate) preview: Option<GridPos>,
}
