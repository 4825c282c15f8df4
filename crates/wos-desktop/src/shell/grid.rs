//! Icon grid occupancy and snapping

use serde::{Deserialize, Serialize};
use crate::math::{Rect, Size, Vec2};
use super::IconId;

/// Icon cell size preset
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconSize {
    Small,
    #[default]
    Large,
}

impl IconSize {
    /// Grid cell dimensions for this preset
    pub const fn cell(self) -> Size {
        match self {
            IconSize::Small => Size::new(80.0, 80.0),
            IconSize::Large => Size::new(100.0, 100.0),
        }
    }
}

/// Row/column address of a grid cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

impl GridPos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Fixed-size occupancy map laid over the desktop
#[derive(Clone, Debug)]
pub struct IconGrid {
    cell: Size,
    rows: usize,
    columns: usize,
    /// Row-major occupancy
    cells: Vec<Option<IconId>>,
}

impl IconGrid {
    /// Create an empty grid covering `bounds`
    ///
    /// A desktop smaller than one cell still gets a 1x1 grid.
    pub fn new(bounds: Size, cell: Size) -> Self {
        let columns = fit(bounds.width, cell.width);
        let rows = fit(bounds.height, cell.height);
        Self {
            cell,
            rows,
            columns,
            cells: vec![None; rows * columns],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn cell_size(&self) -> Size {
        self.cell
    }

    /// Icon occupying a cell
    pub fn get(&self, pos: GridPos) -> Option<&str> {
        self.index(pos)
            .and_then(|i| self.cells.get(i))
            .and_then(|slot| slot.as_deref())
    }

    /// Whether a cell exists and is empty
    pub fn is_free(&self, pos: GridPos) -> bool {
        matches!(self.index(pos).and_then(|i| self.cells.get(i)), Some(None))
    }

    /// Occupy a cell; returns false if it is taken or out of range
    pub fn place(&mut self, pos: GridPos, id: &str) -> bool {
        let Some(slot) = self.index(pos).and_then(|i| self.cells.get_mut(i)) else {
            return false;
        };
        if slot.is_some() {
            return false;
        }
        *slot = Some(id.to_string());
        true
    }

    /// Empty a cell
    pub fn clear(&mut self, pos: GridPos) {
        if let Some(slot) = self.index(pos).and_then(|i| self.cells.get_mut(i)) {
            *slot = None;
        }
    }

    /// Top-left pixel of a cell
    pub fn cell_origin(&self, pos: GridPos) -> Vec2 {
        Vec2::new(
            pos.col as f32 * self.cell.width,
            pos.row as f32 * self.cell.height,
        )
    }

    /// Pixel rectangle of a cell
    pub fn cell_rect(&self, pos: GridPos) -> Rect {
        Rect::from_pos_size(self.cell_origin(pos), self.cell)
    }

    /// Cell containing a point, clamped into the grid
    pub fn cell_at(&self, point: Vec2) -> GridPos {
        GridPos::new(
            clamp_index(point.y / self.cell.height, self.rows),
            clamp_index(point.x / self.cell.width, self.columns),
        )
    }

    /// Cell nearest to a dragged icon's top-left corner, clamped into the grid
    pub fn snap(&self, point: Vec2) -> GridPos {
        GridPos::new(
            clamp_index((point.y / self.cell.height).round(), self.rows),
            clamp_index((point.x / self.cell.width).round(), self.columns),
        )
    }

    /// First free cell, filling columns top to bottom, left to right
    pub fn first_free(&self) -> Option<GridPos> {
        (0..self.columns)
            .flat_map(|col| (0..self.rows).map(move |row| GridPos::new(row, col)))
            .find(|pos| self.is_free(*pos))
    }

    fn index(&self, pos: GridPos) -> Option<usize> {
        (pos.row < self.rows && pos.col < self.columns).then(|| pos.row * self.columns + pos.col)
    }
}

/// Number of whole cells along an axis, at least one
fn fit(extent: f32, cell: f32) -> usize {
    if cell <= 0.0 || !extent.is_finite() {
        return 1;
    }
    ((extent / cell).floor() as usize).max(1)
}

/// Truncate a fractional cell coordinate into `0..len`
fn clamp_index(value: f32, len: usize) -> usize {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    (value as usize).min(len.saturating_sub(1))
}
