//! Desktop shell state: icons, selection, keyboard focus and menus

use std::collections::BTreeSet;
use tracing::{debug, warn};
use crate::error::{DesktopError, DesktopResult};
use crate::math::{Rect, Size, Vec2};
use super::{ContextMenu, DesktopIcon, GridPos, IconGrid, IconId, IconSize};

/// Keys the desktop reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
    Escape,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            "Escape" => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// Outcome of shell input the engine has to act on
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellAction {
    /// Nothing for the shell to do
    Ignored,
    /// Consumed; the host should suppress default handling
    Handled,
    /// Launch the application behind this icon
    Launch(IconId),
}

/// Desktop surface behind the windows
#[derive(Debug)]
pub struct DesktopShell {
    /// Icons in insertion order
    icons: Vec<DesktopIcon>,
    grid: IconGrid,
    icon_size: IconSize,
    selected: BTreeSet<IconId>,
    focused: Option<IconId>,
    menu: Option<ContextMenu>,
}

impl DesktopShell {
    pub fn new(bounds: Size, icon_size: IconSize) -> Self {
        Self {
            icons: Vec::new(),
            grid: IconGrid::new(bounds, icon_size.cell()),
            icon_size,
            selected: BTreeSet::new(),
            focused: None,
            menu: None,
        }
    }

    // =========================================================================
    // Icons
    // =========================================================================

    /// Place a new icon, preferring the cell under `preferred`
    ///
    /// Falls back to the first free cell in column-major order.
    pub fn add_icon(
        &mut self,
        id: impl Into<IconId>,
        label: impl Into<String>,
        image: impl Into<String>,
        app_id: impl Into<String>,
        preferred: Option<Vec2>,
    ) -> DesktopResult<GridPos> {
        let id = id.into();
        if self.icon(&id).is_some() {
            warn!(icon_id = %id, "rejecting duplicate icon id");
            return Err(DesktopError::DuplicateIcon(id));
        }

        let cell = preferred
            .map(|p| self.grid.cell_at(p))
            .filter(|cell| self.grid.is_free(*cell))
            .or_else(|| self.grid.first_free())
            .ok_or(DesktopError::GridFull)?;

        self.grid.place(cell, &id);
        debug!(icon_id = %id, row = cell.row, col = cell.col, "icon placed");
        self.icons.push(DesktopIcon {
            id,
            label: label.into(),
            image: image.into(),
            app_id: app_id.into(),
            cell,
            position: self.grid.cell_origin(cell),
            preview: None,
        });
        Ok(cell)
    }

    /// Remove an icon and forget its selection and focus
    pub fn remove_icon(&mut self, id: &str) -> Option<DesktopIcon> {
        let index = self.icons.iter().position(|icon| icon.id == id)?;
        let icon = self.icons.remove(index);
        self.grid.clear(icon.cell);
        self.selected.remove(id);
        if self.focused.as_deref() == Some(id) {
            self.focused = None;
        }
        Some(icon)
    }

    /// Change an icon's caption; blank labels are refused
    pub fn rename_icon(&mut self, id: &str, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() {
            return false;
        }
        match self.icon_mut(id) {
            Some(icon) => {
                icon.label = label.to_string();
                true
            }
            None => false,
        }
    }

    pub fn icon(&self, id: &str) -> Option<&DesktopIcon> {
        self.icons.iter().find(|icon| icon.id == id)
    }

    fn icon_mut(&mut self, id: &str) -> Option<&mut DesktopIcon> {
        self.icons.iter_mut().find(|icon| icon.id == id)
    }

    /// Icons in insertion order
    pub fn icons(&self) -> &[DesktopIcon] {
        &self.icons
    }

    /// Icon whose rendered cell contains `point`
    pub fn icon_at(&self, point: Vec2) -> Option<&DesktopIcon> {
        let cell = self.grid.cell_size();
        self.icons
            .iter()
            .rev()
            .find(|icon| Rect::from_pos_size(icon.position, cell).contains(point))
    }

    pub fn grid(&self) -> &IconGrid {
        &self.grid
    }

    pub fn icon_size(&self) -> IconSize {
        self.icon_size
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Click on an icon: replace the selection unless `additive`, then toggle
    pub fn click_icon(&mut self, id: &str, additive: bool) {
        if self.icon(id).is_none() {
            return;
        }
        if !additive {
            let keep = self.selected.contains(id) && self.selected.len() == 1;
            self.selected.clear();
            if keep {
                self.selected.insert(id.to_string());
            }
        }
        if additive || !self.selected.contains(id) {
            self.toggle_selection(id);
        }
        self.focused = Some(id.to_string());
    }

    /// Flip one icon's selection state
    pub fn toggle_selection(&mut self, id: &str) {
        if !self.selected.remove(id) && self.icon(id).is_some() {
            self.selected.insert(id.to_string());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Selected icon ids in sorted order
    pub fn selection(&self) -> Vec<IconId> {
        self.selected.iter().cloned().collect()
    }

    /// Rubber-band selection over every icon cell touching `area`
    pub fn select_in_area(&mut self, area: Rect, additive: bool) {
        if !additive {
            self.selected.clear();
        }
        let cell = self.grid.cell_size();
        for icon in &self.icons {
            if Rect::from_pos_size(icon.position, cell).intersects(&area) {
                self.selected.insert(icon.id.clone());
            }
        }
    }

    /// Icon with keyboard focus
    pub fn focused_icon(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn focus_icon(&mut self, id: &str) {
        if self.icon(id).is_some() {
            self.focused = Some(id.to_string());
        }
    }

    // =========================================================================
    // Drag and drop
    // =========================================================================

    /// Show a dragged icon at the cell nearest `top_left`
    pub fn drag_icon_to(&mut self, id: &str, top_left: Vec2) -> Option<GridPos> {
        let cell = self.grid.snap(top_left);
        let origin = self.grid.cell_origin(cell);
        let icon = self.icon_mut(id)?;
        icon.preview = Some(cell);
        icon.position = origin;
        Some(cell)
    }

    /// Commit a drag; an occupied target sends the icon back home
    ///
    /// Returns the cell the icon ends up in.
    pub fn drop_icon(&mut self, id: &str) -> Option<GridPos> {
        let (from, target) = {
            let icon = self.icon(id)?;
            (icon.cell, icon.preview.unwrap_or(icon.cell))
        };

        let to = if target != from && self.grid.is_free(target) {
            self.grid.clear(from);
            self.grid.place(target, id);
            debug!(icon_id = id, row = target.row, col = target.col, "icon moved");
            target
        } else {
            from
        };

        let origin = self.grid.cell_origin(to);
        let icon = self.icon_mut(id)?;
        icon.cell = to;
        icon.position = origin;
        icon.preview = None;
        Some(to)
    }

    // =========================================================================
    // Keyboard
    // =========================================================================

    /// Arrow keys walk the grid, Enter launches, Space toggles selection
    pub fn handle_key(&mut self, key: Key) -> ShellAction {
        match key {
            Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight => {
                self.move_focus(key);
                ShellAction::Handled
            }
            Key::Enter => match &self.focused {
                Some(id) => ShellAction::Launch(id.clone()),
                None => ShellAction::Ignored,
            },
            Key::Space => match self.focused.clone() {
                Some(id) => {
                    self.toggle_selection(&id);
                    ShellAction::Handled
                }
                None => ShellAction::Ignored,
            },
            Key::Escape => {
                if self.menu.take().is_some() {
                    ShellAction::Handled
                } else {
                    ShellAction::Ignored
                }
            }
            Key::Other => ShellAction::Ignored,
        }
    }

    fn move_focus(&mut self, key: Key) {
        let Some(current) = self.focused.as_deref().and_then(|id| self.icon(id)) else {
            // Nothing focused yet: start from the first icon
            self.focused = self.icons.first().map(|icon| icon.id.clone());
            return;
        };

        let GridPos { row, col } = current.cell;
        let last_row = self.grid.rows().saturating_sub(1);
        let last_col = self.grid.columns().saturating_sub(1);
        let next = match key {
            Key::ArrowUp => GridPos::new(row.saturating_sub(1), col),
            Key::ArrowDown => GridPos::new((row + 1).min(last_row), col),
            Key::ArrowLeft => GridPos::new(row, col.saturating_sub(1)),
            Key::ArrowRight => GridPos::new(row, (col + 1).min(last_col)),
            _ => return,
        };

        if let Some(id) = self.grid.get(next) {
            self.focused = Some(id.to_string());
        }
    }

    // =========================================================================
    // Context menus
    // =========================================================================

    /// Open the icon menu; a right-click outside the selection selects
    /// just that icon first
    pub fn open_icon_menu(&mut self, id: &str, position: Vec2) {
        if self.icon(id).is_none() {
            return;
        }
        if !self.selected.contains(id) {
            self.selected.clear();
            self.selected.insert(id.to_string());
        }
        self.menu = Some(ContextMenu::for_icons(position));
    }

    pub fn open_desktop_menu(&mut self, position: Vec2) {
        self.menu = Some(ContextMenu::for_desktop(position));
    }

    pub fn close_menu(&mut self) -> Option<ContextMenu> {
        self.menu.take()
    }

    pub fn menu(&self) -> Option<&ContextMenu> {
        self.menu.as_ref()
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Rebuild the grid for new bounds and re-place every icon
    ///
    /// Icons keep their cell when it still exists and is free, otherwise
    /// they take the first free one. Icons that no longer fit are removed
    /// and returned.
    pub fn relayout(&mut self, bounds: Size) -> Vec<DesktopIcon> {
        self.grid = IconGrid::new(bounds, self.icon_size.cell());

        let mut overflow = Vec::new();
        let mut pending = Vec::new();
        for mut icon in std::mem::take(&mut self.icons) {
            icon.preview = None;
            if self.grid.place(icon.cell, &icon.id) {
                icon.position = self.grid.cell_origin(icon.cell);
                self.icons.push(icon);
            } else {
                pending.push(icon);
            }
        }
        for mut icon in pending {
            match self.grid.first_free() {
                Some(cell) => {
                    self.grid.place(cell, &icon.id);
                    icon.cell = cell;
                    icon.position = self.grid.cell_origin(cell);
                    self.icons.push(icon);
                }
                None => overflow.push(icon),
            }
        }

        for icon in &overflow {
            warn!(icon_id = %icon.id, "icon does not fit on the desktop");
            self.selected.remove(&icon.id);
            if self.focused.as_deref() == Some(icon.id.as_str()) {
                self.focused = None;
            }
        }
        overflow
    }

    /// Switch cell size and lay the icons out again
    pub fn set_icon_size(&mut self, size: IconSize, bounds: Size) -> Vec<DesktopIcon> {
        self.icon_size = size;
        self.relayout(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: Size = Size::new(800.0, 600.0);

    fn shell_with(ids: &[&str]) -> DesktopShell {
        let mut shell = DesktopShell::new(DESKTOP, IconSize::Large);
        for id in ids {
            shell.add_icon(*id, *id, "", *id, None).unwrap();
        }
        shell
    }

    #[test]
    fn test_add_icon_prefers_requested_cell() {
        let mut shell = shell_with(&[]);
        let cell = shell
            .add_icon("notepad", "Notepad", "n.svg", "notepad", Some(Vec2::new(120.0, 20.0)))
            .unwrap();

        assert_eq!(cell, GridPos::new(0, 1));
        assert_eq!(shell.icon("notepad").unwrap().position, Vec2::new(100.0, 0.0));
    }

    #[test]
    fn test_add_icon_falls_back_column_major() {
        let mut shell = shell_with(&[]);
        shell.add_icon("a", "A", "", "a", Some(Vec2::new(10.0, 10.0))).unwrap();
        let cell = shell.add_icon("b", "B", "", "b", Some(Vec2::new(10.0, 10.0))).unwrap();
        assert_eq!(cell, GridPos::new(1, 0));
    }

    #[test]
    fn test_add_icon_errors() {
        let mut shell = DesktopShell::new(Size::new(100.0, 100.0), IconSize::Large);
        shell.add_icon("a", "A", "", "a", None).unwrap();

        assert_eq!(
            shell.add_icon("a", "A", "", "a", None),
            Err(DesktopError::DuplicateIcon("a".to_string()))
        );
        assert_eq!(shell.add_icon("b", "B", "", "b", None), Err(DesktopError::GridFull));
    }

    #[test]
    fn test_remove_frees_cell() {
        let mut shell = shell_with(&["a", "b"]);
        shell.click_icon("a", false);

        let removed = shell.remove_icon("a").unwrap();
        assert_eq!(removed.id, "a");
        assert!(shell.grid().is_free(GridPos::new(0, 0)));
        assert!(shell.selection().is_empty());
        assert_eq!(shell.focused_icon(), None);
        assert!(shell.remove_icon("a").is_none());
    }

    #[test]
    fn test_rename_rejects_blank() {
        let mut shell = shell_with(&["a"]);
        assert!(shell.rename_icon("a", "  Notes  "));
        assert_eq!(shell.icon("a").unwrap().label, "Notes");
        assert!(!shell.rename_icon("a", "   "));
        assert!(!shell.rename_icon("missing", "x"));
    }

    #[test]
    fn test_click_replaces_selection() {
        let mut shell = shell_with(&["a", "b"]);
        shell.click_icon("a", false);
        shell.click_icon("b", false);
        assert_eq!(shell.selection(), vec!["b".to_string()]);
        assert_eq!(shell.focused_icon(), Some("b"));
    }

    #[test]
    fn test_additive_click_toggles() {
        let mut shell = shell_with(&["a", "b"]);
        shell.click_icon("a", false);
        shell.click_icon("b", true);
        assert_eq!(shell.selection().len(), 2);

        shell.click_icon("a", true);
        assert_eq!(shell.selection(), vec!["b".to_string()]);
    }

    #[test]
    fn test_plain_click_on_sole_selection_keeps_it() {
        let mut shell = shell_with(&["a"]);
        shell.click_icon("a", false);
        shell.click_icon("a", false);
        assert!(shell.is_selected("a"));
    }

    #[test]
    fn test_select_in_area() {
        // a at (0,0), b at (0,1) going down, c at (0,2)
        let mut shell = shell_with(&["a", "b", "c"]);
        shell.select_in_area(Rect::from_corners(Vec2::new(50.0, 50.0), Vec2::new(60.0, 150.0)), false);
        assert_eq!(shell.selection(), vec!["a".to_string(), "b".to_string()]);

        shell.select_in_area(Rect::new(10.0, 210.0, 5.0, 5.0), true);
        assert_eq!(shell.selection().len(), 3);

        shell.select_in_area(Rect::new(500.0, 500.0, 5.0, 5.0), false);
        assert!(shell.selection().is_empty());
    }

    #[test]
    fn test_icon_at() {
        let shell = shell_with(&["a", "b"]);
        assert_eq!(shell.icon_at(Vec2::new(50.0, 150.0)).map(|i| i.id.as_str()), Some("b"));
        assert!(shell.icon_at(Vec2::new(450.0, 50.0)).is_none());
    }

    #[test]
    fn test_drop_on_free_cell_commits() {
        let mut shell = shell_with(&["a"]);
        assert_eq!(shell.drag_icon_to("a", Vec2::new(290.0, 110.0)), Some(GridPos::new(1, 3)));
        assert_eq!(shell.icon("a").unwrap().position, Vec2::new(300.0, 100.0));

        assert_eq!(shell.drop_icon("a"), Some(GridPos::new(1, 3)));
        assert!(shell.grid().is_free(GridPos::new(0, 0)));
        assert_eq!(shell.grid().get(GridPos::new(1, 3)), Some("a"));
    }

    #[test]
    fn test_drop_on_occupied_cell_returns_home() {
        let mut shell = shell_with(&["a", "b"]);
        shell.drag_icon_to("a", Vec2::new(0.0, 95.0));
        assert_eq!(shell.drop_icon("a"), Some(GridPos::new(0, 0)));

        let a = shell.icon("a").unwrap();
        assert_eq!(a.position, Vec2::ZERO);
        assert_eq!(shell.grid().get(GridPos::new(1, 0)), Some("b"));
    }

    #[test]
    fn test_arrow_keys_follow_icons() {
        let mut shell = shell_with(&["a", "b"]);
        assert_eq!(shell.handle_key(Key::ArrowDown), ShellAction::Handled);
        assert_eq!(shell.focused_icon(), Some("a"));

        shell.handle_key(Key::ArrowDown);
        assert_eq!(shell.focused_icon(), Some("b"));

        // No icon to the right: focus stays
        shell.handle_key(Key::ArrowRight);
        assert_eq!(shell.focused_icon(), Some("b"));

        shell.handle_key(Key::ArrowUp);
        shell.handle_key(Key::ArrowUp);
        assert_eq!(shell.focused_icon(), Some("a"));
    }

    #[test]
    fn test_enter_and_space() {
        let mut shell = shell_with(&["a"]);
        assert_eq!(shell.handle_key(Key::Enter), ShellAction::Ignored);

        shell.focus_icon("a");
        assert_eq!(shell.handle_key(Key::Enter), ShellAction::Launch("a".to_string()));
        shell.handle_key(Key::Space);
        assert!(shell.is_selected("a"));
        shell.handle_key(Key::Space);
        assert!(!shell.is_selected("a"));
    }

    #[test]
    fn test_key_from_dom() {
        assert_eq!(Key::from_dom(" "), Key::Space);
        assert_eq!(Key::from_dom("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_dom("a"), Key::Other);
    }

    #[test]
    fn test_icon_menu_selects_target() {
        let mut shell = shell_with(&["a", "b"]);
        shell.click_icon("a", false);
        shell.open_icon_menu("b", Vec2::new(10.0, 10.0));
        assert_eq!(shell.selection(), vec!["b".to_string()]);
        assert!(shell.menu().is_some());

        assert_eq!(shell.handle_key(Key::Escape), ShellAction::Handled);
        assert!(shell.menu().is_none());
    }

    #[test]
    fn test_relayout_keeps_cells_and_reports_overflow() {
        let mut shell = shell_with(&["a", "b", "c"]);
        shell.drag_icon_to("c", Vec2::new(100.0, 0.0));
        shell.drop_icon("c");

        let overflow = shell.relayout(Size::new(100.0, 200.0));
        // c's column vanished; a and b stay put in the single column
        assert_eq!(overflow.len(), 1);
        assert_eq!(overflow[0].id, "c");
        assert_eq!(shell.icon("b").unwrap().cell, GridPos::new(1, 0));
    }

    #[test]
    fn test_icon_size_change_relays_out() {
        let mut shell = shell_with(&["a", "b"]);
        let overflow = shell.set_icon_size(IconSize::Small, DESKTOP);
        assert!(overflow.is_empty());
        assert_eq!(shell.grid().columns(), 10);
        assert_eq!(shell.icon("b").unwrap().position, Vec2::new(0.0, 80.0));
    }
}
