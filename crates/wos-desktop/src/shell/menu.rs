//! Context menu model

use serde::Serialize;
use crate::math::Vec2;

/// Command behind a menu entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MenuAction {
    Open,
    Rename,
    Delete,
    NewNotepad,
    Refresh,
    SmallIcons,
    LargeIcons,
}

/// One row of a context menu
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MenuItem {
    Action {
        label: &'static str,
        glyph: &'static str,
        action: MenuAction,
    },
    Submenu {
        label: &'static str,
        glyph: &'static str,
        items: Vec<MenuItem>,
    },
    Separator,
}

impl MenuItem {
    const fn action(label: &'static str, glyph: &'static str, action: MenuAction) -> Self {
        MenuItem::Action { label, glyph, action }
    }
}

/// What the menu was opened on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MenuTarget {
    /// The current icon selection
    Icons,
    /// The bare desktop
    Desktop,
}

/// An open context menu
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContextMenu {
    pub target: MenuTarget,
    pub position: Vec2,
    pub items: Vec<MenuItem>,
}

impl ContextMenu {
    /// Menu for the selected icons
    pub fn for_icons(position: Vec2) -> Self {
        Self {
            target: MenuTarget::Icons,
            position,
            items: vec![
                MenuItem::action("Open", "▶️", MenuAction::Open),
                MenuItem::action("Rename", "✏️", MenuAction::Rename),
                MenuItem::Separator,
                MenuItem::action("Delete", "🗑️", MenuAction::Delete),
            ],
        }
    }

    /// Menu for the desktop background
    pub fn for_desktop(position: Vec2) -> Self {
        Self {
            target: MenuTarget::Desktop,
            position,
            items: vec![
                MenuItem::action("New Notepad", "📝", MenuAction::NewNotepad),
                MenuItem::action("Refresh", "🔄", MenuAction::Refresh),
                MenuItem::Separator,
                MenuItem::Submenu {
                    label: "View",
                    glyph: "👁️",
                    items: vec![
                        MenuItem::action("Small icons", "", MenuAction::SmallIcons),
                        MenuItem::action("Large icons", "", MenuAction::LargeIcons),
                    ],
                },
            ],
        }
    }

    /// Every action reachable from this menu, submenus included
    pub fn actions(&self) -> Vec<MenuAction> {
        fn walk(items: &[MenuItem], out: &mut Vec<MenuAction>) {
            for item in items {
                match item {
                    MenuItem::Action { action, .. } => out.push(*action),
                    MenuItem::Submenu { items, .. } => walk(items, out),
                    MenuItem::Separator => {}
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.items, &mut out);
        out
    }

    /// Whether `action` is offered by this menu
    pub fn offers(&self, action: MenuAction) -> bool {
        self.actions().contains(&action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_menu_actions() {
        let menu = ContextMenu::for_icons(Vec2::new(10.0, 10.0));
        assert_eq!(menu.actions(), vec![MenuAction::Open, MenuAction::Rename, MenuAction::Delete]);
        assert!(!menu.offers(MenuAction::Refresh));
    }

    #[test]
    fn test_desktop_menu_includes_submenu() {
        let menu = ContextMenu::for_desktop(Vec2::ZERO);
        assert!(menu.offers(MenuAction::SmallIcons));
        assert!(menu.offers(MenuAction::NewNotepad));
        assert_eq!(menu.items.len(), 4);
    }

    #[test]
    fn test_menu_serializes_for_renderer() {
        let menu = ContextMenu::for_icons(Vec2::ZERO);
        let json = serde_json::to_value(&menu).unwrap();
        assert_eq!(json["target"], "icons");
        assert_eq!(json["items"][2]["type"], "separator");
        assert_eq!(json["items"][0]["action"], "open");
    }
}
