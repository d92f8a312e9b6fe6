//! Actions menu state and entries.

use serde::{Deserialize, Serialize};

/// Label of the built-in first menu entry.
pub const EDIT_NAME_LABEL: &str = "Edit name";

/// Open/closed state of the header's actions menu.
///
/// The menu widget reports explicit open/close signals (toggle button,
/// outside click, Escape) rather than asking for a flip, so a stray close
/// signal on an already-closed menu is harmless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Applies an explicit open/close signal from the menu widget.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// Records that an entry was chosen; the menu collapses.
    pub fn item_selected(&mut self) {
        self.open = false;
    }
}

/// A caller-supplied extra menu action, minus its handler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl ActionDescriptor {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            key: None,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// The action's identity in the menu: its own key, or its position.
    pub fn resolved_key(&self, index: usize) -> String {
        match self.key.as_deref() {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => index.to_string(),
        }
    }
}

/// Payload handed to an extra action's handler when it is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSelected {
    pub action: ActionDescriptor,
    pub key: String,
}

/// One row of the open actions menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// The built-in "Edit name" entry.
    EditName,
    /// The extra action at `index` in the caller's list.
    Extra { index: usize, key: String, title: String },
}

impl MenuEntry {
    pub fn label(&self) -> &str {
        match self {
            MenuEntry::EditName => EDIT_NAME_LABEL,
            MenuEntry::Extra { title, .. } => title,
        }
    }

    /// Payload for the chosen extra action; `None` for "Edit name".
    pub fn selection(&self, actions: &[ActionDescriptor]) -> Option<ActionSelected> {
        match self {
            MenuEntry::EditName => None,
            MenuEntry::Extra { index, key, .. } => actions.get(*index).map(|action| ActionSelected {
                action: action.clone(),
                key: key.clone(),
            }),
        }
    }
}

/// Menu rows in display order: "Edit name", then `actions` as given.
pub fn menu_entries<'a>(actions: impl IntoIterator<Item = &'a ActionDescriptor>) -> Vec<MenuEntry> {
    std::iter::once(MenuEntry::EditName)
        .chain(actions.into_iter().enumerate().map(|(index, action)| MenuEntry::Extra {
            index,
            key: action.resolved_key(index),
            title: action.title.clone(),
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_signals() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        menu.set_open(true);
        assert!(menu.is_open());
        menu.set_open(true);
        assert!(menu.is_open());
        menu.item_selected();
        assert!(!menu.is_open());
        menu.set_open(false);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_resolved_key_falls_back_to_index() {
        assert_eq!(ActionDescriptor::new("Delete").with_key("delete").resolved_key(3), "delete");
        assert_eq!(ActionDescriptor::new("Delete").resolved_key(3), "3");
        assert_eq!(ActionDescriptor::new("Delete").with_key("").resolved_key(0), "0");
    }

    #[test]
    fn test_entries_order() {
        let actions = vec![
            ActionDescriptor::new("Remediate").with_key("remediate"),
            ActionDescriptor::new("Delete"),
        ];
        let entries = menu_entries(&actions);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], MenuEntry::EditName);
        assert_eq!(entries[0].label(), "Edit name");
        assert_eq!(
            entries[1],
            MenuEntry::Extra { index: 0, key: "remediate".into(), title: "Remediate".into() }
        );
        assert_eq!(
            entries[2],
            MenuEntry::Extra { index: 1, key: "1".into(), title: "Delete".into() }
        );
    }

    #[test]
    fn test_selection_carries_resolved_key() {
        let actions = vec![ActionDescriptor::new("Remediate"), ActionDescriptor::new("Delete").with_key("del")];
        let entries = menu_entries(&actions);

        assert_eq!(entries[0].selection(&actions), None);
        let remediate = entries[1].selection(&actions).unwrap();
        assert_eq!(remediate.key, "0");
        assert_eq!(remediate.action.title, "Remediate");
        assert_eq!(entries[2].selection(&actions).unwrap().key, "del");
        assert_eq!(entries[2].selection(&actions[..1]), None);
    }

    #[test]
    fn test_entries_without_extras() {
        let none: Vec<ActionDescriptor> = Vec::new();
        assert_eq!(menu_entries(&none), vec![MenuEntry::EditName]);
    }
}
