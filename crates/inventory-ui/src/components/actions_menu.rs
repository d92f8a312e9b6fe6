//! Actions dropdown for the detail header.

use dioxus::prelude::*;
use inventory_core::{ActionDescriptor, ActionSelected, MenuEntry, menu_entries};
use tracing::debug;

/// A caller-supplied menu action with its click handler.
#[derive(Clone, PartialEq)]
pub struct ExtraAction {
    pub action: ActionDescriptor,
    pub on_click: EventHandler<ActionSelected>,
}

impl ExtraAction {
    pub fn new(title: impl Into<String>, on_click: EventHandler<ActionSelected>) -> Self {
        Self {
            action: ActionDescriptor::new(title),
            on_click,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.action = self.action.with_key(key);
        self
    }
}

/// Right-aligned "Actions" dropdown.
///
/// Visibility is owned by the parent. The widget only reports explicit
/// open/close requests through `on_toggle`: the toggle button, a click on
/// the backdrop and the Escape key. Choosing any entry fires `on_select`
/// before the entry's own handler.
#[component]
pub fn ActionsMenu(
    open: bool,
    #[props(default)] actions: Vec<ExtraAction>,
    on_toggle: EventHandler<bool>,
    on_select: EventHandler<()>,
    on_edit_name: EventHandler<()>,
) -> Element {
    let descriptors: Vec<ActionDescriptor> = actions.iter().map(|a| a.action.clone()).collect();
    let entries = menu_entries(&descriptors);
    let open_class = if open { " open" } else { "" };

    rsx! {
        div {
            class: "inventory-dropdown inventory-dropdown--right{open_class}",
            onkeydown: move |evt: KeyboardEvent| {
                if open && evt.key() == Key::Escape {
                    on_toggle.call(false);
                }
            },

            button {
                class: "inventory-dropdown__toggle",
                r#type: "button",
                "aria-haspopup": "true",
                "aria-expanded": "{open}",
                onclick: move |_| on_toggle.call(!open),
                "Actions"
                span { class: "inventory-dropdown__caret", "\u{25BE}" }
            }

            if open {
                // Backdrop to close menu on outside click
                div {
                    class: "inventory-dropdown__backdrop",
                    onclick: move |_| on_toggle.call(false),
                }

                ul {
                    class: "inventory-dropdown__menu",
                    role: "menu",
                    for entry in entries {
                        {
                            let label = entry.label().to_string();
                            let item_key = match &entry {
                                MenuEntry::EditName => "edit-name".to_string(),
                                MenuEntry::Extra { key, .. } => format!("action-{key}"),
                            };
                            let is_edit_name = entry == MenuEntry::EditName;
                            let selection = entry.selection(&descriptors);
                            let handler = match &entry {
                                MenuEntry::Extra { index, .. } => actions.get(*index).map(|a| a.on_click),
                                MenuEntry::EditName => None,
                            };
                            rsx! {
                                li {
                                    key: "{item_key}",
                                    role: "none",
                                    button {
                                        class: "inventory-dropdown__item",
                                        r#type: "button",
                                        role: "menuitem",
                                        "data-key": "{item_key}",
                                        onclick: move |_| {
                                            on_select.call(());
                                            if is_edit_name {
                                                on_edit_name.call(());
                                            } else if let (Some(selected), Some(on_click)) = (selection.clone(), handler) {
                                                debug!(key = %selected.key, "Extra action chosen");
                                                on_click.call(selected);
                                            }
                                        },
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
