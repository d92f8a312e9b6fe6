//! Dialog for renaming the entity.

use dioxus::prelude::*;

/// Dialog controls, tagged with `data-action` for UI automation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DialogControl {
    Close,
    Cancel,
    Save,
}

impl DialogControl {
    fn name(self) -> &'static str {
        match self {
            DialogControl::Close => "close",
            DialogControl::Cancel => "cancel",
            DialogControl::Save => "save",
        }
    }
}

/// Modal dialog with a single text input for the display name.
///
/// The root container is always rendered; the dialog itself only while
/// `open`. Close button, backdrop click, Escape and Cancel all report
/// `on_cancel`. Save reports `on_save`; the parent decides what to submit.
#[component]
pub fn EditNameDialog(
    open: bool,
    value: String,
    on_input: EventHandler<String>,
    on_cancel: EventHandler<()>,
    on_save: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "inventory-modal-root",

            if open {
                div {
                    class: "inventory-modal__backdrop",
                    onclick: move |_| on_cancel.call(()),

                    div {
                        class: "inventory-modal ins-c-inventory__detail--edit",
                        role: "dialog",
                        "aria-modal": "true",
                        "aria-labelledby": "inventory-edit-name-title",
                        onclick: move |e| e.stop_propagation(),
                        onkeydown: move |evt: KeyboardEvent| {
                            if evt.key() == Key::Escape {
                                on_cancel.call(());
                            }
                        },

                        div {
                            class: "inventory-modal__header",
                            h2 {
                                id: "inventory-edit-name-title",
                                class: "inventory-modal__title",
                                "Edit display name"
                            }
                            button {
                                class: "inventory-modal__close",
                                r#type: "button",
                                "aria-label": "Close",
                                "data-action": DialogControl::Close.name(),
                                onclick: move |_| on_cancel.call(()),
                                "\u{2715}"
                            }
                        }

                        div {
                            class: "inventory-modal__body",
                            input {
                                class: "inventory-text-input",
                                r#type: "text",
                                value: "{value}",
                                autofocus: true,
                                "aria-label": "Host inventory display name",
                                oninput: move |evt| on_input.call(evt.value()),
                            }
                        }

                        div {
                            class: "inventory-modal__footer",
                            button {
                                class: "inventory-button inventory-button--secondary",
                                r#type: "button",
                                "data-action": DialogControl::Cancel.name(),
                                onclick: move |_| on_cancel.call(()),
                                "Cancel"
                            }
                            button {
                                class: "inventory-button inventory-button--primary",
                                r#type: "button",
                                "data-action": DialogControl::Save.name(),
                                onclick: move |_| on_save.call(()),
                                "Save"
                            }
                        }
                    }
                }
            }
        }
    }
}
