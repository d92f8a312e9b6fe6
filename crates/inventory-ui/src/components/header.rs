//! Header row: display name and actions menu.

use dioxus::prelude::*;

use super::{ActionsMenu, ExtraAction, Skeleton, SkeletonSize};

/// Title bar of the detail view.
///
/// While `loaded` is false both the title and the menu are replaced by
/// placeholders.
#[component]
pub fn EntityHeader(
    loaded: bool,
    display_name: String,
    menu_open: bool,
    #[props(default)] actions: Vec<ExtraAction>,
    on_menu_toggle: EventHandler<bool>,
    on_menu_select: EventHandler<()>,
    on_edit_name: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "ins-c-inventory__detail--header inventory-split",

            div {
                class: "inventory-split__item inventory-split__item--main",
                if loaded {
                    h1 { class: "inventory-title inventory-title--2xl", "{display_name}" }
                } else {
                    Skeleton { size: SkeletonSize::Md }
                }
            }

            div {
                class: "inventory-split__item",
                if loaded {
                    ActionsMenu {
                        open: menu_open,
                        actions,
                        on_toggle: on_menu_toggle,
                        on_select: on_menu_select,
                        on_edit_name,
                    }
                } else {
                    Skeleton { size: SkeletonSize::Xl }
                }
            }
        }
    }
}
