//! The assembled entity detail view.

use dioxus::prelude::*;
use inventory_core::{DisplayNameEdit, EditNameModal, Entity, EntityFacts, MenuState};

use super::{ApplicationDetails, ApplicationTab, EditNameDialog, EntityFactsPanel, EntityHeader, ExtraAction};

/// Detail panel for one inventory host.
///
/// Data comes in through props; the only outgoing effect is
/// `set_display_name`, called with the rename when the edit dialog is
/// saved. Menu and dialog state are local to each mounted instance.
#[component]
pub fn EntityDetail(
    loaded: bool,
    #[props(default)] entity: Entity,
    #[props(default)] use_card: bool,
    #[props(default)] actions: Vec<ExtraAction>,
    #[props(default)] set_display_name: Option<EventHandler<DisplayNameEdit>>,
    #[props(default)] applications: Vec<ApplicationTab>,
) -> Element {
    let mut menu = use_signal(MenuState::default);
    let mut modal = use_signal(EditNameModal::default);

    let display_name = entity.display_name().unwrap_or_default();
    let facts = EntityFacts::from_entity(&entity);
    let menu_open = menu.read().is_open();
    let modal_open = modal.read().is_open();
    let input_value = modal.read().shown_value(&entity);

    let on_menu_toggle = move |open: bool| menu.write().set_open(open);
    let on_menu_select = move |_: ()| menu.write().item_selected();
    let on_edit_name = move |_: ()| modal.write().open();
    let on_input = move |text: String| modal.write().input(text);
    let on_cancel = move |_: ()| modal.write().cancel();
    let on_save = move |_: ()| {
        let edit = modal.write().save(&entity);
        if let (Some(edit), Some(handler)) = (edit, set_display_name) {
            handler.call(edit);
        }
    };

    let header = rsx! {
        EntityHeader {
            loaded,
            display_name,
            menu_open,
            actions,
            on_menu_toggle,
            on_menu_select,
            on_edit_name,
        }
    };
    let facts_panel = rsx! {
        EntityFactsPanel { loaded, facts }
    };

    let top = if use_card {
        rsx! {
            div {
                class: "inventory-card",
                div { class: "inventory-card__header", {header} }
                div { class: "inventory-card__body", {facts_panel} }
            }
        }
    } else {
        rsx! {
            {header}
            {facts_panel}
        }
    };

    rsx! {
        div {
            class: "ins-entity-detail",
            {top}
            ApplicationDetails { applications }
            EditNameDialog {
                open: modal_open,
                value: input_value,
                on_input,
                on_cancel,
                on_save,
            }
        }
    }
}
