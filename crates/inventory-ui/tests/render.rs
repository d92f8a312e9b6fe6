//! Server-side renders of the entity detail view.

use dioxus::prelude::*;
use inventory_core::{ActionSelected, Entity};
use inventory_ui::{ActionsMenu, ApplicationTab, EditNameDialog, EntityDetail, ExtraAction};

const HOST_ID: &str = "6b3e6f0c-7c7c-4d4e-9d7c-1c1f2a3b4c5d";

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn host() -> Entity {
    Entity::try_from(serde_json::json!({
        "id": HOST_ID,
        "display_name": "web-01",
        "fqdn": "web-01.example.com",
        "updated": "2019-03-26T15:09:40Z",
        "facts": { "rhsm": { "orgId": "5318290" } }
    }))
    .unwrap()
}

#[test]
fn test_loading_renders_only_placeholders() {
    fn app() -> Element {
        rsx! { EntityDetail { loaded: false, entity: host() } }
    }
    let html = render(app);

    assert_eq!(html.matches("ins-c-skeleton__").count(), 6);
    assert!(html.contains("Hostname:"));
    assert!(html.contains("Last seen:"));
    assert!(!html.contains("web-01"));
    assert!(!html.contains(HOST_ID));
    assert!(!html.contains("Actions"));
}

#[test]
fn test_loaded_renders_facts() {
    fn app() -> Element {
        rsx! { EntityDetail { loaded: true, entity: host() } }
    }
    let html = render(app);

    assert!(!html.contains("ins-c-skeleton__"));
    assert!(html.contains("web-01"));
    assert!(html.contains("Actions"));
    // Hostname and the ansible host fallback.
    assert_eq!(html.matches("web-01.example.com").count(), 2);
    assert_eq!(html.matches(HOST_ID).count(), 1);
    // Menu and dialog start closed.
    assert!(!html.contains("Edit name"));
    assert!(!html.contains("Edit display name"));
}

#[test]
fn test_ansible_host_falls_back_to_id() {
    fn app() -> Element {
        let entity = Entity::try_from(serde_json::json!({ "id": "abc-123" })).unwrap();
        rsx! { EntityDetail { loaded: true, entity } }
    }
    let html = render(app);

    assert_eq!(html.matches("abc-123").count(), 2);
    assert!(html.contains("Invalid Date"));
}

#[test]
fn test_missing_entity_renders_blank_facts() {
    fn app() -> Element {
        rsx! { EntityDetail { loaded: true } }
    }
    let html = render(app);

    assert!(html.contains("UUID:"));
    assert!(html.contains("Invalid Date"));
    assert!(!html.contains("ins-c-skeleton__"));
}

#[test]
fn test_card_wraps_header_and_facts() {
    fn card() -> Element {
        rsx! { EntityDetail { loaded: true, entity: host(), use_card: true } }
    }
    fn bare() -> Element {
        rsx! { EntityDetail { loaded: true, entity: host() } }
    }
    let card_html = render(card);
    let bare_html = render(bare);

    assert!(card_html.contains("inventory-card__header"));
    assert!(card_html.contains("inventory-card__body"));
    assert!(!bare_html.contains("inventory-card"));

    for html in [&card_html, &bare_html] {
        assert!(html.contains("ins-entity-detail__apps"));
        assert!(html.contains("inventory-modal-root"));
        assert!(html.contains("ins-c-inventory__detail--header"));
        assert!(html.contains("ins-entity-facts"));
    }
}

#[test]
fn test_open_menu_lists_edit_name_first() {
    fn app() -> Element {
        let actions = vec![
            ExtraAction::new("Remediate", Callback::new(|_: ActionSelected| {})),
            ExtraAction::new("Delete", Callback::new(|_: ActionSelected| {})).with_key("delete"),
        ];
        rsx! {
            ActionsMenu {
                open: true,
                actions,
                on_toggle: |_: bool| {},
                on_select: |_: ()| {},
                on_edit_name: |_: ()| {},
            }
        }
    }
    let html = render(app);

    let edit = html.find("Edit name").unwrap();
    let remediate = html.find("Remediate").unwrap();
    let delete = html.find("Delete").unwrap();
    assert!(edit < remediate);
    assert!(remediate < delete);
    assert!(html.contains("inventory-dropdown__backdrop"));
}

#[test]
fn test_closed_menu_hides_entries() {
    fn app() -> Element {
        rsx! {
            ActionsMenu {
                open: false,
                on_toggle: |_: bool| {},
                on_select: |_: ()| {},
                on_edit_name: |_: ()| {},
            }
        }
    }
    let html = render(app);

    assert!(html.contains("Actions"));
    assert!(!html.contains("Edit name"));
    assert!(!html.contains("inventory-dropdown__backdrop"));
}

#[test]
fn test_dialog_shows_value() {
    fn open() -> Element {
        rsx! {
            EditNameDialog {
                open: true,
                value: "web-01".to_string(),
                on_input: |_: String| {},
                on_cancel: |_: ()| {},
                on_save: |_: ()| {},
            }
        }
    }
    fn closed() -> Element {
        rsx! {
            EditNameDialog {
                open: false,
                value: "web-01".to_string(),
                on_input: |_: String| {},
                on_cancel: |_: ()| {},
                on_save: |_: ()| {},
            }
        }
    }
    let open_html = render(open);
    let closed_html = render(closed);

    assert!(open_html.contains("Edit display name"));
    assert!(open_html.contains("Host inventory display name"));
    assert!(open_html.contains("web-01"));
    assert!(open_html.contains("Cancel"));
    assert!(open_html.contains("Save"));
    assert!(closed_html.contains("inventory-modal-root"));
    assert!(!closed_html.contains("Edit display name"));
}

#[test]
fn test_application_tabs() {
    fn app() -> Element {
        rsx! {
            EntityDetail {
                loaded: true,
                entity: host(),
                applications: vec![
                    ApplicationTab::new("general", "General information"),
                    ApplicationTab::new("compliance", "Compliance"),
                ],
            }
        }
    }
    let html = render(app);

    assert!(html.contains("General information"));
    assert!(html.contains("Compliance"));
    assert!(html.contains("ins-entity-detail__app-body"));
}
