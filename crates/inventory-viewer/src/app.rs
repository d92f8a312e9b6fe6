//! Root component of the desktop viewer.

use std::sync::{Arc, OnceLock};

use dioxus::prelude::*;
use inventory_core::{ActionSelected, EntityDetails, EntityStore, LoadOptions, MemoryInventory};
use inventory_ui::{CURRENT_THEME, EntityDetail, ExtraAction, Theme, ThemedRoot, use_store_binding};
use tracing::{error, info};

use crate::config::ViewerConfig;

/// Everything the root component needs, set once before launch.
#[derive(Debug)]
pub struct ViewerContext {
    pub store: Arc<MemoryInventory>,
    pub entity_id: String,
    pub config: ViewerConfig,
}

static CONTEXT: OnceLock<ViewerContext> = OnceLock::new();

/// Stores the viewer context. Returns false if one was already installed.
pub fn install(context: ViewerContext) -> bool {
    CONTEXT.set(context).is_ok()
}

/// Loads the entity into `details`, clearing the loaded flag while in flight.
fn reload(store: Arc<dyn EntityStore>, entity_id: String, mut details: Signal<EntityDetails>) {
    details.write().loaded = false;
    spawn(async move {
        match store.load_entity(&entity_id, LoadOptions::with_items()).await {
            Ok(entity) => details.set(EntityDetails::loaded(entity)),
            Err(e) => error!(
                id = %entity_id,
                error = %e,
                transient = e.is_transient(),
                "Failed to load entity"
            ),
        }
    });
}

#[component]
pub fn RootApp() -> Element {
    let Some(context) = CONTEXT.get() else {
        return rsx! {
            div { class: "inventory-error", "Viewer was started without an entity" }
        };
    };
    let store: Arc<dyn EntityStore> = context.store.clone();
    let entity_id = context.entity_id.clone();

    let details = use_signal(EntityDetails::loading);
    let set_display_name = use_store_binding(store.clone(), details);

    use_hook(|| {
        *CURRENT_THEME.write() = context.config.theme();
    });

    // Initial load
    let _initial = use_resource({
        let store = store.clone();
        let entity_id = entity_id.clone();
        move || {
            let store = store.clone();
            let entity_id = entity_id.clone();
            let mut details = details;
            async move {
                info!(id = %entity_id, "Loading entity");
                match store.load_entity(&entity_id, LoadOptions::with_items()).await {
                    Ok(entity) => details.set(EntityDetails::loaded(entity)),
                    Err(e) => error!(id = %entity_id, error = %e, "Failed to load entity"),
                }
            }
        }
    });

    let on_reload = use_callback(move |selected: ActionSelected| {
        info!(key = %selected.key, "Reloading entity");
        reload(store.clone(), entity_id.clone(), details);
    });

    let on_toggle_theme = use_callback(move |_: ActionSelected| {
        let next = match *CURRENT_THEME.read() {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        info!(theme = next.display_name(), "Switching theme");
        *CURRENT_THEME.write() = next;
    });

    let actions = vec![
        ExtraAction::new("Reload", on_reload).with_key("reload"),
        ExtraAction::new("Toggle theme", on_toggle_theme),
    ];
    let snapshot = details.read().clone();

    rsx! {
        ThemedRoot {
            main {
                class: "inventory-page",
                EntityDetail {
                    loaded: snapshot.loaded,
                    entity: snapshot.entity,
                    use_card: context.config.use_card,
                    actions,
                    set_display_name,
                    applications: context.config.application_tabs(),
                }
            }
        }
    }
}
