//! Connects the detail view's rename callback to an entity store.

use std::sync::Arc;

use dioxus::prelude::*;
use inventory_core::{DisplayNameEdit, EntityDetails, EntityStore, update_then_reload};
use tracing::{debug, warn};

/// Returns a `set_display_name` handler for [`EntityDetail`](crate::EntityDetail).
///
/// Each call spawns one task that saves the name, reloads the entity with
/// its sub-items and writes the result into `details`. The view is not
/// blocked while the task runs. Failures are logged and otherwise dropped.
/// Overlapping saves are not ordered: whichever reload finishes last wins,
/// and a reload for an entity that is no longer displayed is discarded.
pub fn use_store_binding(
    store: Arc<dyn EntityStore>,
    details: Signal<EntityDetails>,
) -> EventHandler<DisplayNameEdit> {
    use_callback(move |edit: DisplayNameEdit| {
        let store = store.clone();
        let mut details = details;
        spawn(async move {
            match update_then_reload(store.as_ref(), &edit).await {
                Ok(entity) => {
                    let current_id = details.read().entity.id();
                    if current_id.as_deref() != Some(edit.id.as_str()) {
                        debug!(id = %edit.id, "Discarding reload for an entity no longer shown");
                        return;
                    }
                    details.write().entity = entity;
                }
                Err(e) => {
                    warn!(
                        id = %edit.id,
                        error = %e,
                        transient = e.is_transient(),
                        "Display name update failed"
                    );
                }
            }
        });
    })
}
