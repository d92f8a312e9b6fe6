//! Store contract consumed by the entity detail view.
//!
//! The view never talks to a store directly. It receives an
//! [`EntityDetails`] snapshot to render and hands [`DisplayNameEdit`]s to an
//! injected callback; the binding behind that callback drives
//! [`update_then_reload`] against some [`EntityStore`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::edit::DisplayNameEdit;
use crate::entity::Entity;
use crate::error::Result;

/// Options for [`EntityStore::load_entity`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Also fetch the entity's related sub-items.
    pub has_items: bool,
}

impl LoadOptions {
    pub fn with_items() -> Self {
        Self { has_items: true }
    }
}

/// The entity-detail slice of application state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityDetails {
    pub loaded: bool,
    pub entity: Entity,
}

impl EntityDetails {
    /// Nothing loaded yet.
    pub fn loading() -> Self {
        Self::default()
    }

    pub fn loaded(entity: Entity) -> Self {
        Self {
            loaded: true,
            entity,
        }
    }
}

/// Backend holding inventory entities.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Persists a new display name for the entity.
    async fn edit_display_name(&self, id: &str, display_name: &str) -> Result<()>;

    /// Fetches the current state of the entity.
    async fn load_entity(&self, id: &str, options: LoadOptions) -> Result<Entity>;
}

/// Persists a rename, then reloads the entity with its sub-items.
///
/// The reload only happens once the edit has succeeded; an edit failure is
/// returned as-is. Concurrent calls for the same entity are not ordered
/// against each other.
pub async fn update_then_reload(store: &dyn EntityStore, edit: &DisplayNameEdit) -> Result<Entity> {
    info!(id = %edit.id, display_name = %edit.display_name, "Submitting display name");
    store.edit_display_name(&edit.id, &edit.display_name).await?;

    debug!(id = %edit.id, "Display name saved, reloading entity");
    store.load_entity(&edit.id, LoadOptions::with_items()).await
}
