//! In-memory entity store
//!
//! Backs the desktop viewer and tests. Latency and edit failures can be
//! injected to exercise the asynchronous save path.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tracing::{debug, info, warn};

use crate::entity::Entity;
use crate::error::{InventoryError, Result};
use crate::store::{EntityStore, LoadOptions};

/// In-memory implementation of [`EntityStore`].
///
/// Entities are keyed by their `id` field. Saving a display name also
/// stamps `updated` with the current time, as the inventory service does.
#[derive(Debug, Default)]
pub struct MemoryInventory {
    entities: DashMap<String, Entity>,
    latency: Duration,
    fail_edits: AtomicBool,
    edit_calls: AtomicUsize,
    load_calls: AtomicUsize,
    loads_with_items: AtomicUsize,
}

impl MemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays every request by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Inserts or replaces an entity, keyed by its id.
    pub fn insert(&self, entity: Entity) -> Result<String> {
        let id = entity.id().ok_or(InventoryError::MissingId)?;
        debug!(id = %id, "Inserting entity");
        self.entities.insert(id.clone(), entity);
        Ok(id)
    }

    /// Returns a snapshot of the entity without counting a load.
    pub fn get(&self, id: &str) -> Option<Entity> {
        self.entities.get(id).map(|entry| entry.value().clone())
    }

    /// Makes subsequent edits fail (or succeed again).
    pub fn set_fail_edits(&self, fail: bool) {
        self.fail_edits.store(fail, Ordering::SeqCst);
    }

    pub fn edit_calls(&self) -> usize {
        self.edit_calls.load(Ordering::SeqCst)
    }

    pub fn load_calls(&self) -> usize {
        self.load_calls.load(Ordering::SeqCst)
    }

    /// Number of loads that asked for sub-items.
    pub fn loads_with_items(&self) -> usize {
        self.loads_with_items.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl EntityStore for MemoryInventory {
    async fn edit_display_name(&self, id: &str, display_name: &str) -> Result<()> {
        self.edit_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;

        if self.fail_edits.load(Ordering::SeqCst) {
            warn!(id = %id, "Rejecting display name edit");
            return Err(InventoryError::Request(format!(
                "display name update for {id} was rejected"
            )));
        }

        let mut entry = self
            .entities
            .get_mut(id)
            .ok_or_else(|| InventoryError::EntityNotFound { id: id.to_string() })?;
        entry.set("display_name", display_name);
        entry.set("updated", Utc::now().to_rfc3339());
        info!(id = %id, display_name = %display_name, "Display name updated");
        Ok(())
    }

    async fn load_entity(&self, id: &str, options: LoadOptions) -> Result<Entity> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);
        if options.has_items {
            self.loads_with_items.fetch_add(1, Ordering::SeqCst);
        }
        self.simulate_latency().await;

        debug!(id = %id, has_items = options.has_items, "Loading entity");
        self.get(id)
            .ok_or_else(|| InventoryError::EntityNotFound { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::DisplayNameEdit;
    use crate::store::update_then_reload;
    use serde_json::json;

    fn host(id: &str, name: &str) -> Entity {
        Entity::try_from(json!({"id": id, "display_name": name, "fqdn": "h.example.com"})).unwrap()
    }

    #[test]
    fn test_insert_requires_id() {
        let store = MemoryInventory::new();
        assert!(store.is_empty());
        assert!(matches!(store.insert(Entity::default()), Err(InventoryError::MissingId)));
        assert_eq!(store.insert(host("a", "alpha")).unwrap(), "a");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_load_unknown_entity() {
        let store = MemoryInventory::new();
        let result = tokio_test::block_on(store.load_entity("nope", LoadOptions::default()));
        assert!(matches!(result, Err(InventoryError::EntityNotFound { id }) if id == "nope"));
        assert_eq!(store.load_calls(), 1);
        assert_eq!(store.loads_with_items(), 0);
    }

    #[tokio::test]
    async fn test_edit_updates_name_and_timestamp() {
        let store = MemoryInventory::new();
        store.insert(host("a", "alpha")).unwrap();

        store.edit_display_name("a", "alpha-2").await.unwrap();

        let entity = store.get("a").unwrap();
        assert_eq!(entity.display_name().as_deref(), Some("alpha-2"));
        assert!(entity.text("updated").is_some());
        assert_eq!(entity.text("fqdn").as_deref(), Some("h.example.com"));
        assert_eq!(store.edit_calls(), 1);
    }

    #[tokio::test]
    async fn test_failed_edit_leaves_entity_untouched() {
        let store = MemoryInventory::new();
        store.insert(host("a", "alpha")).unwrap();
        store.set_fail_edits(true);

        let err = store.edit_display_name("a", "beta").await.unwrap_err();
        assert!(err.is_transient());
        assert_eq!(store.get("a").unwrap().display_name().as_deref(), Some("alpha"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_round_trip_with_latency() {
        let store = MemoryInventory::new().with_latency(Duration::from_millis(250));
        store.insert(host("a", "alpha")).unwrap();

        let edit = DisplayNameEdit {
            id: "a".into(),
            display_name: "renamed".into(),
        };
        let entity = update_then_reload(&store, &edit).await.unwrap();

        assert_eq!(entity.display_name().as_deref(), Some("renamed"));
        assert_eq!(store.edit_calls(), 1);
        assert_eq!(store.load_calls(), 1);
        assert_eq!(store.loads_with_items(), 1);
    }
}
