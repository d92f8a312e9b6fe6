//! Core types for the inventory entity detail view.
//!
//! Everything here is free of UI concerns: the entity document and its
//! tolerant field lookups, the derived facts table, the actions menu and
//! edit-name modal state machines, and the asynchronous store contract the
//! view's display-name edits flow through.

pub mod edit;
pub mod entity;
pub mod error;
pub mod facts;
pub mod memory;
pub mod menu;
pub mod store;

pub use edit::{DisplayNameEdit, EditNameModal};
pub use entity::Entity;
pub use error::{InventoryError, Result};
pub use facts::{EntityFacts, INVALID_DATE, LAST_SEEN_FORMAT, ansible_host, format_last_seen};
pub use memory::MemoryInventory;
pub use menu::{ActionDescriptor, ActionSelected, EDIT_NAME_LABEL, MenuEntry, MenuState, menu_entries};
pub use store::{EntityDetails, EntityStore, LoadOptions, update_then_reload};
