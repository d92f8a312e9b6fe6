//! Dioxus components for the inventory entity detail view.
//!
//! [`EntityDetail`] is the entry point: it renders an entity's header,
//! facts, application tabs and the edit-name dialog from injected data.
//! [`use_store_binding`] connects its rename callback to an
//! [`EntityStore`](inventory_core::EntityStore).

pub mod binding;
pub mod components;
pub mod theme;

pub use binding::use_store_binding;
pub use components::{
    ActionsMenu, ApplicationDetails, ApplicationTab, EditNameDialog, EntityDetail, EntityFactsPanel,
    EntityHeader, ExtraAction, Skeleton, SkeletonSize,
};
pub use theme::{CURRENT_THEME, Theme, ThemedRoot};

/// Stylesheet for every component in this crate.
pub const INVENTORY_CSS: &str = include_str!("../assets/inventory.css");
