//! Desktop viewer for the inventory entity detail panel.
//!
//! Loads one entity into an in-memory store and renders it with
//! [`inventory_ui::EntityDetail`], wired to the store so display-name edits
//! round-trip through the asynchronous save path.

pub mod app;
pub mod config;
