//! Edit-display-name dialog state machine.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::entity::Entity;

/// A request to rename an entity, produced when the dialog is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayNameEdit {
    pub id: String,
    pub display_name: String,
}

/// State of the edit-name dialog.
///
/// The in-progress text only exists while the dialog is open, so every
/// close transition drops it and the next open starts from the entity's
/// current name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditNameModal {
    #[default]
    Closed,
    Open {
        /// `None` until the user types; the input then shows the entity's name.
        pending: Option<String>,
    },
}

impl EditNameModal {
    pub fn is_open(&self) -> bool {
        matches!(self, EditNameModal::Open { .. })
    }

    /// The user's unsaved text, if any.
    pub fn pending(&self) -> Option<&str> {
        match self {
            EditNameModal::Open { pending } => pending.as_deref(),
            EditNameModal::Closed => None,
        }
    }

    /// Opens the dialog with an untouched buffer. No-op when already open.
    pub fn open(&mut self) {
        if !self.is_open() {
            debug!("Opening edit-name dialog");
            *self = EditNameModal::Open { pending: None };
        }
    }

    /// Replaces the buffer with the input's current text.
    ///
    /// Ignored while closed.
    pub fn input(&mut self, text: impl Into<String>) {
        if let EditNameModal::Open { pending } = self {
            *pending = Some(text.into());
        }
    }

    /// Value the text input should show.
    pub fn shown_value(&self, entity: &Entity) -> String {
        match self.pending() {
            Some(text) => text.to_string(),
            None => entity.display_name().unwrap_or_default(),
        }
    }

    /// Closes without submitting.
    pub fn cancel(&mut self) {
        if self.is_open() {
            debug!("Edit-name dialog dismissed");
        }
        *self = EditNameModal::Closed;
    }

    /// Closes and returns the rename to submit.
    ///
    /// An empty or untouched buffer resubmits the entity's current name.
    /// Returns `None` if the dialog was not open or the entity has no id.
    pub fn save(&mut self, entity: &Entity) -> Option<DisplayNameEdit> {
        let EditNameModal::Open { pending } = std::mem::take(self) else {
            return None;
        };
        let Some(id) = entity.id() else {
            warn!("Edit-name dialog saved for an entity without id, skipping update request");
            return None;
        };
        let display_name = pending
            .filter(|text| !text.is_empty())
            .or_else(|| entity.display_name())
            .unwrap_or_default();
        debug!(id = %id, display_name = %display_name, "Edit-name dialog saved");
        Some(DisplayNameEdit { id, display_name })
    }
}
