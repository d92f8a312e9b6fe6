//! Error types for inventory store operations.

/// Result type alias for inventory operations.
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Errors raised by entity stores and entity document handling.
///
/// Field lookups on an [`Entity`](crate::Entity) never produce one of these;
/// missing data degrades to an absent value instead.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// No entity with the given id is known to the store.
    #[error("Entity not found: {id}")]
    EntityNotFound { id: String },

    /// The entity document carries no usable `id` field.
    #[error("Entity has no id")]
    MissingId,

    /// The entity document is not a JSON object.
    #[error("Invalid entity document: {0}")]
    InvalidEntity(String),

    /// The backing service rejected or failed the request.
    #[error("Request failed: {0}")]
    Request(String),

    /// JSON (de)serialization failure.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl InventoryError {
    /// Returns true if retrying the request could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, InventoryError::Request(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = InventoryError::EntityNotFound { id: "abc".into() };
        assert_eq!(err.to_string(), "Entity not found: abc");
        assert_eq!(InventoryError::MissingId.to_string(), "Entity has no id");
    }

    #[test]
    fn test_transient() {
        assert!(InventoryError::Request("timeout".into()).is_transient());
        assert!(!InventoryError::MissingId.is_transient());
    }
}
