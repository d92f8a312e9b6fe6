//! The inventory entity document and tolerant field lookups.
//!
//! Entities arrive from the inventory service as loosely-shaped JSON objects.
//! Only a handful of fields are interpreted here (`id`, `display_name`,
//! `fqdn`, `ansible_host`, `updated`); everything else is carried through
//! untouched and can be read with [`Entity::get`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{InventoryError, Result};

/// A single inventory host record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity(Value);

impl Default for Entity {
    fn default() -> Self {
        Self(Value::Object(Map::new()))
    }
}

impl From<Map<String, Value>> for Entity {
    fn from(map: Map<String, Value>) -> Self {
        Self(Value::Object(map))
    }
}

impl TryFrom<Value> for Entity {
    type Error = InventoryError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(Value::Object(map))),
            other => Err(InventoryError::InvalidEntity(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

impl Entity {
    /// Parses an entity from a JSON document. The document must be an object.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::try_from(value)
    }

    /// Returns the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Looks up a nested field by path.
    ///
    /// Paths use dots for object keys and brackets (or bare numbers) for
    /// array indices: `"facts.satellite"`, `"tags[0].key"`, `"tags.0.key"`.
    /// Any missing segment, or a segment applied to a scalar, yields `None`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        path_segments(path)
            .into_iter()
            .try_fold(&self.0, |value, segment| segment.apply(value))
    }

    /// Looks up a field and returns it as display text if it is "set".
    ///
    /// `null`, `false`, `0` and the empty string count as unset, so chains of
    /// fallbacks can be written with [`Option::or_else`].
    pub fn text(&self, path: &str) -> Option<String> {
        self.get(path).and_then(truthy_text)
    }

    /// The entity's immutable identifier.
    pub fn id(&self) -> Option<String> {
        self.text("id")
    }

    /// The user-editable display name.
    pub fn display_name(&self) -> Option<String> {
        self.text("display_name")
    }

    /// Sets a top-level field, turning a non-object document into an object.
    pub fn set(&mut self, field: &str, value: impl Into<Value>) {
        if !self.0.is_object() {
            self.0 = Value::Object(Map::new());
        }
        if let Value::Object(map) = &mut self.0 {
            map.insert(field.to_string(), value.into());
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment<'a> {
    Key(&'a str),
    Index(usize),
}

impl Segment<'_> {
    fn apply<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        match (self, value) {
            (Segment::Key(key), Value::Object(map)) => map.get(*key),
            (Segment::Key(key), Value::Array(items)) => {
                key.parse::<usize>().ok().and_then(|i| items.get(i))
            }
            (Segment::Index(i), Value::Array(items)) => items.get(*i),
            (Segment::Index(i), Value::Object(map)) => map.get(&i.to_string()),
            _ => None,
        }
    }
}

fn path_segments(path: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    for part in path.split('.') {
        let (head, brackets) = match part.find('[') {
            Some(pos) => part.split_at(pos),
            None => (part, ""),
        };
        if !head.is_empty() {
            segments.push(Segment::Key(head));
        }
        for piece in brackets.split('[').skip(1) {
            let inner = piece.trim_end_matches(']');
            match inner.parse::<usize>() {
                Ok(index) => segments.push(Segment::Index(index)),
                Err(_) => segments.push(Segment::Key(inner.trim_matches(|c: char| c == '\'' || c == '"'))),
            }
        }
    }
    segments
}

fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn host() -> Entity {
        Entity::try_from(json!({
            "id": "6b3e6f0c-7c7c-4d4e-9d7c-1c1f2a3b4c5d",
            "display_name": "web-01",
            "fqdn": "web-01.example.com",
            "facts": { "satellite": { "org": "ACME" } },
            "tags": [{ "key": "env", "value": "prod" }],
            "cpu_count": 0,
            "ansible_host": ""
        }))
        .unwrap()
    }

    #[test]
    fn test_nested_lookup() {
        let entity = host();
        assert_eq!(entity.get("facts.satellite.org"), Some(&json!("ACME")));
        assert_eq!(entity.get("tags[0].value"), Some(&json!("prod")));
        assert_eq!(entity.get("tags.0.key"), Some(&json!("env")));
        assert_eq!(entity.get("facts['satellite'].org"), Some(&json!("ACME")));
    }

    #[test]
    fn test_missing_segments_are_absent() {
        let entity = host();
        assert_eq!(entity.get("facts.rhsm.org"), None);
        assert_eq!(entity.get("display_name.first"), None);
        assert_eq!(entity.get("tags[5].key"), None);
        assert_eq!(Entity::default().get("id"), None);
    }

    #[test]
    fn test_text_treats_falsy_as_unset() {
        let entity = host();
        assert_eq!(entity.text("ansible_host"), None);
        assert_eq!(entity.text("cpu_count"), None);
        assert_eq!(entity.text("missing"), None);
        assert_eq!(entity.display_name().as_deref(), Some("web-01"));
    }

    #[test]
    fn test_rejects_non_object_documents() {
        assert!(matches!(
            Entity::from_json("[1, 2]"),
            Err(InventoryError::InvalidEntity(_))
        ));
        assert!(matches!(
            Entity::from_json("{"),
            Err(InventoryError::Serialization(_))
        ));
    }

    #[test]
    fn test_set_field() {
        let mut entity = host();
        entity.set("display_name", "web-02");
        assert_eq!(entity.display_name().as_deref(), Some("web-02"));
    }
}
