//! Resource record and list filter types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key holding the server-assigned identifier.
pub const ID_FIELD: &str = "id";

/// A stored resource.
///
/// Apart from `id`, `title` and `type` a resource carries arbitrary
/// client-defined fields, so it is kept as an ordered JSON object rather
/// than a fixed struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resource {
    fields: Map<String, Value>,
}

impl Resource {
    /// Build a new resource with `id` as its first field followed by `fields`.
    ///
    /// A client-supplied `id` in `fields` is dropped.
    pub fn with_id(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        let mut out = Map::with_capacity(fields.len() + 1);
        out.insert(ID_FIELD.to_string(), Value::String(id.into()));
        out.extend(fields.into_iter().filter(|(k, _)| k != ID_FIELD));
        Self { fields: out }
    }

    /// The resource identifier, if the stored record has a string `id`.
    pub fn id(&self) -> Option<&str> {
        self.fields.get(ID_FIELD).and_then(Value::as_str)
    }

    /// Look up a top-level field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Whether a top-level field holds exactly the given string.
    fn field_equals(&self, key: &str, expected: &str) -> bool {
        self.get(key).and_then(Value::as_str) == Some(expected)
    }

    /// Shallow-merge `patch` over this resource.
    ///
    /// Top-level keys in the patch overwrite existing ones (nested objects
    /// are replaced, not merged); untouched keys keep their value and
    /// position. A patched `id` replaces the identifier like any other key.
    pub fn merge(&mut self, patch: Map<String, Value>) {
        self.fields.extend(patch);
    }

    /// Access the underlying JSON object.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

/// Equality filters for listing resources.
///
/// Empty values are treated as "no filter".
#[derive(Debug, Clone, Default)]
pub struct ResourceFilter {
    pub resource_type: Option<String>,
    pub author_id: Option<String>,
}

impl ResourceFilter {
    /// Build a filter from raw query pairs.
    ///
    /// The first occurrence of `type` and `authorId` wins; unknown keys and
    /// repeats are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut filter = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "type" => &mut filter.resource_type,
                "authorId" => &mut filter.author_id,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        filter
    }

    /// Check whether a resource passes all active filters.
    pub fn matches(&self, resource: &Resource) -> bool {
        active(&self.resource_type).is_none_or(|t| resource.field_equals("type", t))
            && active(&self.author_id).is_none_or(|a| resource.field_equals("authorId", a))
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
