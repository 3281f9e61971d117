#![forbid(unsafe_code)]

//! Schema-driven records over JSON objects

use crate::config::Schema;
use crate::record::{DefaultsApplier, FieldMetadataProvider};
use crate::types::{FieldDescriptor, Value};
use serde_json::Map;

/// A JSON object validated against a [`Schema`]
///
/// Fields are exposed in schema declaration order. A field that is missing or
/// null takes the zero value of its declared kind. Keys the schema does not
/// declare are ignored.
#[derive(Debug, Clone)]
pub struct JsonRecord<'s> {
    schema: &'s Schema,
    object: Map<String, serde_json::Value>,
}

impl<'s> JsonRecord<'s> {
    pub fn new(schema: &'s Schema, object: Map<String, serde_json::Value>) -> Self {
        JsonRecord { schema, object }
    }

    /// The underlying object, including any applied defaults
    pub fn object(&self) -> &Map<String, serde_json::Value> {
        &self.object
    }

    pub fn into_object(self) -> Map<String, serde_json::Value> {
        self.object
    }

    fn is_unset(&self, name: &str) -> bool {
        self.object.get(name).is_none_or(serde_json::Value::is_null)
    }
}

impl FieldMetadataProvider for JsonRecord<'_> {
    fn fields(&self) -> Vec<FieldDescriptor<'_>> {
        self.schema
            .fields
            .iter()
            .map(|spec| {
                let value = match self.object.get(&spec.name) {
                    Some(json) if !json.is_null() => Value::from(json),
                    _ => spec.kind.zero_value(),
                };
                FieldDescriptor {
                    name: &spec.name,
                    value,
                    directive: &spec.enforce,
                }
            })
            .collect()
    }
}

impl DefaultsApplier for JsonRecord<'_> {
    fn apply_defaults(&mut self) {
        for spec in &self.schema.fields {
            if !self.is_unset(&spec.name) {
                continue;
            }
            if let Some(default) = spec.default_json() {
                tracing::trace!(field = %spec.name, %default, "applying default");
                self.object.insert(spec.name.clone(), default);
            }
        }
    }
}
