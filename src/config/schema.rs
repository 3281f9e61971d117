//! Parsing and validation for enforcer.toml schema files
//!
//! A schema attaches a directive, a declared kind and an optional default to
//! each named field, so JSON records can be validated without Rust types.

use crate::directive::parse_directive;
use crate::error::ConfigError;
use crate::rules::RuleRegistry;
use crate::types::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Default schema file name looked up by the CLI
pub const DEFAULT_SCHEMA_FILE: &str = "enforcer.toml";

/// Main schema struct for enforcer.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Schema metadata
    pub schema: SchemaMeta,

    /// Field declarations, in record order
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

/// The `[schema]` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaMeta {
    /// Schema format version, currently "1"
    pub version: String,

    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,
}

/// One `[[fields]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,

    #[serde(default)]
    pub kind: DeclaredKind,

    /// Directive string, e.g. `required;between:2,10`
    #[serde(default)]
    pub enforce: String,

    /// Value applied when the record leaves the field unset
    #[serde(default)]
    pub default: Option<toml::Value>,
}

impl FieldSpec {
    /// The declared default converted to JSON
    ///
    /// An integer default on a float field becomes a float, so the applied
    /// value classifies the same way as any other value of that field.
    pub fn default_json(&self) -> Option<serde_json::Value> {
        self.default.as_ref().map(|value| match (self.kind, value) {
            (DeclaredKind::Float, toml::Value::Integer(i)) => {
                toml_to_json(&toml::Value::Float(*i as f64))
            }
            _ => toml_to_json(value),
        })
    }
}

/// The kind a schema declares for a field
///
/// Determines the zero value a missing field takes. The engine still
/// classifies the runtime value, so a mistyped JSON value is checked as
/// whatever it actually is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclaredKind {
    String,
    Integer,
    Float,
    Boolean,
    #[default]
    Any,
}

impl DeclaredKind {
    /// Zero value for a field of this kind
    pub fn zero_value(&self) -> Value {
        match self {
            DeclaredKind::String => Value::Str(String::new()),
            DeclaredKind::Integer => Value::Int(0),
            DeclaredKind::Float => Value::Float(0.0),
            DeclaredKind::Boolean => Value::Bool(false),
            DeclaredKind::Any => Value::Null,
        }
    }

    fn accepts_default(&self, value: &toml::Value) -> bool {
        matches!(
            (self, value),
            (DeclaredKind::Any, _)
                | (DeclaredKind::String, toml::Value::String(_))
                | (DeclaredKind::Integer, toml::Value::Integer(_))
                | (DeclaredKind::Float, toml::Value::Float(_) | toml::Value::Integer(_))
                | (DeclaredKind::Boolean, toml::Value::Boolean(_))
        )
    }
}

impl Schema {
    /// Load a schema from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a schema from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let schema: Schema = toml::from_str(s)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Validate the schema
    fn validate(&self) -> Result<(), ConfigError> {
        if self.schema.version != "1" {
            return Err(ConfigError::Validation(format!(
                "Unsupported schema version '{}'. Expected '1'",
                self.schema.version
            )));
        }

        if self.fields.is_empty() {
            return Err(ConfigError::Validation(
                "No fields declared. Add [[fields]] entries to the schema.".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.name.is_empty() {
                return Err(ConfigError::Validation(
                    "Field names must not be empty".to_string(),
                ));
            }

            if !seen.insert(field.name.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: field.name.clone(),
                    message: "declared more than once".to_string(),
                });
            }

            if let Some(default) = &field.default
                && !field.kind.accepts_default(default)
            {
                return Err(ConfigError::InvalidValue {
                    field: field.name.clone(),
                    message: format!(
                        "default {} does not match declared kind '{}'",
                        default,
                        kind_name(field.kind)
                    ),
                });
            }
        }

        Ok(())
    }

    /// Look up a field declaration by name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Rule names used by the schema that `registry` does not know
    ///
    /// Returns `(field, rule)` pairs in declaration order. Validation ignores
    /// these silently; front-ends use this to warn about typos.
    pub fn unknown_rules(&self, registry: &RuleRegistry) -> Vec<(String, String)> {
        let mut unknown = Vec::new();
        for field in &self.fields {
            for token in parse_directive(&field.enforce) {
                if !token.name.is_empty() && !registry.contains(token.name) {
                    unknown.push((field.name.clone(), token.name.to_string()));
                }
            }
        }
        unknown
    }
}

fn kind_name(kind: DeclaredKind) -> &'static str {
    match kind {
        DeclaredKind::String => "string",
        DeclaredKind::Integer => "integer",
        DeclaredKind::Float => "float",
        DeclaredKind::Boolean => "boolean",
        DeclaredKind::Any => "any",
    }
}

fn toml_to_json(value: &toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s.clone()),
        toml::Value::Integer(i) => serde_json::Value::from(*i),
        toml::Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        toml::Value::Boolean(b) => serde_json::Value::Bool(*b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(items) => {
            serde_json::Value::Array(items.iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => serde_json::Value::Object(
            table
                .iter()
                .map(|(k, v)| (k.clone(), toml_to_json(v)))
                .collect(),
        ),
    }
}
