//! Schema file parsing and validation

pub mod schema;

pub use schema::{DEFAULT_SCHEMA_FILE, DeclaredKind, FieldSpec, Schema, SchemaMeta};
