#![forbid(unsafe_code)]

//! Enforcer: declarative field validation
//!
//! Each field of a record carries a directive such as `required;between:2,10`.
//! Enforcer parses the directive into rules, routes every rule to the handler
//! for the field's value kind, and collects all violation messages instead of
//! stopping at the first failure.

pub mod cli;
pub mod config;
pub mod directive;
pub mod engine;
pub mod error;
pub mod input;
pub mod output;
pub mod record;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, ConstraintError, EnforcerError, InputError, RuleError};

// Re-export the validation entry points and core domain types
pub use engine::{Validator, Violation, validate};
pub use record::{DefaultsApplier, FieldMetadataProvider, Record};
pub use types::{FieldDescriptor, FieldKind, Value};
