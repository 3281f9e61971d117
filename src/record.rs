#![forbid(unsafe_code)]

//! Record capabilities the engine validates through
//!
//! The engine never inspects a record's shape itself. A record exposes its
//! fields through [`FieldMetadataProvider`] and its defaulting policy through
//! [`DefaultsApplier`]; anything implementing both is a [`Record`].
//!
//! ```
//! use enforcer::record::{DefaultsApplier, FieldMetadataProvider};
//! use enforcer::types::FieldDescriptor;
//!
//! struct Signup {
//!     name: String,
//!     age: i64,
//! }
//!
//! impl FieldMetadataProvider for Signup {
//!     fn fields(&self) -> Vec<FieldDescriptor<'_>> {
//!         vec![
//!             FieldDescriptor::new("Name", &self.name, "required;between:2,10"),
//!             FieldDescriptor::new("Age", self.age, "min:18"),
//!         ]
//!     }
//! }
//!
//! impl DefaultsApplier for Signup {}
//!
//! let mut signup = Signup { name: String::new(), age: 15 };
//! let violations = enforcer::validate(&mut signup);
//! assert_eq!(violations[0], "Name is required");
//! ```

pub mod json;

pub use json::JsonRecord;

use crate::types::FieldDescriptor;

/// Exposes a record's fields for validation
pub trait FieldMetadataProvider {
    /// Fields in declaration order
    fn fields(&self) -> Vec<FieldDescriptor<'_>>;
}

/// Sets unset fields to their declared defaults
///
/// Called exactly once per validation, before any field is read.
pub trait DefaultsApplier {
    fn apply_defaults(&mut self) {}
}

/// Anything the engine can validate
pub trait Record: FieldMetadataProvider + DefaultsApplier {}

impl<T: FieldMetadataProvider + DefaultsApplier + ?Sized> Record for T {}
