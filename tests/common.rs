//! Test utilities for enforcer integration tests

#![allow(dead_code)]

use enforcer::record::{DefaultsApplier, FieldMetadataProvider};
use enforcer::types::{FieldDescriptor, Value};

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// A record built from `(name, value, directive)` triples
///
/// Counts how often defaults were applied so tests can check the
/// once-per-validation contract.
#[derive(Debug, Clone, Default)]
pub struct TableRecord {
    pub fields: Vec<(String, Value, String)>,
    pub defaults_applied: usize,
}

impl TableRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &str, value: impl Into<Value>, directive: &str) -> Self {
        self.fields
            .push((name.to_string(), value.into(), directive.to_string()));
        self
    }
}

impl FieldMetadataProvider for TableRecord {
    fn fields(&self) -> Vec<FieldDescriptor<'_>> {
        self.fields
            .iter()
            .map(|(name, value, directive)| FieldDescriptor {
                name,
                value: value.clone(),
                directive,
            })
            .collect()
    }
}

impl DefaultsApplier for TableRecord {
    fn apply_defaults(&mut self) {
        self.defaults_applied += 1;
    }
}

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Extract Some value or panic with context
#[macro_export]
macro_rules! assert_some {
    ($expr:expr) => {
        match $expr {
            Some(v) => v,
            None => panic!("assertion failed: expected Some, got None"),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Some(v) => v,
            None => panic!("{}: got None", $msg),
        }
    };
}
