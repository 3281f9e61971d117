#![forbid(unsafe_code)]

//! Core domain types for Enforcer
//!
//! This module defines the runtime values a record exposes, the semantic kind
//! classification used for handler routing, and the per-field descriptor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic kind of a field's runtime value
///
/// Only the first three kinds have rule handlers beyond `required`; anything
/// else classifies as `Unsupported`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Integer,
    Float,
    String,
    Unsupported,
}

impl FieldKind {
    /// Classifies a runtime value
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Int(_) => FieldKind::Integer,
            Value::Float(_) => FieldKind::Float,
            Value::Str(_) => FieldKind::String,
            Value::Null | Value::Bool(_) | Value::List(_) | Value::Map(_) => {
                FieldKind::Unsupported
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
            FieldKind::String => "string",
            FieldKind::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field's runtime value as seen by the engine
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(Vec<(String, Value)>),
}

impl Value {
    /// Returns the semantic kind of this value
    pub fn kind(&self) -> FieldKind {
        FieldKind::of(self)
    }

    /// Whether this value is the zero value of its kind
    ///
    /// `0`, `0.0`, `""`, `false`, null and empty collections are all zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Int(n) => *n == 0,
            Value::Float(f) => *f == 0.0,
            Value::Str(s) => s.is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Map(entries) => entries.is_empty(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => write!(f, "[{} items]", items.len()),
            Value::Map(entries) => write!(f, "{{{} entries}}", entries.len()),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Int(i64::from(n))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

/// Unsigned integers above `i64::MAX` become floats, matching how JSON
/// numbers of that size are read. Integer-only rules then report them as
/// unsupported instead of comparing a wrapped value.
macro_rules! impl_from_wide_uint {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    match i64::try_from(n) {
                        Ok(i) => Value::Int(i),
                        Err(_) => Value::Float(n as f64),
                    }
                }
            }
        )*
    };
}

impl_from_wide_uint!(u64, usize);

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(f64::from(x))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Str(s.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Str(s.clone()),
            serde_json::Value::Array(items) => Value::List(items.iter().map(Value::from).collect()),
            serde_json::Value::Object(map) => Value::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Per-field view of a record, produced fresh on every validation call
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor<'a> {
    /// Field name, unique within the record
    pub name: &'a str,

    /// Current runtime value
    pub value: Value,

    /// Raw directive string; empty means no rules
    pub directive: &'a str,
}

impl<'a> FieldDescriptor<'a> {
    pub fn new(name: &'a str, value: impl Into<Value>, directive: &'a str) -> Self {
        FieldDescriptor {
            name,
            value: value.into(),
            directive,
        }
    }

    /// Semantic kind of the current value
    pub fn kind(&self) -> FieldKind {
        self.value.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_classification() {
        assert_eq!(Value::from(42).kind(), FieldKind::Integer);
        assert_eq!(Value::from(4.2).kind(), FieldKind::Float);
        assert_eq!(Value::from("hi").kind(), FieldKind::String);
        assert_eq!(Value::from(true).kind(), FieldKind::Unsupported);
        assert_eq!(Value::Null.kind(), FieldKind::Unsupported);
        assert_eq!(Value::from(vec![1, 2]).kind(), FieldKind::Unsupported);
    }

    #[test]
    fn test_zero_values() {
        assert!(Value::from(0).is_zero());
        assert!(Value::from(0.0).is_zero());
        assert!(Value::from(-0.0).is_zero());
        assert!(Value::from("").is_zero());
        assert!(Value::from(false).is_zero());
        assert!(Value::Null.is_zero());
        assert!(Value::List(vec![]).is_zero());

        assert!(!Value::from(-1).is_zero());
        assert!(!Value::from(0.5).is_zero());
        assert!(!Value::from(" ").is_zero());
        assert!(!Value::from(true).is_zero());
        assert!(!Value::from(f64::NAN).is_zero());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::Str("x".to_string()));
    }

    #[test]
    fn test_from_json() {
        assert_eq!(Value::from(&json!(7)), Value::Int(7));
        assert_eq!(Value::from(&json!(7.5)), Value::Float(7.5));
        assert_eq!(Value::from(&json!("a")), Value::Str("a".to_string()));
        assert_eq!(Value::from(&json!(null)), Value::Null);
        assert_eq!(
            Value::from(&json!([1, "a"])),
            Value::List(vec![Value::Int(1), Value::Str("a".to_string())])
        );
        assert_eq!(Value::from(&json!({})).kind(), FieldKind::Unsupported);
    }

    #[test]
    fn test_from_wide_unsigned() {
        assert_eq!(Value::from(7u64), Value::Int(7));
        assert_eq!(Value::from(7usize), Value::Int(7));
        assert_eq!(Value::from(u64::MAX).kind(), FieldKind::Float);

        let json = serde_json::json!(u64::MAX);
        assert_eq!(Value::from(&json), Value::from(u64::MAX));
    }

    #[test]
    fn test_field_descriptor_kind() {
        let field = FieldDescriptor::new("Age", 15, "min:18");
        assert_eq!(field.kind(), FieldKind::Integer);
        assert_eq!(field.directive, "min:18");
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::from(3).to_string(), "3");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::from("abc").to_string(), "abc");
        assert_eq!(Value::Null.to_string(), "null");
    }
}
