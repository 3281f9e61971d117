#![forbid(unsafe_code)]

//! Rule registry for table-driven dispatch
//!
//! The RuleRegistry maps a rule name to a [`HandlerSet`], the handlers that
//! rule has for each field kind. It is built once and then only read, so a
//! single registry can serve any number of concurrent validations.

use crate::directive::{ARGUMENT_DELIMITER, LIST_SEPARATOR, RuleToken, TOKEN_SEPARATOR};
use crate::error::RuleError;
use crate::rules::handlers;
use crate::types::{FieldDescriptor, FieldKind, Value};
use std::collections::HashMap;
use std::fmt;

/// Handler for integer values
pub type IntHandler = fn(i64, &str, &RuleToken<'_>) -> Option<String>;

/// Handler for floating-point values
pub type FloatHandler = fn(f64, &str, &RuleToken<'_>) -> Option<String>;

/// Handler for string values
pub type StrHandler = fn(&str, &str, &RuleToken<'_>) -> Option<String>;

/// Handler that accepts a value of any kind
pub type AnyHandler = fn(&Value, &str, &RuleToken<'_>) -> Option<String>;

/// The handlers one rule has, keyed by field kind
///
/// When `any` is set it takes every value and the per-kind slots are unused.
#[derive(Clone, Copy, Default)]
pub struct HandlerSet {
    any: Option<AnyHandler>,
    integer: Option<IntHandler>,
    float: Option<FloatHandler>,
    string: Option<StrHandler>,
}

impl HandlerSet {
    /// A set with one handler for every kind
    pub fn for_any(handler: AnyHandler) -> Self {
        HandlerSet {
            any: Some(handler),
            ..Self::default()
        }
    }

    pub fn with_integer(mut self, handler: IntHandler) -> Self {
        self.integer = Some(handler);
        self
    }

    pub fn with_float(mut self, handler: FloatHandler) -> Self {
        self.float = Some(handler);
        self
    }

    pub fn with_string(mut self, handler: StrHandler) -> Self {
        self.string = Some(handler);
        self
    }

    /// Whether this set can handle a value of `kind`
    pub fn supports(&self, kind: FieldKind) -> bool {
        if self.any.is_some() {
            return true;
        }
        match kind {
            FieldKind::Integer => self.integer.is_some(),
            FieldKind::Float => self.float.is_some(),
            FieldKind::String => self.string.is_some(),
            FieldKind::Unsupported => false,
        }
    }

    /// Kinds with a dedicated handler; empty when the set takes any kind
    pub fn kinds(&self) -> Vec<FieldKind> {
        if self.any.is_some() {
            return Vec::new();
        }
        [FieldKind::Integer, FieldKind::Float, FieldKind::String]
            .into_iter()
            .filter(|kind| self.supports(*kind))
            .collect()
    }

    /// Routes a field to the handler for its kind
    ///
    /// A kind with no handler yields the unsupported-type violation.
    pub fn dispatch(&self, field: &FieldDescriptor<'_>, token: &RuleToken<'_>) -> Option<String> {
        if let Some(handler) = self.any {
            return handler(&field.value, field.name, token);
        }

        match (&field.value, self.integer, self.float, self.string) {
            (Value::Int(n), Some(handler), _, _) => handler(*n, field.name, token),
            (Value::Float(x), _, Some(handler), _) => handler(*x, field.name, token),
            (Value::Str(s), _, _, Some(handler)) => handler(s, field.name, token),
            _ => Some(handlers::unsupported_type(field.name)),
        }
    }
}

impl fmt::Debug for HandlerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerSet")
            .field("any", &self.any.is_some())
            .field("kinds", &self.kinds())
            .finish()
    }
}

/// A named rule: its description and handlers
#[derive(Debug, Clone)]
pub struct RuleDefinition {
    pub name: String,
    pub description: String,
    pub handlers: HandlerSet,
}

impl RuleDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        handlers: HandlerSet,
    ) -> Self {
        RuleDefinition {
            name: name.into(),
            description: description.into(),
            handlers,
        }
    }
}

/// Registry for storing and looking up rules by name
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    rules: HashMap<String, RuleDefinition>,
}

impl RuleRegistry {
    /// Create a new empty RuleRegistry
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Create a registry holding every builtin rule
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for definition in builtin_rules() {
            registry.rules.insert(definition.name.clone(), definition);
        }
        registry
    }

    /// Register a rule
    ///
    /// # Errors
    ///
    /// Returns `RuleError` if:
    /// - The name is empty or contains a directive separator
    /// - A rule with the same name is already registered
    pub fn register(&mut self, definition: RuleDefinition) -> Result<(), RuleError> {
        let name = &definition.name;
        if name.is_empty()
            || name.contains([TOKEN_SEPARATOR, ARGUMENT_DELIMITER, LIST_SEPARATOR])
            || name.chars().any(char::is_whitespace)
        {
            return Err(RuleError::InvalidName(name.clone()));
        }

        if self.rules.contains_key(name) {
            return Err(RuleError::Duplicate(name.clone()));
        }

        self.rules.insert(name.clone(), definition);
        Ok(())
    }

    /// Get a rule by name
    ///
    /// Returns `None` if no rule has that name.
    pub fn get(&self, name: &str) -> Option<&RuleDefinition> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Iterate over all rules, sorted by name
    pub fn iter_rules(&self) -> impl Iterator<Item = &RuleDefinition> {
        let mut rules: Vec<&RuleDefinition> = self.rules.values().collect();
        rules.sort_by(|a, b| a.name.cmp(&b.name));
        rules.into_iter()
    }

    /// Get the number of rules in the registry
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn builtin_rules() -> Vec<RuleDefinition> {
    use handlers::*;

    vec![
        RuleDefinition::new(
            "required",
            "Value must not be the zero value of its kind",
            HandlerSet::for_any(required),
        ),
        RuleDefinition::new(
            "between",
            "Value or string length within an inclusive min,max range",
            HandlerSet::default()
                .with_integer(between_int)
                .with_string(between_str),
        ),
        RuleDefinition::new(
            "min",
            "Value or string length at least the given bound",
            HandlerSet::default()
                .with_integer(min_int)
                .with_string(min_str),
        ),
        RuleDefinition::new(
            "max",
            "Value or string length at most the given bound",
            HandlerSet::default()
                .with_integer(max_int)
                .with_string(max_str),
        ),
        RuleDefinition::new(
            "wordCount",
            "Whitespace-delimited word count, exact or min,max",
            HandlerSet::default().with_string(word_count),
        ),
        RuleDefinition::new(
            "match",
            "String matches a regex or a named preset",
            HandlerSet::default().with_string(matches),
        ),
        RuleDefinition::new(
            "enum",
            "Value is one of a comma-separated list",
            HandlerSet::default()
                .with_integer(enum_int)
                .with_float(enum_float)
                .with_string(enum_str),
        ),
        RuleDefinition::new(
            "exclude",
            "Value is none of a comma-separated list",
            HandlerSet::default()
                .with_integer(exclude_int)
                .with_float(exclude_float)
                .with_string(exclude_str),
        ),
    ]
}
