#![forbid(unsafe_code)]

//! Dispatch engine and validation entry point
//!
//! For every field the validator parses the directive into rule tokens,
//! looks each rule up in its registry and routes the field's value to the
//! handler for its kind. Every failure is collected; nothing short-circuits.

use crate::directive::parse_directive;
use crate::record::Record;
use crate::rules::RuleRegistry;
use crate::types::FieldDescriptor;
use std::fmt;
use std::sync::LazyLock;

static BUILTIN: LazyLock<Validator> = LazyLock::new(Validator::default);

/// One failed rule on one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Name of the field that failed
    pub field: String,

    /// Rule name that produced the failure
    pub rule: String,

    /// Human-readable message
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates records against their field directives
///
/// Holds an immutable rule registry, so one validator can be shared across
/// threads and reused for any number of records.
#[derive(Debug, Clone)]
pub struct Validator {
    registry: RuleRegistry,
}

impl Validator {
    /// Creates a validator dispatching through `registry`
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Applies defaults once, then checks every field
    pub fn check<R: Record + ?Sized>(&self, record: &mut R) -> Vec<Violation> {
        record.apply_defaults();
        let fields = record.fields();
        self.check_fields(&fields)
    }

    /// Checks already-extracted fields, in order
    ///
    /// Fields with an empty directive are skipped. Unknown rule names produce
    /// nothing. A known rule with no handler for the field's kind produces the
    /// unsupported-type violation.
    pub fn check_fields(&self, fields: &[FieldDescriptor<'_>]) -> Vec<Violation> {
        let mut violations = Vec::new();

        for field in fields {
            if field.directive.is_empty() {
                continue;
            }

            for token in parse_directive(field.directive) {
                let Some(rule) = self.registry.get(token.name) else {
                    tracing::trace!(field = field.name, rule = token.name, "ignoring unknown rule");
                    continue;
                };

                if let Some(message) = rule.handlers.dispatch(field, &token) {
                    tracing::trace!(field = field.name, rule = token.name, %message, "violation");
                    violations.push(Violation {
                        field: field.name.to_string(),
                        rule: rule.name.clone(),
                        message,
                    });
                }
            }
        }

        violations
    }

    /// Validates a record and returns the violation messages
    ///
    /// An empty result means the record is valid.
    pub fn validate<R: Record + ?Sized>(&self, record: &mut R) -> Vec<String> {
        self.check(record)
            .into_iter()
            .map(|violation| violation.message)
            .collect()
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(RuleRegistry::builtin())
    }
}

/// Validates a record with the builtin rules
pub fn validate<R: Record + ?Sized>(record: &mut R) -> Vec<String> {
    BUILTIN.validate(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{DefaultsApplier, FieldMetadataProvider};

    struct Fields(Vec<(&'static str, crate::types::Value, &'static str)>);

    impl FieldMetadataProvider for Fields {
        fn fields(&self) -> Vec<FieldDescriptor<'_>> {
            self.0
                .iter()
                .map(|(name, value, directive)| FieldDescriptor::new(name, value.clone(), directive))
                .collect()
        }
    }

    impl DefaultsApplier for Fields {}

    #[test]
    fn test_empty_directive_skips_only_that_field() {
        let mut record = Fields(vec![
            ("First", "".into(), "required"),
            ("Skipped", "".into(), ""),
            ("Last", "".into(), "required"),
        ]);
        assert_eq!(
            validate(&mut record),
            vec!["First is required", "Last is required"]
        );
    }

    #[test]
    fn test_unknown_rules_are_ignored() {
        let mut record = Fields(vec![("Name", "".into(), "nonsense:1;;required")]);
        assert_eq!(validate(&mut record), vec!["Name is required"]);
    }

    #[test]
    fn test_check_reports_field_and_rule() {
        let mut record = Fields(vec![("Age", 15.into(), "min:18")]);
        let violations = Validator::default().check(&mut record);
        assert_eq!(
            violations,
            vec![Violation {
                field: "Age".to_string(),
                rule: "min".to_string(),
                message: "Age must be at least 18".to_string(),
            }]
        );
        assert_eq!(violations[0].to_string(), "Age must be at least 18");
    }

    #[test]
    fn test_empty_registry_accepts_everything() {
        let validator = Validator::new(RuleRegistry::new());
        let mut record = Fields(vec![("Name", "".into(), "required")]);
        assert!(validator.validate(&mut record).is_empty());
    }

    #[test]
    fn test_validator_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Validator>();
        assert_sync::<Validator>();
    }
}
