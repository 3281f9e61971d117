#![forbid(unsafe_code)]

//! Parallel validation of many JSON records against one schema
//!
//! Records are independent, so they are validated concurrently with rayon.
//! Reports come back in input order.

use crate::config::Schema;
use crate::engine::validator::{Validator, Violation};
use crate::record::JsonRecord;
use rayon::prelude::*;
use serde_json::Map;

/// A JSON object awaiting validation, labelled with where it came from
#[derive(Debug, Clone)]
pub struct InputRecord {
    /// Human-readable origin such as `users.jsonl:3`
    pub origin: String,
    pub object: Map<String, serde_json::Value>,
}

/// Violations for one record
#[derive(Debug, Clone, PartialEq)]
pub struct RecordReport {
    pub origin: String,
    pub violations: Vec<Violation>,
}

impl RecordReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Result of validating a batch of records
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchReport {
    /// One report per input record, in input order
    pub records: Vec<RecordReport>,
}

impl BatchReport {
    /// True when no record has violations
    pub fn passed(&self) -> bool {
        self.records.iter().all(RecordReport::is_valid)
    }

    pub fn invalid_count(&self) -> usize {
        self.records.iter().filter(|r| !r.is_valid()).count()
    }

    pub fn total_violations(&self) -> usize {
        self.records.iter().map(|r| r.violations.len()).sum()
    }
}

/// Validates every record against `schema`
pub fn validate_batch(validator: &Validator, schema: &Schema, records: Vec<InputRecord>) -> BatchReport {
    tracing::debug!(records = records.len(), fields = schema.fields.len(), "validating batch");

    let records = records
        .into_par_iter()
        .map(|input| {
            let mut record = JsonRecord::new(schema, input.object);
            let violations = validator.check(&mut record);
            tracing::debug!(origin = %input.origin, violations = violations.len(), "record checked");
            RecordReport {
                origin: input.origin,
                violations,
            }
        })
        .collect();

    BatchReport { records }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(origin: &str, value: serde_json::Value) -> InputRecord {
        let serde_json::Value::Object(object) = value else {
            panic!("expected object");
        };
        InputRecord {
            origin: origin.to_string(),
            object,
        }
    }

    fn schema() -> Schema {
        Schema::parse(
            r#"
[schema]
version = "1"

[[fields]]
name = "Name"
kind = "string"
enforce = "required;between:2,10"

[[fields]]
name = "Age"
kind = "integer"
enforce = "min:18"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_batch_preserves_order_and_counts() {
        let schema = schema();
        let records: Vec<InputRecord> = (0..50)
            .map(|i| {
                let age = if i % 2 == 0 { 30 } else { 10 };
                input(&format!("r{}", i), json!({"Name": "Sam", "Age": age}))
            })
            .collect();

        let report = validate_batch(&Validator::default(), &schema, records);

        assert_eq!(report.records.len(), 50);
        for (i, record) in report.records.iter().enumerate() {
            assert_eq!(record.origin, format!("r{}", i));
            assert_eq!(record.is_valid(), i % 2 == 0);
        }
        assert!(!report.passed());
        assert_eq!(report.invalid_count(), 25);
        assert_eq!(report.total_violations(), 25);
    }

    #[test]
    fn test_empty_batch_passes() {
        let report = validate_batch(&Validator::default(), &schema(), Vec::new());
        assert!(report.passed());
        assert_eq!(report.total_violations(), 0);
    }
}
