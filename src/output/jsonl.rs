#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line in a deterministic order:
//! 1. All violation records (input order, then field and rule order)
//! 2. One status record

use crate::engine::BatchReport;
use serde::Serialize;

/// JSONL output formatter
///
/// Formats batch reports as JSON Lines (one JSON object per line).
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format the batch report as JSONL
    pub fn format(&self, report: &BatchReport) -> String {
        let mut output = String::new();

        for record in &report.records {
            for violation in &record.violations {
                let line = ViolationRecord {
                    record_type: "violation",
                    record: &record.origin,
                    field: &violation.field,
                    rule: &violation.rule,
                    message: &violation.message,
                };
                if let Ok(json) = serde_json::to_string(&line) {
                    output.push_str(&json);
                    output.push('\n');
                }
            }
        }

        let status = StatusRecord {
            record_type: "status",
            passed: report.passed(),
            records_checked: report.records.len() as u64,
            records_invalid: report.invalid_count() as u64,
            total_violations: report.total_violations() as u64,
        };

        if let Ok(json) = serde_json::to_string(&status) {
            output.push_str(&json);
            output.push('\n');
        }

        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Violation record for JSONL output
#[derive(Debug, Serialize)]
struct ViolationRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    record: &'a str,
    field: &'a str,
    rule: &'a str,
    message: &'a str,
}

/// Status record for JSONL output
#[derive(Debug, Serialize)]
struct StatusRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    passed: bool,
    records_checked: u64,
    records_invalid: u64,
    total_violations: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{RecordReport, Violation};
    use serde_json::Value;

    fn parse_lines(output: &str) -> Vec<Value> {
        output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_format_empty_report() {
        let output = JsonlFormatter::new().format(&BatchReport::default());
        let lines = parse_lines(&output);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["type"], "status");
        assert_eq!(lines[0]["passed"], true);
        assert_eq!(lines[0]["records_checked"], 0);
    }

    #[test]
    fn test_format_violations_then_status() {
        let report = BatchReport {
            records: vec![
                RecordReport {
                    origin: "users.jsonl:1".to_string(),
                    violations: vec![Violation {
                        field: "Name".to_string(),
                        rule: "required".to_string(),
                        message: "Name is required".to_string(),
                    }],
                },
                RecordReport {
                    origin: "users.jsonl:2".to_string(),
                    violations: vec![Violation {
                        field: "Age".to_string(),
                        rule: "min".to_string(),
                        message: "Age must be at least 18".to_string(),
                    }],
                },
            ],
        };

        let lines = parse_lines(&JsonlFormatter::new().format(&report));
        assert_eq!(lines.len(), 3);

        assert_eq!(lines[0]["type"], "violation");
        assert_eq!(lines[0]["record"], "users.jsonl:1");
        assert_eq!(lines[0]["field"], "Name");
        assert_eq!(lines[0]["rule"], "required");
        assert_eq!(lines[0]["message"], "Name is required");

        assert_eq!(lines[1]["field"], "Age");

        assert_eq!(lines[2]["type"], "status");
        assert_eq!(lines[2]["passed"], false);
        assert_eq!(lines[2]["records_checked"], 2);
        assert_eq!(lines[2]["records_invalid"], 2);
        assert_eq!(lines[2]["total_violations"], 2);
    }
}
