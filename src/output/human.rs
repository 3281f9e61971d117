#![forbid(unsafe_code)]

//! Human-readable output formatter
//!
//! Lists each invalid record with its violations, then a one-line summary.
//! Color is applied through termcolor, so the same code renders plain text
//! into a buffer and colored text to a terminal.

use crate::engine::BatchReport;
use std::io;
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Human-readable formatter for batch reports
pub struct HumanFormatter;

impl HumanFormatter {
    /// Creates a new HumanFormatter
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Write the report to a color-capable writer
    pub fn write<W: WriteColor>(&self, report: &BatchReport, out: &mut W) -> io::Result<()> {
        for record in report.records.iter().filter(|r| !r.is_valid()) {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            write!(out, "✗")?;
            out.reset()?;
            writeln!(
                out,
                " {} ({} {})",
                record.origin,
                record.violations.len(),
                plural(record.violations.len(), "violation", "violations")
            )?;

            for violation in &record.violations {
                writeln!(out, "    {}", violation.message)?;
            }
        }

        if !report.passed() {
            writeln!(out)?;
        }

        let total = report.records.len();
        let invalid = report.invalid_count();
        if report.passed() {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
            write!(out, "✓")?;
            out.reset()?;
            writeln!(
                out,
                " {} {} valid",
                total,
                plural(total, "record", "records")
            )?;
        } else {
            writeln!(
                out,
                "Checked {} {}: {} valid, {} invalid, {} {}",
                total,
                plural(total, "record", "records"),
                total - invalid,
                invalid,
                report.total_violations(),
                plural(report.total_violations(), "violation", "violations")
            )?;
        }

        Ok(())
    }

    /// Format the report as plain text
    pub fn format(&self, report: &BatchReport) -> String {
        let mut buffer = Buffer::no_color();
        // Writing into an in-memory buffer cannot fail
        let _ = self.write(report, &mut buffer);
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{RecordReport, Violation};

    fn violation(field: &str, rule: &str, message: &str) -> Violation {
        Violation {
            field: field.to_string(),
            rule: rule.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_format_all_valid() {
        let report = BatchReport {
            records: vec![
                RecordReport {
                    origin: "a.json".to_string(),
                    violations: vec![],
                },
                RecordReport {
                    origin: "b.json".to_string(),
                    violations: vec![],
                },
            ],
        };

        assert_eq!(HumanFormatter::new().format(&report), "✓ 2 records valid\n");
    }

    #[test]
    fn test_format_with_violations() {
        let report = BatchReport {
            records: vec![
                RecordReport {
                    origin: "users.jsonl:1".to_string(),
                    violations: vec![
                        violation("Name", "required", "Name is required"),
                        violation("Age", "min", "Age must be at least 18"),
                    ],
                },
                RecordReport {
                    origin: "users.jsonl:2".to_string(),
                    violations: vec![],
                },
            ],
        };

        let output = HumanFormatter::new().format(&report);
        assert_eq!(
            output,
            "✗ users.jsonl:1 (2 violations)\n\
             \x20   Name is required\n\
             \x20   Age must be at least 18\n\
             \n\
             Checked 2 records: 1 valid, 1 invalid, 2 violations\n"
        );
    }

    #[test]
    fn test_format_single_violation_is_singular() {
        let report = BatchReport {
            records: vec![RecordReport {
                origin: "x".to_string(),
                violations: vec![violation("Age", "min", "Age must be at least 18")],
            }],
        };

        let output = HumanFormatter::new().format(&report);
        assert!(output.starts_with("✗ x (1 violation)\n"));
        assert!(output.ends_with("Checked 1 record: 0 valid, 1 invalid, 1 violation\n"));
    }
}
