//! Check command implementation
//!
//! This module implements the `enforcer check` command, which:
//! - Loads the schema file
//! - Warns about rule names no handler recognizes
//! - Reads records from the JSON / JSON Lines inputs
//! - Validates every record in parallel
//! - Formats output (human or JSONL)
//! - Returns appropriate exit code

use crate::cli::args::{ColorChoice, OutputFormat};
use crate::cli::common::{EXIT_ERROR, EXIT_PARSE_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS};
use crate::engine::{Validator, validate_batch};
use crate::error::{ConfigError, EnforcerError, InputError};
use crate::output::{HumanFormatter, JsonlFormatter};
use std::io::Write;
use std::path::{Path, PathBuf};
use termcolor::StandardStream;

/// Run the check command
///
/// # Returns
///
/// Exit code:
/// - 0: Success (every record is valid)
/// - 1: One or more records have violations
/// - 2: Error (missing schema, unreadable input, invalid schema contents)
/// - 3: Parse error (invalid TOML schema or JSON input)
pub fn run_check(inputs: &[PathBuf], schema: &Path, format: OutputFormat, color: ColorChoice) -> i32 {
    match run_check_inner(inputs, schema, format, color) {
        Ok(true) => EXIT_SUCCESS,
        Ok(false) => EXIT_VIOLATIONS,
        Err(e) => {
            eprintln!("Error: {}", e);
            match e {
                EnforcerError::Config(ConfigError::Parse(_)) => EXIT_PARSE_ERROR,
                EnforcerError::Input(InputError::Json { .. } | InputError::NotAnObject { .. }) => {
                    EXIT_PARSE_ERROR
                }
                _ => EXIT_ERROR,
            }
        }
    }
}

/// Internal implementation of check command
fn run_check_inner(
    inputs: &[PathBuf],
    schema_path: &Path,
    format: OutputFormat,
    color: ColorChoice,
) -> Result<bool, EnforcerError> {
    // 1. Load the schema
    let schema = super::common::load_schema(schema_path)?;
    tracing::info!(schema = %schema_path.display(), fields = schema.fields.len(), "loaded schema");

    // 2. Warn about directives naming unknown rules
    let validator = Validator::default();
    for (field, rule) in schema.unknown_rules(validator.registry()) {
        eprintln!("Warning: field '{}' uses unknown rule '{}'; it will be ignored", field, rule);
    }

    // 3. Read records
    let records = super::common::load_records(inputs)?;
    if records.is_empty() {
        eprintln!("Warning: No records found to check.");
    } else if format == OutputFormat::Human {
        eprintln!(
            "Checking {} records against {} fields...",
            records.len(),
            schema.fields.len()
        );
    }

    // 4. Validate
    let report = validate_batch(&validator, &schema, records);

    // 5. Format and print output
    match format {
        OutputFormat::Human => {
            let mut stdout = StandardStream::stdout(super::common::stdout_color(color));
            HumanFormatter::new().write(&report, &mut stdout)?;
            stdout.flush()?;
        }
        OutputFormat::Jsonl => print!("{}", JsonlFormatter::new().format(&report)),
    }

    Ok(report.passed())
}
