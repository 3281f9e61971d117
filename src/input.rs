//! Reading records to validate from JSON and JSON Lines files
//!
//! A `.jsonl` or `.ndjson` file holds one object per non-blank line. Any other
//! file is parsed as a single JSON document: one object, or an array of them.

use crate::engine::InputRecord;
use crate::error::InputError;
use std::fs;
use std::path::Path;

/// Read all records from `path`
///
/// # Errors
///
/// Returns `InputError` if the file cannot be read, is not valid JSON, or
/// holds something other than objects.
pub fn read_records(path: &Path) -> Result<Vec<InputRecord>, InputError> {
    let content = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_lines = matches!(
        path.extension().and_then(|s| s.to_str()),
        Some("jsonl" | "ndjson")
    );

    if is_lines {
        parse_lines(path, &content)
    } else {
        parse_document(path, &content)
    }
}

/// Parse JSON Lines content; blank lines are skipped
pub fn parse_lines(path: &Path, content: &str) -> Result<Vec<InputRecord>, InputError> {
    let mut records = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;
        let value: serde_json::Value =
            serde_json::from_str(line).map_err(|source| InputError::Json {
                path: path.to_path_buf(),
                line: line_no,
                source,
            })?;
        records.push(to_record(path, value, line_no, format!("{}:{}", path.display(), line_no))?);
    }

    Ok(records)
}

/// Parse a single JSON document holding an object or an array of objects
pub fn parse_document(path: &Path, content: &str) -> Result<Vec<InputRecord>, InputError> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|source| InputError::Json {
            path: path.to_path_buf(),
            line: source.line(),
            source,
        })?;

    match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| {
                let origin = format!("{}[{}]", path.display(), idx);
                to_record(path, item, idx, origin)
            })
            .collect(),
        other => Ok(vec![to_record(path, other, 0, path.display().to_string())?]),
    }
}

fn to_record(
    path: &Path,
    value: serde_json::Value,
    index: usize,
    origin: String,
) -> Result<InputRecord, InputError> {
    match value {
        serde_json::Value::Object(object) => Ok(InputRecord { origin, object }),
        _ => Err(InputError::NotAnObject {
            path: path.to_path_buf(),
            index,
        }),
    }
}
