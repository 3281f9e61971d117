//! Common helper functions shared across CLI commands

use crate::cli::args::ColorChoice;
use crate::config::Schema;
use crate::engine::InputRecord;
use crate::error::{ConfigError, InputError};
use crate::input::read_records;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
pub const EXIT_PARSE_ERROR: i32 = 3;

/// Load the schema file
///
/// # Errors
///
/// Returns `ConfigError::Io` if the schema does not exist or cannot be read.
/// Returns `ConfigError::Parse` if it is not valid TOML.
pub(crate) fn load_schema(path: &Path) -> Result<Schema, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("schema file {} not found", path.display()),
        )));
    }

    Schema::load(path)
}

/// Read records from every input, in argument order
pub(crate) fn load_records(inputs: &[PathBuf]) -> Result<Vec<InputRecord>, InputError> {
    let mut all_records = Vec::new();
    for path in inputs {
        all_records.extend(read_records(path)?);
    }
    Ok(all_records)
}

/// Resolve the user's color choice for stdout
pub(crate) fn stdout_color(choice: ColorChoice) -> termcolor::ColorChoice {
    match choice {
        ColorChoice::Always => termcolor::ColorChoice::Always,
        ColorChoice::Never => termcolor::ColorChoice::Never,
        ColorChoice::Auto if std::io::stdout().is_terminal() => termcolor::ColorChoice::Auto,
        ColorChoice::Auto => termcolor::ColorChoice::Never,
    }
}
