//! Error types for Enforcer
//!
//! Rule violations are data, not errors: they are returned as messages from
//! validation. The types here cover everything else, following a hierarchical
//! structure with specific variants per category.

use std::path::PathBuf;

/// A rule argument that could not be interpreted
///
/// Handlers never let this escape; it is rendered into a violation message
/// so that a bad directive fails closed instead of passing silently.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstraintError {
    /// The rule needs an argument and none was given
    #[error("missing argument")]
    MissingArgument,

    /// A numeric bound or list entry did not parse
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// Wrong number of comma-separated values
    #[error("expected {expected} value(s), found {found}")]
    Arity { expected: &'static str, found: usize },

    /// Lower bound above upper bound
    #[error("lower bound {min} exceeds upper bound {max}")]
    InvertedRange { min: String, max: String },

    /// A `match` argument that is neither a preset nor a valid regex
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
}

/// Rule registration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// Name is empty or contains directive separators
    #[error("Invalid rule name: '{0}'")]
    InvalidName(String),

    /// A rule with this name is already registered
    #[error("Duplicate rule name: {0}")]
    Duplicate(String),
}

/// Schema configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Schema file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid TOML syntax or shape
    #[error("Invalid schema syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Schema parsed but is not usable
    #[error("{0}")]
    Validation(String),

    /// A specific field entry is invalid
    #[error("Invalid value for field '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Errors reading records to validate
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Input file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid JSON
    #[error("Invalid JSON in {path} at line {line}: {source}")]
    Json {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A record that is not a JSON object
    #[error("Record {index} in {path} is not a JSON object")]
    NotAnObject { path: PathBuf, index: usize },
}

/// Top-level error type for Enforcer
#[derive(Debug, thiserror::Error)]
pub enum EnforcerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule registration error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// Input error
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
