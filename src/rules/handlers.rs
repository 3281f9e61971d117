#![forbid(unsafe_code)]

//! Builtin rule handlers
//!
//! Each handler checks one value of one kind against one rule token and
//! returns `None` on success or the violation message on failure. Handlers
//! are total: a malformed argument becomes a violation describing it.

use crate::directive::{RuleToken, parse_number};
use crate::error::ConstraintError;
use crate::types::Value;
use regex::Regex;
use std::sync::LazyLock;

/// Named patterns accepted by `match` in place of a regex
pub const MATCH_PRESETS: &[(&str, &str)] = &[
    ("email", r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$"),
    ("url", r"^https?://[^\s/?#.]+\.[^\s]+$"),
    ("alpha", r"^[A-Za-z]+$"),
    ("alphanumeric", r"^[A-Za-z0-9]+$"),
    ("numeric", r"^[0-9]+$"),
];

/// Presets compiled once and shared by every validation
static COMPILED_PRESETS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    MATCH_PRESETS
        .iter()
        .filter_map(|(name, pattern)| Regex::new(pattern).ok().map(|re| (*name, re)))
        .collect()
});

/// The compiled regex for a named `match` preset
pub fn preset(name: &str) -> Option<&'static Regex> {
    COMPILED_PRESETS
        .iter()
        .find(|(preset, _)| *preset == name)
        .map(|(_, regex)| regex)
}

/// Message for a recognized rule applied to a kind it has no handler for
pub fn unsupported_type(field: &str) -> String {
    format!("Unsupported type for field '{}'", field)
}

fn invalid_constraint(field: &str, token: &RuleToken<'_>, err: &ConstraintError) -> String {
    format!(
        "Invalid constraint '{}' for field '{}': {}",
        token.raw, field, err
    )
}

/// Runs a check and folds a malformed argument into a violation
fn checked(
    field: &str,
    token: &RuleToken<'_>,
    check: impl FnOnce() -> Result<Option<String>, ConstraintError>,
) -> Option<String> {
    check().unwrap_or_else(|err| Some(invalid_constraint(field, token, &err)))
}

fn fail_if(condition: bool, message: impl FnOnce() -> String) -> Option<String> {
    condition.then(message)
}

// ============================================================================
// required
// ============================================================================

pub fn required(value: &Value, field: &str, _token: &RuleToken<'_>) -> Option<String> {
    fail_if(value.is_zero(), || format!("{} is required", field))
}

// ============================================================================
// between / min / max
// ============================================================================

pub fn between_int(value: i64, field: &str, token: &RuleToken<'_>) -> Option<String> {
    checked(field, token, || {
        let (min, max) = token.range::<i64>()?;
        Ok(fail_if(value < min || value > max, || {
            format!("{} must be between {} and {}", field, min, max)
        }))
    })
}

pub fn between_str(value: &str, field: &str, token: &RuleToken<'_>) -> Option<String> {
    checked(field, token, || {
        let (min, max) = token.range::<usize>()?;
        let len = value.chars().count();
        Ok(fail_if(len < min || len > max, || {
            format!("{} must be between {} and {} characters", field, min, max)
        }))
    })
}

pub fn min_int(value: i64, field: &str, token: &RuleToken<'_>) -> Option<String> {
    checked(field, token, || {
        let min = token.single::<i64>()?;
        Ok(fail_if(value < min, || {
            format!("{} must be at least {}", field, min)
        }))
    })
}

pub fn min_str(value: &str, field: &str, token: &RuleToken<'_>) -> Option<String> {
    checked(field, token, || {
        let min = token.single::<usize>()?;
        Ok(fail_if(value.chars().count() < min, || {
            format!("{} must be at least {} characters", field, min)
        }))
    })
}

pub fn max_int(value: i64, field: &str, token: &RuleToken<'_>) -> Option<String> {
    checked(field, token, || {
        let max = token.single::<i64>()?;
        Ok(fail_if(value > max, || {
            format!("{} must be at most {}", field, max)
        }))
    })
}

pub fn max_str(value: &str, field: &str, token: &RuleToken<'_>) -> Option<String> {
    checked(field, token, || {
        let max = token.single::<usize>()?;
        Ok(fail_if(value.chars().count() > max, || {
            format!("{} must be at most {} characters", field, max)
        }))
    })
}

// ============================================================================
// wordCount / match
// ============================================================================

pub fn word_count(value: &str, field: &str, token: &RuleToken<'_>) -> Option<String> {
    checked(field, token, || {
        let (min, max) = token.count_constraint()?;
        let words = value.split_whitespace().count();
        Ok(fail_if(words < min || words > max, || {
            if min == max {
                format!("{} must contain exactly {} words", field, min)
            } else {
                format!("{} must contain between {} and {} words", field, min, max)
            }
        }))
    })
}

pub fn matches(value: &str, field: &str, token: &RuleToken<'_>) -> Option<String> {
    checked(field, token, || {
        let arg = token.require_argument()?;
        let named = preset(arg);

        // Ad-hoc patterns are compiled per call
        let compiled;
        let regex = match named {
            Some(regex) => regex,
            None => {
                compiled = Regex::new(arg)
                    .map_err(|e| ConstraintError::InvalidPattern(e.to_string()))?;
                &compiled
            }
        };

        Ok(fail_if(!regex.is_match(value), || match named {
            Some(_) => format!("{} must be a valid {}", field, arg),
            None => format!("{} must match pattern '{}'", field, arg),
        }))
    })
}

// ============================================================================
// enum / exclude
// ============================================================================

/// Numeric list membership for integer values
///
/// Entries parse as integers where possible and fall back to floats, so
/// `enum:1,2.0` accepts both 1 and 2.
fn int_in_list(value: i64, entries: &[&str]) -> Result<bool, ConstraintError> {
    let mut found = false;
    for entry in entries {
        let hit = match entry.trim().parse::<i64>() {
            Ok(n) => n == value,
            Err(_) => parse_number::<f64>(entry)? == value as f64,
        };
        found |= hit;
    }
    Ok(found)
}

fn float_in_list(value: f64, entries: &[&str]) -> Result<bool, ConstraintError> {
    let mut found = false;
    for entry in entries {
        found |= parse_number::<f64>(entry)? == value;
    }
    Ok(found)
}

fn one_of(field: &str, entries: &[&str]) -> String {
    format!("{} must be one of: {}", field, entries.join(", "))
}

fn none_of(field: &str, entries: &[&str]) -> String {
    format!("{} must not be one of: {}", field, entries.join(", "))
}

pub fn enum_int(value: i64, field: &str, token: &RuleToken<'_>) -> Option<String> {
    checked(field, token, || {
        let entries = token.list()?;
        Ok(fail_if(!int_in_list(value, &entries)?, || {
            one_of(field, &entries)
        }))
    })
}

pub fn enum_float(value: f64, field: &str, token: &RuleToken<'_>) -> Option<String> {
    checked(field, token, || {
        let entries = token.list()?;
        Ok(fail_if(!float_in_list(value, &entries)?, || {
            one_of(field, &entries)
        }))
    })
}

pub fn enum_str(value: &str, field: &str, token: &RuleToken<'_>) -> Option<String> {
    checked(field, token, || {
        let entries = token.list()?;
        Ok(fail_if(!entries.iter().any(|e| *e == value), || {
            one_of(field, &entries)
        }))
    })
}

pub fn exclude_int(value: i64, field: &str, token: &RuleToken<'_>) -> Option<String> {
    checked(field, token, || {
        let entries = token.list()?;
        Ok(fail_if(int_in_list(value, &entries)?, || {
            none_of(field, &entries)
        }))
    })
}

pub fn exclude_float(value: f64, field: &str, token: &RuleToken<'_>) -> Option<String> {
    checked(field, token, || {
        let entries = token.list()?;
        Ok(fail_if(float_in_list(value, &entries)?, || {
            none_of(field, &entries)
        }))
    })
}

pub fn exclude_str(value: &str, field: &str, token: &RuleToken<'_>) -> Option<String> {
    checked(field, token, || {
        let entries = token.list()?;
        Ok(fail_if(entries.iter().any(|e| *e == value), || {
            none_of(field, &entries)
        }))
    })
}
