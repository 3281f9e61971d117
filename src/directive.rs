#![forbid(unsafe_code)]

//! Directive and rule token parsing
//!
//! A directive is the raw per-field string, e.g. `required;between:2,10`.
//! It splits on `;` into rule tokens, and each token splits on its first `:`
//! into a rule name and a raw argument payload. Argument grammars belong to
//! the individual rules; the helpers at the bottom of this module cover the
//! shapes the builtin rules share.

use crate::error::ConstraintError;
use std::fmt;
use std::str::FromStr;

/// Separator between rule tokens in a directive
pub const TOKEN_SEPARATOR: char = ';';

/// Separator between a rule name and its argument
pub const ARGUMENT_DELIMITER: char = ':';

/// Separator between values inside an argument
pub const LIST_SEPARATOR: char = ',';

/// Splits a directive into its rule token substrings
///
/// Empty directives produce no tokens. Otherwise the split is non-collapsing:
/// `"a;;b"` yields `["a", "", "b"]`. Whitespace is not trimmed.
pub fn split_directive(directive: &str) -> Vec<&str> {
    if directive.is_empty() {
        return Vec::new();
    }
    directive.split(TOKEN_SEPARATOR).collect()
}

/// One parsed rule from a directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleToken<'a> {
    /// Rule name, used as the dispatch key
    pub name: &'a str,

    /// Raw argument text after the first delimiter, if any
    pub argument: Option<&'a str>,

    /// The token exactly as written
    pub raw: &'a str,
}

impl<'a> RuleToken<'a> {
    /// Parses a single token such as `between:1,10` or `required`
    pub fn parse(raw: &'a str) -> Self {
        match raw.split_once(ARGUMENT_DELIMITER) {
            Some((name, argument)) => RuleToken {
                name,
                argument: Some(argument),
                raw,
            },
            None => RuleToken {
                name: raw,
                argument: None,
                raw,
            },
        }
    }

    /// Returns the argument or `MissingArgument`
    pub fn require_argument(&self) -> Result<&'a str, ConstraintError> {
        match self.argument {
            Some(arg) if !arg.is_empty() => Ok(arg),
            _ => Err(ConstraintError::MissingArgument),
        }
    }

    /// Parses the argument as a single number
    pub fn single<T: FromStr>(&self) -> Result<T, ConstraintError> {
        let arg = self.require_argument()?;
        let values = split_list(arg);
        if values.len() != 1 {
            return Err(ConstraintError::Arity {
                expected: "1",
                found: values.len(),
            });
        }
        parse_number(values[0])
    }

    /// Parses the argument as an inclusive `min,max` pair
    pub fn range<T: FromStr + PartialOrd + fmt::Display>(&self) -> Result<(T, T), ConstraintError> {
        let arg = self.require_argument()?;
        let values = split_list(arg);
        if values.len() != 2 {
            return Err(ConstraintError::Arity {
                expected: "2",
                found: values.len(),
            });
        }
        let min: T = parse_number(values[0])?;
        let max: T = parse_number(values[1])?;
        if min > max {
            return Err(ConstraintError::InvertedRange {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok((min, max))
    }

    /// Parses the argument as either an exact count `n` or a `min,max` pair
    pub fn count_constraint(&self) -> Result<(usize, usize), ConstraintError> {
        let arg = self.require_argument()?;
        if arg.contains(LIST_SEPARATOR) {
            self.range()
        } else {
            let n = self.single()?;
            Ok((n, n))
        }
    }

    /// Splits the argument into a non-empty list of raw values
    pub fn list(&self) -> Result<Vec<&'a str>, ConstraintError> {
        let arg = self.require_argument()?;
        Ok(split_list(arg))
    }
}

impl fmt::Display for RuleToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

/// Parses every token of a directive, in order
pub fn parse_directive(directive: &str) -> Vec<RuleToken<'_>> {
    split_directive(directive)
        .into_iter()
        .map(RuleToken::parse)
        .collect()
}

fn split_list(arg: &str) -> Vec<&str> {
    arg.split(LIST_SEPARATOR).collect()
}

/// Parses a trimmed numeric value
pub(crate) fn parse_number<T: FromStr>(raw: &str) -> Result<T, ConstraintError> {
    raw.trim()
        .parse()
        .map_err(|_| ConstraintError::InvalidNumber(raw.to_string()))
}
