#![forbid(unsafe_code)]

//! Rule listing formatters
//!
//! Formatters for the `enforcer rules` command, in human-readable and JSONL
//! forms.

use crate::rules::{RuleDefinition, RuleRegistry};
use serde::Serialize;

/// Listing information for a single rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSummary {
    pub name: String,
    pub description: String,
    /// Kinds with a handler; `["any"]` for rules that take every kind
    pub kinds: Vec<String>,
}

impl RuleSummary {
    pub fn from_definition(definition: &RuleDefinition) -> Self {
        let kinds = definition.handlers.kinds();
        let kinds = if kinds.is_empty() {
            vec!["any".to_string()]
        } else {
            kinds.iter().map(|k| k.as_str().to_string()).collect()
        };

        RuleSummary {
            name: definition.name.clone(),
            description: definition.description.clone(),
            kinds,
        }
    }

    /// Summaries for every rule in `registry`, sorted by name
    pub fn collect(registry: &RuleRegistry) -> Vec<Self> {
        registry.iter_rules().map(Self::from_definition).collect()
    }
}

/// Human-readable formatter for rule listings
pub struct RuleListHumanFormatter;

impl RuleListHumanFormatter {
    /// Create a new human formatter
    pub fn new() -> Self {
        RuleListHumanFormatter
    }

    /// Format a list of rules for human consumption
    pub fn format(&self, rules: &[RuleSummary]) -> String {
        let mut output = String::new();

        output.push_str(&format!("Rules ({} registered):\n", rules.len()));
        output.push('\n');

        for rule in rules {
            output.push_str(&format!("{}\n", rule.name));
            output.push_str(&format!("  Description: {}\n", rule.description));
            output.push_str(&format!("  Kinds: {}\n", rule.kinds.join(", ")));
            output.push('\n');
        }

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, rules: &[RuleSummary]) {
        print!("{}", self.format(rules));
    }
}

impl Default for RuleListHumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// JSONL output structure for a rule
#[derive(Debug, Serialize)]
struct JsonlRule<'a> {
    name: &'a str,
    description: &'a str,
    kinds: &'a [String],
}

/// JSONL formatter for rule listings
pub struct RuleListJsonlFormatter;

impl RuleListJsonlFormatter {
    /// Create a new JSONL formatter
    pub fn new() -> Self {
        RuleListJsonlFormatter
    }

    /// Format a list of rules as JSONL, one object per rule
    pub fn format(&self, rules: &[RuleSummary]) -> String {
        let mut output = String::new();

        for rule in rules {
            let jsonl_rule = JsonlRule {
                name: &rule.name,
                description: &rule.description,
                kinds: &rule.kinds,
            };

            if let Ok(json) = serde_json::to_string(&jsonl_rule) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, rules: &[RuleSummary]) {
        print!("{}", self.format(rules));
    }
}

impl Default for RuleListJsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_builtin() {
        let rules = RuleSummary::collect(&RuleRegistry::builtin());
        assert_eq!(rules.len(), 8);

        let required = rules.iter().find(|r| r.name == "required").unwrap();
        assert_eq!(required.kinds, vec!["any"]);

        let exclude = rules.iter().find(|r| r.name == "exclude").unwrap();
        assert_eq!(exclude.kinds, vec!["integer", "float", "string"]);
    }

    #[test]
    fn test_human_format() {
        let rules = vec![RuleSummary {
            name: "min".to_string(),
            description: "At least".to_string(),
            kinds: vec!["integer".to_string(), "string".to_string()],
        }];

        let output = RuleListHumanFormatter::new().format(&rules);
        assert!(output.contains("Rules (1 registered):"));
        assert!(output.contains("min\n"));
        assert!(output.contains("  Description: At least\n"));
        assert!(output.contains("  Kinds: integer, string\n"));
    }

    #[test]
    fn test_jsonl_format() {
        let rules = RuleSummary::collect(&RuleRegistry::builtin());
        let output = RuleListJsonlFormatter::new().format(&rules);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 8);

        for line in lines {
            let parsed: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(parsed["name"].is_string());
            assert!(parsed["kinds"].is_array());
        }
    }
}
