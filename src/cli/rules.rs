//! Rules command implementation
//!
//! Lists every registered rule with its description and the field kinds it
//! has handlers for.

use crate::cli::args::OutputFormat;
use crate::cli::common::EXIT_SUCCESS;
use crate::output::{RuleListHumanFormatter, RuleListJsonlFormatter, RuleSummary};
use crate::rules::RuleRegistry;

/// Run the rules command
pub fn run_rules(format: OutputFormat) -> i32 {
    let rules = RuleSummary::collect(&RuleRegistry::builtin());

    match format {
        OutputFormat::Human => RuleListHumanFormatter::new().write_to_stdout(&rules),
        OutputFormat::Jsonl => RuleListJsonlFormatter::new().write_to_stdout(&rules),
    }

    EXIT_SUCCESS
}
