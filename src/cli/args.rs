//! CLI argument parsing using clap

use crate::config::DEFAULT_SCHEMA_FILE;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for enforcer commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Use color when stdout is a terminal
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

/// Enforcer CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "enforcer")]
#[command(about = "Validate records against declarative per-field rule directives")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Output coloring
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available enforcer subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate JSON records against a schema
    Check {
        /// JSON or JSON Lines files holding the records
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Schema file declaring fields and their directives
        #[arg(short, long, default_value = DEFAULT_SCHEMA_FILE)]
        schema: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },

    /// List all registered rules
    Rules {
        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },
}
