//! Enforcer CLI entry point

use clap::Parser;
use enforcer::cli::{Command, args::Cli};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match cli.command {
        Command::Check {
            inputs,
            schema,
            format,
        } => enforcer::cli::check::run_check(&inputs, &schema, format, cli.color),
        Command::Rules { format } => enforcer::cli::rules::run_rules(format),
    };

    process::exit(exit_code);
}
