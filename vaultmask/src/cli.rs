// vaultmask/src/cli.rs
//! This file defines the command-line interface (CLI) for the vaultmask application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vaultmask_core::PiiEntry;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "vaultmask",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Swap known PII for stand-ins before text leaves your machine",
    long_about = "vaultmask replaces the personal data you list in a vault (names, emails, phone numbers, SSNs, addresses, custom strings) with realistic synthetic values, so text can be sent to an external service such as a hosted LLM. Replies can be restored to the real values with the same session.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a YAML vault file.
    #[arg(
        long = "vault",
        value_name = "FILE",
        env = "VAULTMASK_VAULT",
        global = true,
        help = "Path to a YAML vault file. Defaults to ~/.vaultmask/vault.yaml, <config dir>/vaultmask/vault.yaml or ./vault.yaml."
    )]
    pub vault: Option<PathBuf>,

    /// Extra vault entries given inline.
    #[arg(
        long = "entry",
        value_name = "CATEGORY:VALUE",
        value_parser = parse_entry,
        global = true,
        help = "Add a vault entry, e.g. --entry 'name:John Smith'. May be repeated."
    )]
    pub entries: Vec<PiiEntry>,

    /// Path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `vaultmask` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Redacts an input file or stdin.
    #[command(about = "Redacts vault values in an input file or stdin.")]
    Redact(RedactCommand),

    /// Reports vault values found in the input without redacting.
    #[command(about = "Reports vault values found in the input without redacting it.")]
    Scan(ScanCommand),

    /// Redacts, pipes through an external command, and restores its output.
    #[command(about = "Redacts the input, pipes it through an external command and restores that command's output.")]
    Roundtrip(RoundtripCommand),
}

/// Arguments for the `redact` command.
#[derive(Parser, Debug)]
pub struct RedactCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write redacted output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Show a unified diff to highlight the changes made.
    #[arg(long, short = 'D', help = "Show a unified diff to highlight the changes made.")]
    pub diff: bool,

    /// Suppress the redaction summary.
    #[arg(long = "no-summary", help = "Suppress the redaction summary.")]
    pub no_summary: bool,
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Print the scan report as JSON to stdout.
    #[arg(long = "json", help = "Print the scan report as JSON (sample hashes only, never raw values).")]
    pub json: bool,
}

/// Arguments for the `roundtrip` command.
#[derive(Parser, Debug)]
pub struct RoundtripCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// External program and its arguments.
    #[arg(
        last = true,
        required = true,
        value_name = "COMMAND",
        help = "The external command to run, given after `--`. It receives the redacted text on stdin."
    )]
    pub command: Vec<String>,
}

fn parse_entry(s: &str) -> Result<PiiEntry, String> {
    s.parse::<PiiEntry>().map_err(|e| e.to_string())
}
