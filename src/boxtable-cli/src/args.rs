//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;

/// Log level for CLI output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors (default)
    #[default]
    Warn,
    /// Show informational messages, warnings, and errors
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Render JSON rows as a box-drawing table.
///
/// INPUT is either an array of arrays (`[[1, 2], [3, 4]]`) or an object
/// with `rows` and optional `labels` and `centered` fields.
#[derive(Debug, Parser)]
#[command(name = "boxtable", version, about, long_about = None)]
pub struct Cli {
    /// JSON document to read; `-` or nothing reads stdin
    pub input: Option<PathBuf>,

    /// Comma-separated column labels (overrides labels in the document)
    #[arg(long, value_delimiter = ',', conflicts_with = "header")]
    pub labels: Option<Vec<String>>,

    /// Use the first input row as column labels
    #[arg(long)]
    pub header: bool,

    /// Center every cell (`--centered=false` forces left alignment)
    #[arg(
        long,
        env = "BOXTABLE_CENTERED",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub centered: Option<bool>,

    /// TOML configuration file
    #[arg(long, env = "BOXTABLE_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level for messages written to stderr
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose output (same as --log-level debug)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Returns the input path, or `None` when reading stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|path| path.as_os_str() != "-")
    }
}
