//! boxtable CLI - renders JSON rows as a box-drawing table.
//!
//! # Architecture
//!
//! - `args` - Command-line argument parsing
//! - `config` - TOML configuration file
//! - `input` - JSON input documents and cell formatting
//!
//! Settings are resolved with the command line first, then the input
//! document, then the configuration file.

pub mod args;
pub mod config;
pub mod input;

use std::io::Read;

use anyhow::{Context, Result};
use boxtable::{Alignment, Table};
use serde_json::Value;

pub use args::{Cli, LogLevel};
pub use config::Config;
pub use input::{FullDocument, TableDocument, format_value};

/// Resolves the log level filter for the subscriber.
pub fn log_filter(cli: &Cli, config: &Config) -> &'static str {
    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        cli.log_level.or(config.log_level).unwrap_or_default()
    };
    level.as_filter_str()
}

/// Reads the input document named on the command line, or stdin.
pub fn read_input(cli: &Cli) -> Result<String> {
    match cli.input_path() {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok(content)
        }
    }
}

/// Renders a JSON document according to the command line and configuration.
pub fn render_document(cli: &Cli, config: &Config, content: &str) -> Result<String> {
    let (mut rows, doc_labels, doc_centered) = TableDocument::parse(content)?.into_parts();

    let labels = if let Some(labels) = &cli.labels {
        Some(labels.iter().cloned().map(Value::String).collect())
    } else if cli.header {
        if rows.is_empty() {
            anyhow::bail!("--header needs at least one input row");
        }
        Some(rows.remove(0))
    } else {
        doc_labels
    };

    let centered = cli.centered.or(doc_centered).unwrap_or(config.centered);
    tracing::debug!(
        rows = rows.len(),
        has_labels = labels.is_some(),
        centered,
        "Rendering document"
    );

    let table = Table::with_formatter(
        rows,
        labels,
        Alignment::from_centered(centered),
        |value| format_value(value, &config.null_text),
    )
    .context("Cannot render table")?;

    Ok(table.make().into())
}

/// Runs the CLI: loads configuration, reads the input, and renders it.
pub fn run(cli: &Cli, config: &Config) -> Result<String> {
    let content = read_input(cli)?;
    render_document(cli, config, &content)
}
