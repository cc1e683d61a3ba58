//! Configuration file support.
//!
//! The file is TOML with every key optional:
//!
//! ```toml
//! centered = true
//! null_text = "-"
//! log_level = "debug"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::args::LogLevel;

/// Settings loaded from the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Center cells unless the document or command line says otherwise.
    pub centered: bool,
    /// Text shown for JSON `null` cells.
    pub null_text: String,
    /// Log level used when none is given on the command line.
    pub log_level: Option<LogLevel>,
}

impl Config {
    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid configuration")
    }

    /// Loads the configuration file, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Failed to load config file {}", path.display()))?;

        tracing::debug!(path = %path.display(), ?config, "Loaded configuration");
        Ok(config)
    }
}
