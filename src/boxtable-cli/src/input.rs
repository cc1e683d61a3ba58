//! JSON input documents.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

/// A table read from JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TableDocument {
    /// `[[1, 2], [3, 4]]`
    Grid(Vec<Vec<Value>>),
    /// `{"rows": [[1, 2]], "labels": ["a", "b"], "centered": true}`
    Full(FullDocument),
}

/// The object form of [`TableDocument`].
///
/// Unknown keys are rejected so a misspelled `labels` or `centered` does not
/// silently fall back to the default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FullDocument {
    pub rows: Vec<Vec<Value>>,
    #[serde(default)]
    pub labels: Option<Vec<Value>>,
    #[serde(default)]
    pub centered: Option<bool>,
}

impl TableDocument {
    /// Parses a document from JSON text.
    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .context("Expected an array of rows or an object with a `rows` field")
    }

    /// Splits the document into rows, labels, and its `centered` setting.
    pub fn into_parts(self) -> (Vec<Vec<Value>>, Option<Vec<Value>>, Option<bool>) {
        match self {
            TableDocument::Grid(rows) => (rows, None, None),
            TableDocument::Full(FullDocument {
                rows,
                labels,
                centered,
            }) => (rows, labels, centered),
        }
    }
}

/// Converts a JSON value to cell text.
///
/// Strings are shown without quotes and `null` as `null_text`. Arrays and
/// objects have no single-line form and yield `None`.
pub fn format_value(value: &Value, null_text: &str) -> Option<String> {
    match value {
        Value::Null => Some(null_text.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => None,
    }
}
