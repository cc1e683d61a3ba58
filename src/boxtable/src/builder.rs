//! Table builder for incremental table construction.
//!
//! Useful when rows arrive one at a time, e.g. while walking a collection.

use std::fmt::Display;

use super::error::TableResult;
use super::layout::Alignment;
use super::table::Table;

/// Builder for constructing tables incrementally.
///
/// Cells are converted to text as they are added. Shape checks happen in
/// [`TableBuilder::build`], so a builder can be filled in any order.
#[derive(Debug, Default)]
pub struct TableBuilder {
    labels: Option<Vec<String>>,
    rows: Vec<Vec<String>>,
    alignment: Alignment,
}

impl TableBuilder {
    /// Creates a new empty table builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the column labels, replacing any set earlier.
    pub fn set_labels<I>(&mut self, labels: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.labels = Some(labels.into_iter().map(|label| label.to_string()).collect());
        self
    }

    /// Appends a data row.
    pub fn add_row<I>(&mut self, row: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.rows
            .push(row.into_iter().map(|cell| cell.to_string()).collect());
        self
    }

    /// Sets the alignment used for every cell.
    pub fn set_alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.alignment = alignment;
        self
    }

    /// Shorthand for `set_alignment(Alignment::from_centered(centered))`.
    pub fn set_centered(&mut self, centered: bool) -> &mut Self {
        self.set_alignment(Alignment::from_centered(centered))
    }

    /// Returns the number of rows added so far.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Builds the final table.
    ///
    /// # Errors
    /// Same as [`Table::new`].
    pub fn build(self) -> TableResult<Table> {
        Table::new(self.rows, self.labels, self.alignment)
    }
}
