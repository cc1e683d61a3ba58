//! The table type: validated, stringified content plus its width table.

use std::fmt;

use super::border::Rule;
use super::error::{LineRef, TableError, TableResult};
use super::layout::{Alignment, column_widths};
use super::render::{RenderedTable, content_row, horizontal_rule};

/// A table ready to be rendered.
///
/// Construction validates the input, converts every cell to text once and
/// computes the column widths. The table cannot be changed afterwards; build
/// a new one for new content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
    /// One entry per column. Empty strings when `has_labels` is false.
    labels: Vec<String>,
    has_labels: bool,
    alignment: Alignment,
    column_widths: Vec<usize>,
}

impl Table {
    /// Creates a table from values with a [`Display`](fmt::Display) form.
    ///
    /// A value whose text contains a line break is rejected with
    /// [`TableError::UnrepresentableValue`].
    ///
    /// # Errors
    /// * [`TableError::EmptyInput`] if `rows` is empty
    /// * [`TableError::ShapeMismatch`] if a row or the labels differ in length
    ///   from the first row
    pub fn new<I, R, T, L>(rows: I, labels: Option<L>, alignment: Alignment) -> TableResult<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
        T: fmt::Display,
        L: IntoIterator,
        L::Item: fmt::Display,
    {
        let rows = collect_grid(rows);
        let labels: Option<Vec<L::Item>> = labels.map(|labels| labels.into_iter().collect());
        check_shape(&rows, labels.as_deref())?;

        let rows = stringify_rows(&rows, |value| Some(value.to_string()))?;
        let labels = labels
            .map(|labels| stringify_line(&labels, LineRef::Labels, |value| Some(value.to_string())))
            .transpose()?;

        Ok(Self::from_text(rows, labels, alignment))
    }

    /// Creates a table, converting each cell with `format`.
    ///
    /// `format` returning `None` marks the value as having no text form and
    /// fails with [`TableError::UnrepresentableValue`]. The other errors are
    /// the same as for [`Table::new`].
    pub fn with_formatter<I, R, T, L, F>(
        rows: I,
        labels: Option<L>,
        alignment: Alignment,
        format: F,
    ) -> TableResult<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
        L: IntoIterator<Item = T>,
        F: Fn(&T) -> Option<String>,
    {
        let rows = collect_grid(rows);
        let labels: Option<Vec<T>> = labels.map(|labels| labels.into_iter().collect());
        check_shape(&rows, labels.as_deref())?;

        let rows = stringify_rows(&rows, &format)?;
        let labels = labels
            .map(|labels| stringify_line(&labels, LineRef::Labels, &format))
            .transpose()?;

        Ok(Self::from_text(rows, labels, alignment))
    }

    /// Builds the table from already validated text.
    fn from_text(rows: Vec<Vec<String>>, labels: Option<Vec<String>>, alignment: Alignment) -> Self {
        let num_cols = rows.first().map(Vec::len).unwrap_or(0);
        let has_labels = labels.is_some();
        let labels = labels.unwrap_or_else(|| vec![String::new(); num_cols]);
        let column_widths = column_widths(&labels, &rows);

        tracing::debug!(
            rows = rows.len(),
            columns = num_cols,
            has_labels,
            ?alignment,
            "Laid out table"
        );
        tracing::trace!(?column_widths, "Column widths");

        Self {
            rows,
            labels,
            has_labels,
            alignment,
            column_widths,
        }
    }

    /// Returns the stringified data rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns the stringified labels, if the table has a label row.
    pub fn labels(&self) -> Option<&[String]> {
        self.has_labels.then_some(self.labels.as_slice())
    }

    /// Returns true if a label row and header separator will be emitted.
    #[inline]
    pub fn has_labels(&self) -> bool {
        self.has_labels
    }

    /// Returns the content width of each column, excluding padding.
    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    /// Returns the number of columns in the table.
    #[inline]
    pub fn num_columns(&self) -> usize {
        self.column_widths.len()
    }

    /// Returns the number of data rows.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns the alignment applied to every label and data cell.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Renders the table.
    ///
    /// Lines are emitted as: top border, label row and header separator (only
    /// with labels), one line per data row, bottom border.
    pub fn make(&self) -> RenderedTable {
        let widths = &self.column_widths;
        let mut lines = Vec::with_capacity(self.rows.len() + 4);

        // Top border: ┌──────┬──────┐
        lines.push(horizontal_rule(widths, Rule::Top));

        if self.has_labels {
            lines.push(content_row(&self.labels, widths, self.alignment));
            // Header separator: ├──────┼──────┤
            lines.push(horizontal_rule(widths, Rule::HeaderSeparator));
        }

        for row in &self.rows {
            lines.push(content_row(row, widths, self.alignment));
        }

        // Bottom border: └──────┴──────┘
        lines.push(horizontal_rule(widths, Rule::Bottom));

        RenderedTable::new(lines)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.make(), f)
    }
}

fn collect_grid<I, R, T>(rows: I) -> Vec<Vec<T>>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = T>,
{
    rows.into_iter()
        .map(|row| row.into_iter().collect())
        .collect()
}

/// Checks that the input is non-empty and rectangular.
///
/// The first row sets the column count every other line must match.
fn check_shape<T, U>(rows: &[Vec<T>], labels: Option<&[U]>) -> TableResult<()> {
    let Some(first) = rows.first() else {
        return Err(TableError::EmptyInput);
    };
    let expected = first.len();

    if let Some((index, row)) = rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != expected)
    {
        return Err(TableError::ShapeMismatch {
            line: LineRef::Row(index),
            expected,
            found: row.len(),
        });
    }

    if let Some(labels) = labels
        && labels.len() != expected
    {
        return Err(TableError::ShapeMismatch {
            line: LineRef::Labels,
            expected,
            found: labels.len(),
        });
    }

    Ok(())
}

fn stringify_rows<T, F>(rows: &[Vec<T>], format: F) -> TableResult<Vec<Vec<String>>>
where
    F: Fn(&T) -> Option<String>,
{
    rows.iter()
        .enumerate()
        .map(|(index, row)| stringify_line(row, LineRef::Row(index), &format))
        .collect()
}

fn stringify_line<T, F>(cells: &[T], line: LineRef, format: F) -> TableResult<Vec<String>>
where
    F: Fn(&T) -> Option<String>,
{
    cells
        .iter()
        .enumerate()
        .map(|(column, value)| {
            let text = format(value)
                .ok_or_else(|| TableError::unrepresentable(line, column, "no text conversion"))?;
            if text.contains(['\n', '\r']) {
                return Err(TableError::unrepresentable(
                    line,
                    column,
                    "text spans more than one line",
                ));
            }
            Ok(text)
        })
        .collect()
}
