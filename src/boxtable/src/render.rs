//! Line assembly for rendered tables.

use std::fmt;

use super::border::{self, Rule};
use super::layout::{Alignment, align_text, text_width};

/// Padding on each side of cell content
pub(crate) const CELL_PADDING: usize = 1;

/// The finished lines of a table, top border first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    lines: Vec<String>,
}

impl RenderedTable {
    pub(crate) fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Returns the rendered lines in display order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consumes the table, returning its lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Character count shared by every line.
    pub fn line_width(&self) -> usize {
        self.lines.first().map(|line| text_width(line)).unwrap_or(0)
    }
}

impl fmt::Display for RenderedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

impl From<RenderedTable> for String {
    fn from(table: RenderedTable) -> Self {
        table.to_string()
    }
}

/// Renders a solid border line such as `┌─────┬────┐`.
///
/// # Arguments
/// * `widths` - Column widths (content only, excluding padding)
/// * `rule` - Which border line to draw
pub(crate) fn horizontal_rule(widths: &[usize], rule: Rule) -> String {
    let (left, mid, right) = rule.glyphs();

    let segments: Vec<String> = widths
        .iter()
        .map(|&width| {
            std::iter::repeat_n(border::HORIZONTAL, width + 2 * CELL_PADDING).collect()
        })
        .collect();

    format!("{}{}{}", left, segments.join(mid.to_string().as_str()), right)
}

/// Renders a line of cells such as `│ a   │ bb │`.
///
/// # Arguments
/// * `cells` - Stringified cells, one per column
/// * `widths` - Column widths
/// * `alignment` - Alignment for every cell
pub(crate) fn content_row(cells: &[String], widths: &[usize], alignment: Alignment) -> String {
    let padding = " ".repeat(CELL_PADDING);

    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| {
            format!("{}{}{}", padding, align_text(cell, width, alignment), padding)
        })
        .collect();

    format!(
        "{}{}{}",
        border::VERTICAL,
        padded.join(border::VERTICAL.to_string().as_str()),
        border::VERTICAL
    )
}
