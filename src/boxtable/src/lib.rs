//! Box-drawing text tables.
//!
//! Renders a rectangular grid of values as a single multi-line string,
//! for console output or log messages:
//!
//! ```text
//! ┌──────┬───────┐
//! │ Name │ Value │
//! ├──────┼───────┤
//! │ foo  │ 1     │
//! │ bar  │ 22    │
//! └──────┴───────┘
//! ```
//!
//! Each column is as wide as its longest label or cell, plus one space of
//! padding on either side. Cells are left-aligned, or centered when asked.
//!
//! ## Usage
//!
//! ```rust
//! use boxtable::{NO_LABELS, make_table};
//!
//! let text = make_table([["Name", "Value"], ["foo", "1"]], NO_LABELS, false).unwrap();
//! assert_eq!(text.lines().count(), 4);
//!
//! let text = make_table([[1, 2], [3, 4]], Some(["x", "y"]), true).unwrap();
//! assert!(text.starts_with('┌'));
//! ```
//!
//! For more control, build a [`Table`] directly (optionally through
//! [`TableBuilder`]) and call [`Table::make`].

pub mod border;
mod builder;
mod error;
pub mod layout;
mod render;
mod table;

pub use builder::TableBuilder;
pub use error::{LineRef, TableError, TableResult};
pub use layout::Alignment;
pub use render::RenderedTable;
pub use table::Table;

use std::fmt::Display;

/// Labels argument for tables without a label row.
pub const NO_LABELS: Option<[&str; 0]> = None;

/// Renders `rows` as a box-drawing table.
///
/// # Arguments
/// * `rows` - Rows of values with a single-line [`Display`] form. All rows
///   must have the same length.
/// * `labels` - Optional column labels, one per column.
/// * `centered` - Center every cell instead of left-aligning it.
///
/// # Returns
/// The rendered lines joined by `\n`, without a trailing newline.
///
/// # Errors
/// See [`TableError`]. No output is produced when validation fails.
pub fn make_table<I, R, T, L>(rows: I, labels: Option<L>, centered: bool) -> TableResult<String>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = T>,
    T: Display,
    L: IntoIterator,
    L::Item: Display,
{
    let table = Table::new(rows, labels, Alignment::from_centered(centered))?;
    Ok(table.make().into())
}
