//! Column measurement and cell alignment.

/// Alignment applied uniformly to every label and data cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Left-align content (default)
    #[default]
    Left,
    /// Center content; an odd leftover column goes to the right side
    Center,
}

impl Alignment {
    /// Maps the `centered` flag of [`make_table`](crate::make_table) to an alignment.
    pub fn from_centered(centered: bool) -> Self {
        if centered {
            Alignment::Center
        } else {
            Alignment::Left
        }
    }
}

/// Length of `text` in characters.
///
/// Counts Unicode scalar values; wide and combining characters are not
/// treated specially.
#[inline]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Computes the content width of every column.
///
/// `labels` doubles as the seed of the fold, so it must hold one entry per
/// column even when the table has no label row (use empty strings).
pub fn column_widths(labels: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let seed: Vec<usize> = labels.iter().map(|label| text_width(label)).collect();

    rows.iter().fold(seed, |mut widths, row| {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(text_width(cell));
        }
        widths
    })
}

/// Pads `text` to exactly `width` characters.
///
/// Text already at or beyond `width` is returned unchanged.
pub fn align_text(text: &str, width: usize, alignment: Alignment) -> String {
    let text_width = text_width(text);

    if text_width >= width {
        return text.to_string();
    }

    let padding = width - text_width;

    match alignment {
        Alignment::Left => {
            format!("{}{}", text, " ".repeat(padding))
        }
        Alignment::Center => {
            let left_pad = padding / 2;
            let right_pad = padding - left_pad;
            format!("{}{}{}", " ".repeat(left_pad), text, " ".repeat(right_pad))
        }
    }
}
