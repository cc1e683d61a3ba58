//! Integration tests for the public rendering API.
//!
//! These check structural properties of rendered tables (line widths,
//! borders, label sections) across a handful of inputs.

use boxtable::{Alignment, NO_LABELS, Table, TableError, make_table};

fn sample_rows() -> Vec<Vec<String>> {
    vec![
        vec!["1".into(), "alpha".into(), "".into()],
        vec!["22".into(), "b".into(), "gamma ray".into()],
        vec!["333".into(), "cc".into(), "d".into()],
    ]
}

fn sample_labels() -> Vec<String> {
    vec!["#".into(), "name".into(), "comment".into()]
}

fn char_len(line: &str) -> usize {
    line.chars().count()
}

// ============================================================================
// SHAPE
// ============================================================================

mod shape {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_line_has_equal_length() {
        for centered in [false, true] {
            let text = make_table(sample_rows(), Some(sample_labels()), centered).unwrap();
            let lengths: Vec<usize> = text.lines().map(char_len).collect();

            assert!(
                lengths.windows(2).all(|pair| pair[0] == pair[1]),
                "uneven lines: {lengths:?}"
            );
        }
    }

    #[test]
    fn test_column_count_matches_input() {
        let text = make_table(sample_rows(), Some(sample_labels()), false).unwrap();

        for line in text.lines() {
            // Three columns means four vertical boundaries on every line.
            let boundaries = line
                .chars()
                .filter(|c| "│┌┐└┘┬┴├┤┼".contains(*c))
                .count();
            assert_eq!(boundaries, 4, "line {line:?}");
        }
    }

    #[test]
    fn test_padded_width_is_max_plus_two() {
        let table = Table::new(sample_rows(), Some(sample_labels()), Alignment::Left).unwrap();
        assert_eq!(table.column_widths(), &[3, 5, 9]);

        let rendered = table.make();
        let top = &rendered.lines()[0];
        let segments: Vec<usize> = top
            .trim_start_matches('┌')
            .trim_end_matches('┐')
            .split('┬')
            .map(char_len)
            .collect();
        assert_eq!(segments, vec![5, 7, 11]);
    }

    #[test]
    fn test_no_trailing_newline() {
        let text = make_table([["a"]], NO_LABELS, false).unwrap();
        assert!(!text.ends_with('\n'));
        assert_eq!(text.lines().count(), 3);
    }
}

// ============================================================================
// LABELS AND ALIGNMENT
// ============================================================================

mod sections {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_labels_add_exactly_two_lines() {
        let plain = make_table(sample_rows(), NO_LABELS, false).unwrap();
        let labelled = make_table(sample_rows(), Some(sample_labels()), false).unwrap();

        let plain: Vec<&str> = plain.lines().collect();
        let labelled: Vec<&str> = labelled.lines().collect();
        assert_eq!(labelled.len(), plain.len() + 2);

        // "comment" is wider than any cell in its column, so compare against a
        // label set that does not change widths.
        let narrow = make_table(sample_rows(), Some(["", "", ""]), false).unwrap();
        let narrow: Vec<&str> = narrow.lines().collect();
        assert_eq!(narrow[0], plain[0]);
        assert_eq!(&narrow[3..], &plain[1..]);
        assert!(narrow[2].starts_with('├') && narrow[2].ends_with('┤'));
    }

    #[test]
    fn test_centered_changes_only_interior() {
        let left = make_table(sample_rows(), Some(sample_labels()), false).unwrap();
        let center = make_table(sample_rows(), Some(sample_labels()), true).unwrap();

        assert_ne!(left, center);
        for (l, c) in left.lines().zip(center.lines()) {
            assert_eq!(char_len(l), char_len(c));
            assert_eq!(l.chars().next(), c.chars().next());
            assert_eq!(l.chars().last(), c.chars().last());
        }
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let table = Table::new(sample_rows(), Some(sample_labels()), Alignment::Center).unwrap();
        assert_eq!(table.make(), table.make());
        assert_eq!(
            make_table(sample_rows(), Some(sample_labels()), true).unwrap(),
            make_table(sample_rows(), Some(sample_labels()), true).unwrap()
        );
    }

    #[test]
    fn test_caller_data_is_untouched() {
        let rows = sample_rows();
        let labels = sample_labels();
        let _ = make_table(&rows, Some(&labels), true).unwrap();

        assert_eq!(rows, sample_rows());
        assert_eq!(labels, sample_labels());
    }
}

// ============================================================================
// SCENARIOS
// ============================================================================

mod scenarios {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_two_by_two_numbers() {
        let text = make_table(vec![vec![1, 2], vec![3, 4]], NO_LABELS, false).unwrap();
        let expected = "\
┌───┬───┐
│ 1 │ 2 │
│ 3 │ 4 │
└───┴───┘";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_labelled_single_row() {
        let table = Table::new([["a", "bb"]], Some(["X", "Y"]), Alignment::Left).unwrap();
        assert_eq!(table.column_widths(), &[1, 2]);

        let expected = "\
┌───┬────┐
│ X │ Y  │
├───┼────┤
│ a │ bb │
└───┴────┘";
        assert_eq!(table.to_string(), expected);
    }

    #[test]
    fn test_mismatched_rows() {
        let result = make_table(vec![vec![1, 2], vec![3]], NO_LABELS, false);
        assert!(matches!(result, Err(TableError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_no_rows() {
        let result = make_table(Vec::<Vec<u8>>::new(), NO_LABELS, false);
        assert_eq!(result, Err(TableError::EmptyInput));
    }

    #[test]
    fn test_single_cell_centered() {
        let text = make_table([["x"]], NO_LABELS, true).unwrap();
        assert_eq!(text, "┌───┐\n│ x │\n└───┘");

        // Odd and even leftover widths both center without error.
        let text = make_table([["x"], ["xx"], ["xxxx"]], NO_LABELS, true).unwrap();
        let expected = "\
┌──────┐
│  x   │
│  xx  │
│ xxxx │
└──────┘";
        assert_eq!(text, expected);
    }
}
