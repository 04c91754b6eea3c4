//! Clue derivation.
//!
//! A nonogram clue line lists the lengths of the maximal runs of filled
//! cells in one row or column, in reading order. Clue lines are short (at
//! most `(len + 1) / 2` entries), so they are stored inline in a
//! [`TinyVec`].
//!
//! Two empty-line conventions exist side by side and both are kept, because
//! different consumers rely on each:
//!
//! - [`line_clues`] returns an empty clue line for an all-empty line. The
//!   [`Puzzle`](crate::Puzzle) aggregate uses this form.
//! - [`editor_line_clues`] returns the singleton `[0]` for an all-empty
//!   line. The editor's live clue display uses this form.

use tinyvec::TinyVec;

use crate::Grid;

/// The clue sequence for a single row or column.
pub type ClueLine = TinyVec<[usize; 8]>;

/// Derives the clue line for one line of cells, scanning in order.
///
/// An all-empty line yields an empty clue line. See [`editor_line_clues`]
/// for the `[0]` convention.
///
/// # Examples
///
/// ```
/// use nonolace_core::clue::line_clues;
///
/// let clues = line_clues([true, true, false, true]);
/// assert_eq!(&clues[..], &[2, 1]);
///
/// let clues = line_clues([false, false]);
/// assert!(clues.is_empty());
/// ```
pub fn line_clues<I>(line: I) -> ClueLine
where
    I: IntoIterator<Item = bool>,
{
    let mut clues = ClueLine::new();
    let mut run = 0;
    for filled in line {
        if filled {
            run += 1;
        } else if run > 0 {
            clues.push(run);
            run = 0;
        }
    }
    if run > 0 {
        clues.push(run);
    }
    clues
}

/// Derives the clue line for one line of cells, in the editor convention.
///
/// Identical to [`line_clues`] except that an all-empty line yields the
/// singleton `[0]` rather than an empty clue line.
///
/// # Examples
///
/// ```
/// use nonolace_core::clue::editor_line_clues;
///
/// let clues = editor_line_clues([false, false]);
/// assert_eq!(&clues[..], &[0]);
/// ```
pub fn editor_line_clues<I>(line: I) -> ClueLine
where
    I: IntoIterator<Item = bool>,
{
    let mut clues = line_clues(line);
    if clues.is_empty() {
        clues.push(0);
    }
    clues
}

/// Derives the clue lines for every row of a grid, top to bottom.
#[must_use]
pub fn row_clues(grid: &Grid) -> Vec<ClueLine> {
    grid.rows()
        .map(|row| line_clues(row.iter().copied()))
        .collect()
}

/// Derives the clue lines for every column of a grid, left to right.
#[must_use]
pub fn column_clues(grid: &Grid) -> Vec<ClueLine> {
    (0..grid.width()).map(|x| line_clues(grid.column(x))).collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_line_clues_basic() {
        assert_eq!(&line_clues([true, true, false, true])[..], &[2, 1]);
        assert_eq!(&line_clues([true; 5])[..], &[5]);
        assert_eq!(&line_clues([false, true, true, false])[..], &[2]);
        assert!(line_clues([false, false]).is_empty());
        assert!(line_clues([]).is_empty());
    }

    #[test]
    fn test_editor_line_clues_empty_line_is_zero() {
        assert_eq!(&editor_line_clues([false, false])[..], &[0]);
        assert_eq!(&editor_line_clues([])[..], &[0]);
        // Non-empty lines match the puzzle convention.
        assert_eq!(&editor_line_clues([true, false, true])[..], &[1, 1]);
    }

    #[test]
    fn test_grid_clues() {
        let grid: Grid = "
            ##.#
            ....
            .###
        "
        .parse()
        .unwrap();
        let rows = row_clues(&grid);
        assert_eq!(&rows[0][..], &[2, 1]);
        assert!(rows[1].is_empty());
        assert_eq!(&rows[2][..], &[3]);

        let columns = column_clues(&grid);
        assert_eq!(&columns[0][..], &[1]);
        assert_eq!(&columns[1][..], &[1, 1]);
        assert_eq!(&columns[2][..], &[1]);
        assert_eq!(&columns[3][..], &[1, 1]);
    }

    proptest! {
        /// Clues plus the mandatory single-cell gaps always fit the line.
        #[test]
        fn clue_sum_fits_line(line in prop::collection::vec(any::<bool>(), 0..64)) {
            let clues = line_clues(line.iter().copied());
            if !clues.is_empty() {
                let sum: usize = clues.iter().sum();
                prop_assert!(sum + clues.len() - 1 <= line.len());
            }
        }

        /// Clue derivation is a pure function of the line.
        #[test]
        fn derivation_is_deterministic(line in prop::collection::vec(any::<bool>(), 0..64)) {
            let first = line_clues(line.iter().copied());
            let second = line_clues(line.iter().copied());
            prop_assert_eq!(first, second);
        }

        /// Every clue is a positive run length in the puzzle convention.
        #[test]
        fn clues_are_positive(line in prop::collection::vec(any::<bool>(), 0..64)) {
            let clues = line_clues(line.iter().copied());
            prop_assert!(clues.iter().all(|&clue| clue > 0));
        }
    }
}
