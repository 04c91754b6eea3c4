//! Shuffle-based regeneration of an existing grid.
//!
//! The `preserve_clues` option selects between two permutation modes:
//! permuting whole rows keeps every row's clue line intact (the multiset
//! of row clues survives), while permuting individual cells keeps only the
//! filled-cell count.

use nonolace_core::Grid;
use rand::{RngCore, seq::SliceRandom as _};

/// Produces a shuffled variant of `grid`.
///
/// With `preserve_clues` set, whole rows are permuted; otherwise every
/// cell is permuted independently. Either way the output has the same
/// dimensions and the same number of filled cells as the input, so a
/// playable grid stays playable.
#[must_use]
pub fn shuffle_grid(grid: &Grid, preserve_clues: bool, rng: &mut dyn RngCore) -> Grid {
    if preserve_clues {
        let mut rows = grid.to_rows();
        rows.shuffle(rng);
        Grid::from_rows(&rows).expect("row permutation keeps the grid rectangular")
    } else {
        let mut cells = grid.cells().to_vec();
        cells.shuffle(rng);
        Grid::from_cells(grid.width(), grid.height(), cells)
            .expect("cell permutation keeps the buffer length")
    }
}
