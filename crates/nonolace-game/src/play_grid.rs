//! The mutable grid of play-state marks.

use derive_more::{Display, Error};

use crate::CellState;

/// Errors from play and edit operations.
///
/// A failed edit affects only that call; the grid keeps its previous
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// A cell coordinate outside the grid.
    #[display("cell ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },
    /// An editor dimension outside the supported range.
    #[display("dimension {value} out of supported editing range")]
    InvalidDimension {
        /// The rejected dimension.
        value: usize,
    },
}

/// A `width × height` grid of player marks, row-major.
///
/// All edits are bounds-checked and return [`GameError::OutOfBounds`]
/// rather than panicking, since coordinates arrive from interactive
/// input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayGrid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl PlayGrid {
    /// Creates an all-empty mark grid.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero. Callers size the grid from
    /// an existing puzzle, whose dimensions are positive by construction.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "mark grid dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![CellState::Empty; width * height],
        }
    }

    /// Returns the grid width.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, GameError> {
        if x < self.width && y < self.height {
            Ok(y * self.width + x)
        } else {
            Err(GameError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Returns the mark at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] for coordinates outside the
    /// grid.
    pub fn get(&self, x: usize, y: usize) -> Result<CellState, GameError> {
        Ok(self.cells[self.index(x, y)?])
    }

    /// Sets the mark at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] for coordinates outside the
    /// grid.
    pub fn set(&mut self, x: usize, y: usize, state: CellState) -> Result<(), GameError> {
        let index = self.index(x, y)?;
        self.cells[index] = state;
        Ok(())
    }

    /// Advances the mark at `(x, y)` one step in the tap cycle and
    /// returns the new state.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] for coordinates outside the
    /// grid.
    pub fn cycle(&mut self, x: usize, y: usize) -> Result<CellState, GameError> {
        let index = self.index(x, y)?;
        let next = self.cells[index].cycled();
        self.cells[index] = next;
        Ok(next)
    }

    /// Sets every mark in the rectangle spanned by two corner cells.
    ///
    /// The corners may be given in any order; both are inclusive. This is
    /// the drag-to-fill gesture's edit shape.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if either corner lies outside
    /// the grid; no cell is modified in that case.
    pub fn fill_rect(
        &mut self,
        a: (usize, usize),
        b: (usize, usize),
        state: CellState,
    ) -> Result<(), GameError> {
        self.index(a.0, a.1)?;
        self.index(b.0, b.1)?;
        let (x0, x1) = (a.0.min(b.0), a.0.max(b.0));
        let (y0, y1) = (a.1.min(b.1), a.1.max(b.1));
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.cells[y * self.width + x] = state;
            }
        }
        Ok(())
    }

    /// Resets every mark to [`CellState::Empty`].
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
    }

    /// Returns row `y` as booleans, `true` where the mark is
    /// [`CellState::Filled`].
    ///
    /// Crossed cells count as empty.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[must_use]
    pub fn filled_row(&self, y: usize) -> Vec<bool> {
        assert!(y < self.height);
        (0..self.width)
            .map(|x| self.cells[y * self.width + x].is_filled())
            .collect()
    }

    /// Returns an iterator over column `x`, `true` where the mark is
    /// [`CellState::Filled`].
    ///
    /// # Panics
    ///
    /// Panics if `x >= width`.
    pub fn filled_column(&self, x: usize) -> impl Iterator<Item = bool> + '_ {
        assert!(x < self.width);
        (0..self.height).map(move |y| self.cells[y * self.width + x].is_filled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let grid = PlayGrid::new(4, 3);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(grid.get(x, y), Ok(CellState::Empty));
            }
        }
    }

    #[test]
    fn test_set_and_cycle() {
        let mut grid = PlayGrid::new(3, 3);
        grid.set(1, 1, CellState::Crossed).unwrap();
        assert_eq!(grid.get(1, 1), Ok(CellState::Crossed));
        assert_eq!(grid.cycle(1, 1), Ok(CellState::Empty));
        assert_eq!(grid.cycle(1, 1), Ok(CellState::Filled));
    }

    #[test]
    fn test_out_of_bounds_edits_fail() {
        let mut grid = PlayGrid::new(3, 3);
        let err = GameError::OutOfBounds {
            x: 3,
            y: 0,
            width: 3,
            height: 3,
        };
        assert_eq!(grid.get(3, 0), Err(err));
        assert_eq!(grid.set(3, 0, CellState::Filled), Err(err));
        assert_eq!(grid.cycle(3, 0), Err(err));
    }

    #[test]
    fn test_fill_rect_normalizes_corners() {
        let mut grid = PlayGrid::new(5, 5);
        grid.fill_rect((3, 4), (1, 2), CellState::Filled).unwrap();
        for y in 0..5 {
            for x in 0..5 {
                let expected = (1..=3).contains(&x) && (2..=4).contains(&y);
                assert_eq!(grid.get(x, y).unwrap().is_filled(), expected, "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_fill_rect_out_of_bounds_changes_nothing() {
        let mut grid = PlayGrid::new(3, 3);
        let result = grid.fill_rect((0, 0), (3, 1), CellState::Filled);
        assert!(result.is_err());
        assert_eq!(grid, PlayGrid::new(3, 3));
    }

    #[test]
    fn test_filled_projections() {
        let mut grid = PlayGrid::new(3, 2);
        grid.set(0, 0, CellState::Filled).unwrap();
        grid.set(1, 0, CellState::Crossed).unwrap();
        grid.set(2, 1, CellState::Filled).unwrap();
        assert_eq!(grid.filled_row(0), [true, false, false]);
        assert_eq!(grid.filled_column(2).collect::<Vec<_>>(), [false, true]);
    }

    #[test]
    fn test_clear() {
        let mut grid = PlayGrid::new(2, 2);
        grid.fill_rect((0, 0), (1, 1), CellState::Filled).unwrap();
        grid.clear();
        assert_eq!(grid, PlayGrid::new(2, 2));
    }
}
