//! The immutable puzzle aggregate.

use derive_more::{Display, Error};

use crate::{ClueLine, Difficulty, Grid, GridError, clue};

/// Errors from puzzle accessors.
///
/// These affect only the failing call; the puzzle itself stays valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PuzzleError {
    /// A row index beyond the puzzle height.
    #[display("row index {index} out of bounds for height {height}")]
    RowOutOfBounds {
        /// The requested row index.
        index: usize,
        /// The puzzle height.
        height: usize,
    },
    /// A column index beyond the puzzle width.
    #[display("column index {index} out of bounds for width {width}")]
    ColumnOutOfBounds {
        /// The requested column index.
        index: usize,
        /// The puzzle width.
        width: usize,
    },
}

/// An immutable nonogram puzzle: a solution grid with its derived clues
/// and difficulty tier.
///
/// Clue lines and the difficulty tier are computed once at construction
/// and cached for the puzzle's lifetime; the grid cannot change afterward.
/// Any edit builds a new grid and a new `Puzzle` from it (see
/// `nonolace-game`'s editor for that workflow).
///
/// # Examples
///
/// ```
/// use nonolace_core::{Difficulty, Grid, Puzzle};
///
/// let grid: Grid = "
///     ###..#
///     .###.
///     ..#..
/// "
/// .parse()?;
///
/// let puzzle = Puzzle::new(grid.clone());
/// assert_eq!(puzzle.grid(), &grid);
/// assert_eq!(&puzzle.row_clues()[0][..], &[2, 1]);
/// assert_eq!(puzzle.difficulty(), Difficulty::Beginner);
/// # Ok::<(), nonolace_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    grid: Grid,
    row_clues: Vec<ClueLine>,
    column_clues: Vec<ClueLine>,
    difficulty: Difficulty,
}

impl Puzzle {
    /// Creates a puzzle from a solution grid, deriving clues and
    /// difficulty eagerly.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        let row_clues = clue::row_clues(&grid);
        let column_clues = clue::column_clues(&grid);
        let difficulty =
            Difficulty::from_metrics(grid.width(), grid.height(), &row_clues, &column_clues);
        Self {
            grid,
            row_clues,
            column_clues,
            difficulty,
        }
    }

    /// Creates a puzzle from a flat row-major cell buffer.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::SizeMismatch`] if `cells.len() != width *
    /// height`, and [`GridError::EmptyGrid`] for zero dimensions. On
    /// failure no puzzle is observable in an inconsistent state.
    pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Result<Self, GridError> {
        Ok(Self::new(Grid::from_cells(width, height, cells)?))
    }

    /// Creates a puzzle from a slice of rows.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RaggedRow`] if the rows are not rectangular,
    /// and [`GridError::EmptyGrid`] for an empty row set.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, GridError> {
        Ok(Self::new(Grid::from_rows(rows)?))
    }

    /// Returns the solution grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consumes the puzzle and returns its solution grid.
    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Returns the puzzle width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Returns the puzzle height.
    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Returns the difficulty tier.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns all row clue lines, top to bottom.
    #[must_use]
    pub fn row_clues(&self) -> &[ClueLine] {
        &self.row_clues
    }

    /// Returns all column clue lines, left to right.
    #[must_use]
    pub fn column_clues(&self) -> &[ClueLine] {
        &self.column_clues
    }

    /// Returns the clue line for row `y`.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::RowOutOfBounds`] if `y >= height`.
    pub fn row_clue(&self, y: usize) -> Result<&ClueLine, PuzzleError> {
        self.row_clues.get(y).ok_or(PuzzleError::RowOutOfBounds {
            index: y,
            height: self.height(),
        })
    }

    /// Returns the clue line for column `x`.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::ColumnOutOfBounds`] if `x >= width`.
    pub fn column_clue(&self, x: usize) -> Result<&ClueLine, PuzzleError> {
        self.column_clues
            .get(x)
            .ok_or(PuzzleError::ColumnOutOfBounds {
                index: x,
                width: self.width(),
            })
    }

    /// Returns the solution cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::ColumnOutOfBounds`] or
    /// [`PuzzleError::RowOutOfBounds`] for out-of-range coordinates.
    pub fn cell(&self, x: usize, y: usize) -> Result<bool, PuzzleError> {
        if x >= self.width() {
            return Err(PuzzleError::ColumnOutOfBounds {
                index: x,
                width: self.width(),
            });
        }
        if y >= self.height() {
            return Err(PuzzleError::RowOutOfBounds {
                index: y,
                height: self.height(),
            });
        }
        Ok(self.grid.get(x, y).unwrap_or_default())
    }
}
