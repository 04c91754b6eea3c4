//! Rectangular boolean puzzle grids.
//!
//! [`Grid`] stores a nonogram solution as a `width × height` row-major
//! boolean grid. Construction is validated so that every grid in the system
//! is rectangular and non-empty; degenerate content (all empty or all
//! filled) is a separate, non-fatal condition reported by
//! [`Grid::is_playable`] and the [`validator`](crate::validator) module.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

/// Errors from grid construction and parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// The grid has no rows or no columns.
    #[display("grid must have at least one row and one column")]
    EmptyGrid,
    /// The supplied flat cell buffer disagrees with the declared dimensions.
    #[display("expected {expected} cells for a {width}x{height} grid, got {actual}")]
    SizeMismatch {
        /// Declared grid width.
        width: usize,
        /// Declared grid height.
        height: usize,
        /// `width * height`.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
    /// A row's length differs from the first row's length.
    #[display("row {y} has {actual} cells, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        y: usize,
        /// Expected row length (the first row's length).
        expected: usize,
        /// Actual row length.
        actual: usize,
    },
    /// The text form contains a character that is not a cell.
    #[display("invalid grid character {c:?}")]
    InvalidCharacter {
        /// The offending character.
        c: char,
    },
}

/// A rectangular boolean grid in row-major order.
///
/// `true` cells are filled, `false` cells are empty. Every constructor
/// validates that the grid is rectangular with `width, height >= 1`, so a
/// `Grid` value is always structurally consistent.
///
/// # Examples
///
/// ```
/// use nonolace_core::Grid;
///
/// let grid = Grid::from_rows(&[
///     vec![true, true, false],
///     vec![false, true, false],
/// ])?;
///
/// assert_eq!(grid.width(), 3);
/// assert_eq!(grid.height(), 2);
/// assert_eq!(grid.get(1, 0), Some(true));
/// assert_eq!(grid.filled_count(), 3);
/// # Ok::<(), nonolace_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an all-empty grid of the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyGrid`] if `width` or `height` is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    /// Creates a grid from a flat row-major cell buffer.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyGrid`] if `width` or `height` is zero, and
    /// [`GridError::SizeMismatch`] if `cells.len() != width * height`.
    pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        let expected = width * height;
        if cells.len() != expected {
            return Err(GridError::SizeMismatch {
                width,
                height,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Creates a grid from a slice of rows.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyGrid`] if there are no rows or the first
    /// row is empty, and [`GridError::RaggedRow`] if any row's length
    /// differs from the first row's.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::EmptyGrid);
        };
        let width = first.len();
        if width == 0 {
            return Err(GridError::EmptyGrid);
        }
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::RaggedRow {
                    y,
                    expected: width,
                    actual: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    /// Returns the grid width (number of columns).
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height (number of rows).
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the total number of cells.
    #[must_use]
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Returns the cell at `(x, y)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Sets the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn set(&mut self, x: usize, y: usize, filled: bool) {
        assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x] = filled;
    }

    /// Returns the flat row-major cell buffer.
    #[must_use]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.width)
    }

    /// Returns an iterator over the cells of column `x`, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width`.
    pub fn column(&self, x: usize) -> impl Iterator<Item = bool> + '_ {
        assert!(x < self.width);
        (0..self.height).map(move |y| self.cells[y * self.width + x])
    }

    /// Returns the rows as owned vectors, for editing workflows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows().map(<[bool]>::to_vec).collect()
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Checks that the grid is playable: neither all empty nor all filled.
    ///
    /// Rectangularity holds by construction, so this is the only degenerate
    /// condition left to check for a typed grid. Callers that hold raw rows
    /// should use [`validator::is_valid`](crate::validator::is_valid)
    /// instead.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        let filled = self.filled_count();
        filled > 0 && filled < self.area()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                f.write_str(if cell { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parses a grid from text.
    ///
    /// `#` and `1` are filled cells; `.`, `_`, and `0` are empty cells.
    /// Lines are rows; blank lines and spaces are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for line in s.lines() {
            let mut row = Vec::new();
            for c in line.chars() {
                match c {
                    '#' | '1' => row.push(true),
                    '.' | '_' | '0' => row.push(false),
                    c if c.is_whitespace() => {}
                    c => return Err(GridError::InvalidCharacter { c }),
                }
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Self::from_rows(&rows)
    }
}
