//! Puzzle editing.
//!
//! The editor holds a mutable working grid and rebuilds a fresh, fully
//! derived [`Puzzle`] when asked. Clues and difficulty are never patched
//! incrementally; reconstruction keeps them consistent with the grid by
//! construction.

use nonolace_core::{ClueLine, Grid, GridError, Puzzle, clue, validator};
use nonolace_generator::MAX_DIMENSION;

use crate::GameError;

/// A mutable puzzle-in-progress.
///
/// The live clue views use the editor convention: an all-empty line shows
/// the clue `[0]` rather than no clue, so the display always has one
/// number per line.
///
/// # Examples
///
/// ```
/// use nonolace_game::PuzzleEditor;
///
/// let mut editor = PuzzleEditor::blank(3, 2)?;
/// assert_eq!(&editor.row_clues()[0][..], &[0]);
///
/// editor.set(0, 0, true)?;
/// editor.set(1, 0, true)?;
/// assert_eq!(&editor.row_clues()[0][..], &[2]);
///
/// let puzzle = editor.build()?;
/// assert!(puzzle.row_clues()[1].is_empty());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleEditor {
    rows: Vec<Vec<bool>>,
}

impl PuzzleEditor {
    /// Creates an all-empty working grid.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDimension`] if a dimension is zero or
    /// exceeds the supported editing range.
    pub fn blank(width: usize, height: usize) -> Result<Self, GameError> {
        for value in [width, height] {
            if value == 0 || value > MAX_DIMENSION {
                return Err(GameError::InvalidDimension { value });
            }
        }
        Ok(Self {
            rows: vec![vec![false; width]; height],
        })
    }

    /// Creates a working grid seeded from an existing puzzle.
    #[must_use]
    pub fn from_puzzle(puzzle: &Puzzle) -> Self {
        Self {
            rows: puzzle.grid().to_rows(),
        }
    }

    /// Returns the working grid width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Returns the working grid height.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), GameError> {
        if x < self.width() && y < self.height() {
            Ok(())
        } else {
            Err(GameError::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            })
        }
    }

    /// Returns the cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] for coordinates outside the
    /// working grid.
    pub fn get(&self, x: usize, y: usize) -> Result<bool, GameError> {
        self.check_bounds(x, y)?;
        Ok(self.rows[y][x])
    }

    /// Sets the cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] for coordinates outside the
    /// working grid.
    pub fn set(&mut self, x: usize, y: usize, filled: bool) -> Result<(), GameError> {
        self.check_bounds(x, y)?;
        self.rows[y][x] = filled;
        Ok(())
    }

    /// Toggles the cell at `(x, y)` and returns its new value.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] for coordinates outside the
    /// working grid.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool, GameError> {
        self.check_bounds(x, y)?;
        self.rows[y][x] = !self.rows[y][x];
        Ok(self.rows[y][x])
    }

    /// Returns the live row clues in the editor convention (`[0]` for
    /// empty lines), top to bottom.
    #[must_use]
    pub fn row_clues(&self) -> Vec<ClueLine> {
        self.rows
            .iter()
            .map(|row| clue::editor_line_clues(row.iter().copied()))
            .collect()
    }

    /// Returns the live column clues in the editor convention, left to
    /// right.
    #[must_use]
    pub fn column_clues(&self) -> Vec<ClueLine> {
        (0..self.width())
            .map(|x| clue::editor_line_clues(self.rows.iter().map(|row| row[x])))
            .collect()
    }

    /// Checks whether the working grid would make a playable puzzle.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        validator::is_valid(&self.rows)
    }

    /// Builds a fresh puzzle from the working grid, deriving clues and
    /// difficulty anew.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if the working grid cannot form a grid;
    /// with an editor created through [`PuzzleEditor::blank`] or
    /// [`PuzzleEditor::from_puzzle`] this does not occur.
    pub fn build(&self) -> Result<Puzzle, GridError> {
        Ok(Puzzle::new(Grid::from_rows(&self.rows)?))
    }
}

#[cfg(test)]
mod tests {
    use nonolace_core::Difficulty;

    use super::*;

    #[test]
    fn test_blank_bounds() {
        assert!(PuzzleEditor::blank(1, 1).is_ok());
        assert!(PuzzleEditor::blank(50, 50).is_ok());
        assert_eq!(
            PuzzleEditor::blank(0, 5).err(),
            Some(GameError::InvalidDimension { value: 0 })
        );
        assert_eq!(
            PuzzleEditor::blank(5, 51).err(),
            Some(GameError::InvalidDimension { value: 51 })
        );
    }

    #[test]
    fn test_editor_clue_convention() {
        let mut editor = PuzzleEditor::blank(4, 2).unwrap();
        assert_eq!(&editor.row_clues()[0][..], &[0]);
        assert_eq!(&editor.column_clues()[3][..], &[0]);

        editor.set(0, 0, true).unwrap();
        editor.set(1, 0, true).unwrap();
        editor.set(3, 0, true).unwrap();
        assert_eq!(&editor.row_clues()[0][..], &[2, 1]);
        // The untouched row still shows the zero clue.
        assert_eq!(&editor.row_clues()[1][..], &[0]);
    }

    #[test]
    fn test_build_uses_puzzle_convention() {
        let mut editor = PuzzleEditor::blank(3, 2).unwrap();
        editor.set(1, 1, true).unwrap();
        let puzzle = editor.build().unwrap();
        // Empty first row: empty clue line in the aggregate, not [0].
        assert!(puzzle.row_clues()[0].is_empty());
        assert_eq!(&puzzle.row_clues()[1][..], &[1]);
    }

    #[test]
    fn test_edit_then_rebuild_round_trip() {
        let original = Puzzle::new("##.\n.#.\n..#".parse().unwrap());
        let mut editor = PuzzleEditor::from_puzzle(&original);
        assert_eq!(editor.build().unwrap(), original);

        assert_eq!(editor.toggle(2, 0), Ok(true));
        let edited = editor.build().unwrap();
        assert_ne!(edited, original);
        assert_eq!(&edited.row_clues()[0][..], &[3]);
        // The original puzzle is untouched.
        assert_eq!(&original.row_clues()[0][..], &[2]);
    }

    #[test]
    fn test_validity_tracks_content() {
        let mut editor = PuzzleEditor::blank(2, 2).unwrap();
        assert!(!editor.is_valid());
        editor.set(0, 0, true).unwrap();
        assert!(editor.is_valid());
        for y in 0..2 {
            for x in 0..2 {
                editor.set(x, y, true).unwrap();
            }
        }
        assert!(!editor.is_valid());
    }

    #[test]
    fn test_difficulty_recomputed_on_build() {
        let mut editor = PuzzleEditor::blank(3, 3).unwrap();
        editor.set(1, 1, true).unwrap();
        assert_eq!(editor.build().unwrap().difficulty(), Difficulty::Beginner);
    }
}
