//! Play sessions.

use nonolace_core::{Puzzle, clue};
use nonolace_generator::{GeneratedPuzzle, PuzzleSeed};

use crate::{CellState, GameError, PlayGrid};

/// A nonogram play session.
///
/// Holds the immutable puzzle and the player's mark grid. Marks are the
/// only mutable state; the puzzle, its clues, and its difficulty never
/// change during play.
///
/// # Example
///
/// ```
/// use nonolace_game::Game;
/// use nonolace_generator::{GeneratorOptions, PuzzleGenerator, ShapeKind};
///
/// let generator =
///     PuzzleGenerator::new(ShapeKind::Symmetric, &GeneratorOptions::default())?;
/// let game = Game::new(generator.generate()?);
///
/// assert!(!game.is_solved()); // Newly created game is not solved
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    puzzle: Puzzle,
    seed: Option<PuzzleSeed>,
    marks: PlayGrid,
}

impl Game {
    /// Creates a new game from a generated puzzle, keeping its seed for
    /// replay.
    #[must_use]
    pub fn new(generated: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle { puzzle, seed } = generated;
        let marks = PlayGrid::new(puzzle.width(), puzzle.height());
        Self {
            puzzle,
            seed: Some(seed),
            marks,
        }
    }

    /// Creates a game over a puzzle without seed provenance (for example
    /// one built by the editor).
    #[must_use]
    pub fn with_puzzle(puzzle: Puzzle) -> Self {
        let marks = PlayGrid::new(puzzle.width(), puzzle.height());
        Self {
            puzzle,
            seed: None,
            marks,
        }
    }

    /// Returns the puzzle being played.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Returns the generation seed, if the puzzle came from the
    /// generator.
    #[must_use]
    pub fn seed(&self) -> Option<PuzzleSeed> {
        self.seed
    }

    /// Returns the player's mark grid.
    #[must_use]
    pub fn marks(&self) -> &PlayGrid {
        &self.marks
    }

    /// Returns the mark at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] for coordinates outside the
    /// puzzle.
    pub fn mark(&self, x: usize, y: usize) -> Result<CellState, GameError> {
        self.marks.get(x, y)
    }

    /// Advances the mark at `(x, y)` one step in the tap cycle and
    /// returns the new state.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] for coordinates outside the
    /// puzzle.
    pub fn cycle_cell(&mut self, x: usize, y: usize) -> Result<CellState, GameError> {
        self.marks.cycle(x, y)
    }

    /// Sets the mark at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] for coordinates outside the
    /// puzzle.
    pub fn set_cell(&mut self, x: usize, y: usize, state: CellState) -> Result<(), GameError> {
        self.marks.set(x, y, state)
    }

    /// Applies the drag-to-fill gesture: sets every mark in the rectangle
    /// spanned by two corner cells.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if either corner lies outside
    /// the puzzle; no mark changes in that case.
    pub fn fill_rect(
        &mut self,
        a: (usize, usize),
        b: (usize, usize),
        state: CellState,
    ) -> Result<(), GameError> {
        self.marks.fill_rect(a, b, state)
    }

    /// Resets all marks.
    pub fn clear(&mut self) {
        self.marks.clear();
    }

    /// Checks if the game is solved.
    ///
    /// The filled marks must satisfy every row and column clue; crossed
    /// and unmarked cells both count as empty. This accepts any filling
    /// that matches the clues, not only the generator's solution, which
    /// handles puzzles with multiple solutions correctly.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let row_match = (0..self.puzzle.height()).all(|y| {
            clue::line_clues(self.marks.filled_row(y)) == self.puzzle.row_clues()[y]
        });
        row_match
            && (0..self.puzzle.width()).all(|x| {
                clue::line_clues(self.marks.filled_column(x)) == self.puzzle.column_clues()[x]
            })
    }
}
