//! Core data structures for nonogram applications.
//!
//! This crate provides the fundamental data model for representing and
//! deriving nonogram (picture-logic) puzzles. These structures are used
//! across generation and game management components.
//!
//! # Overview
//!
//! The crate is organized around a small pipeline:
//!
//! 1. **Grids** - [`grid`]: a rectangular, row-major boolean grid with
//!    validated construction and a text form for tests and tooling.
//! 2. **Clues** - [`clue`]: derivation of the per-line run-length clue
//!    sequences that describe a grid, in both the puzzle and the editor
//!    empty-line conventions.
//! 3. **Validation** - [`validator`]: checks that a grid is well formed and
//!    playable (neither all empty nor all filled).
//! 4. **Difficulty** - [`difficulty`]: an ordinal 1-5 difficulty tier
//!    derived from grid area and clue density.
//! 5. **Puzzles** - [`puzzle`]: the immutable [`Puzzle`] aggregate that
//!    combines a grid with its derived clues and difficulty.
//!
//! # Examples
//!
//! ```
//! use nonolace_core::{Grid, Puzzle};
//!
//! let grid: Grid = "
//!     ###.
//!     .#.
//!     .##
//! "
//! .parse()?;
//!
//! let puzzle = Puzzle::new(grid);
//! assert_eq!(&puzzle.row_clues()[0][..], &[2]);
//! assert_eq!(&puzzle.column_clues()[1][..], &[3]);
//! # Ok::<(), nonolace_core::GridError>(())
//! ```

pub mod clue;
pub mod difficulty;
pub mod grid;
pub mod puzzle;
pub mod validator;

// Re-export commonly used types
pub use self::{
    clue::ClueLine,
    difficulty::Difficulty,
    grid::{Grid, GridError},
    puzzle::{Puzzle, PuzzleError},
};
