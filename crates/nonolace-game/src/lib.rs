//! Game sessions and editing for nonogram puzzles.
//!
//! This crate wraps the immutable `nonolace-core` puzzle aggregate with
//! the two mutable workflows built on top of it:
//!
//! - [`Game`]: an in-progress play session over a generated puzzle, with
//!   three-state cell marking ([`CellState`]), tap-cycling, rectangle
//!   fill, and solved detection.
//! - [`PuzzleEditor`]: a mutable working grid that rebuilds a fresh
//!   [`Puzzle`](nonolace_core::Puzzle) on demand, keeping derived clues
//!   and difficulty consistent with the grid they describe.
//!
//! # Examples
//!
//! ```
//! use nonolace_game::{CellState, Game};
//! use nonolace_generator::{GeneratorOptions, PuzzleGenerator, ShapeKind};
//!
//! let generator =
//!     PuzzleGenerator::new(ShapeKind::Clustered, &GeneratorOptions::default())?;
//! let mut game = Game::new(generator.generate()?);
//!
//! game.cycle_cell(0, 0)?;
//! assert_eq!(game.mark(0, 0)?, CellState::Filled);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cell_state;
pub mod editor;
pub mod game;
pub mod play_grid;

// Re-export commonly used types
pub use self::{
    cell_state::CellState,
    editor::PuzzleEditor,
    game::Game,
    play_grid::{GameError, PlayGrid},
};
