//! Procedural nonogram grid generation.
//!
//! This crate produces solution grids for `nonolace-core` puzzles. A
//! [`PuzzleGenerator`] drives one of four [`shape`] policies, validates the
//! output, and wraps it into a [`GeneratedPuzzle`] together with the
//! [`PuzzleSeed`] that produced it, so every generation is reproducible.
//!
//! # Overview
//!
//! - [`seed`]: explicit 256-bit seeds with a hex text form, plus the
//!   seeded RNG they unfold into.
//! - [`shape`]: the [`Shape`] trait and the four shape policies
//!   (uniform random, point-symmetric, striped, clustered).
//! - [`options`]: the recognized generation options and their
//!   precondition validation.
//! - [`generator`]: the retry-and-validate driver.
//! - [`shuffle`]: clue-preserving and free regeneration of an existing
//!   grid.
//!
//! # Examples
//!
//! ```
//! use nonolace_generator::{GeneratorOptions, PuzzleGenerator, PuzzleSeed, ShapeKind};
//!
//! let options = GeneratorOptions {
//!     width: 10,
//!     height: 10,
//!     ..GeneratorOptions::default()
//! };
//! let generator = PuzzleGenerator::new(ShapeKind::Symmetric, &options)?;
//!
//! let seed = PuzzleSeed::from_text("doc example");
//! let generated = generator.generate_with_seed(seed)?;
//! assert_eq!(generated.puzzle.width(), 10);
//! assert!(generated.puzzle.grid().is_playable());
//! # Ok::<(), nonolace_generator::GeneratorError>(())
//! ```

pub mod generator;
pub mod options;
pub mod seed;
pub mod shape;
pub mod shuffle;

// Re-export commonly used types
pub use self::{
    generator::{GeneratedPuzzle, PuzzleGenerator},
    options::{GeneratorError, GeneratorOptions, MAX_DIMENSION, MIN_DIMENSION, ShapeKind},
    seed::{ParseSeedError, PuzzleSeed},
    shape::{BoxedShape, Shape},
};
