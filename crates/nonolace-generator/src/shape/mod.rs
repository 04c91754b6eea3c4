//! Shape policies.
//!
//! A [`Shape`] turns randomness into a solution grid of the requested
//! dimensions. Shapes are pure given an RNG state and never fail; callers
//! validate dimensions beforehand (see
//! [`GeneratorOptions`](crate::GeneratorOptions)) and check the output for
//! degeneracy afterward.

use std::fmt::Debug;

use nonolace_core::Grid;
use rand::RngCore;

mod clustered;
mod striped;
mod symmetric;
mod uniform;

pub use self::{
    clustered::Clustered, striped::Striped, symmetric::PointSymmetric, uniform::UniformRandom,
};

/// A boxed shape policy for runtime selection.
pub type BoxedShape = Box<dyn Shape>;

/// A grid shape policy.
///
/// Implementations draw from the supplied RNG in a fixed order, so output
/// is fully determined by the RNG state.
pub trait Shape: Debug + Send + Sync {
    /// Returns the shape's display name.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of this shape.
    fn clone_box(&self) -> BoxedShape;

    /// Generates a `width x height` grid.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero. Dimension preconditions are
    /// checked by the caller before generation begins.
    fn generate(&self, width: usize, height: usize, rng: &mut dyn RngCore) -> Grid;
}

/// Allocates the all-empty grid every shape starts from.
fn blank_grid(width: usize, height: usize) -> Grid {
    assert!(width > 0 && height > 0, "shape dimensions must be positive");
    Grid::new(width, height).expect("dimensions checked above")
}
