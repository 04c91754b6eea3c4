use nonolace_core::Grid;
use rand::{Rng as _, RngCore};

use super::{BoxedShape, Shape, blank_grid};

/// Fills each cell independently with a fixed probability.
///
/// A fill ratio of `0.0` yields an all-empty grid and `1.0` an all-filled
/// grid; both are degenerate and rejected by downstream validation, so
/// practical ratios lie strictly between.
#[derive(Debug, Clone, Copy)]
pub struct UniformRandom {
    fill_ratio: f64,
}

impl UniformRandom {
    /// Creates a uniform-random shape.
    ///
    /// # Panics
    ///
    /// Panics if `fill_ratio` is not within `0.0..=1.0`.
    #[must_use]
    pub fn new(fill_ratio: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&fill_ratio),
            "fill ratio must be within 0.0..=1.0, got {fill_ratio}"
        );
        Self { fill_ratio }
    }
}

impl Shape for UniformRandom {
    fn name(&self) -> &'static str {
        "uniform"
    }

    fn clone_box(&self) -> BoxedShape {
        Box::new(*self)
    }

    fn generate(&self, width: usize, height: usize, rng: &mut dyn RngCore) -> Grid {
        let mut grid = blank_grid(width, height);
        for y in 0..height {
            for x in 0..width {
                if rng.random_bool(self.fill_ratio) {
                    grid.set(x, y, true);
                }
            }
        }
        grid
    }
}
