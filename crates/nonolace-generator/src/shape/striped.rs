use nonolace_core::Grid;
use rand::{Rng as _, RngCore};

use super::{BoxedShape, Shape, blank_grid};

/// Generates alternating horizontal bands of filled and empty rows.
///
/// Each band's height is drawn uniformly from `1..=max(1, height / 2)`.
/// One random boolean decides whether the first band is filled; the state
/// flips at every band boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct Striped;

impl Striped {
    /// Creates a striped shape.
    #[must_use]
    pub const fn new() -> Self {
        Striped
    }
}

impl Shape for Striped {
    fn name(&self) -> &'static str {
        "striped"
    }

    fn clone_box(&self) -> BoxedShape {
        Box::new(*self)
    }

    fn generate(&self, width: usize, height: usize, rng: &mut dyn RngCore) -> Grid {
        let mut grid = blank_grid(width, height);
        let max_band = (height / 2).max(1);
        let mut filled = rng.random_bool(0.5);
        let mut y = 0;
        while y < height {
            let band = rng.random_range(1..=max_band);
            if filled {
                for row in y..(y + band).min(height) {
                    for x in 0..width {
                        grid.set(x, row, true);
                    }
                }
            }
            filled = !filled;
            y += band;
        }
        grid
    }
}
