use nonolace_core::Grid;
use rand::{Rng as _, RngCore};

use super::{BoxedShape, Shape, blank_grid};

/// Generates grids with point symmetry (invariant under 180° rotation).
///
/// Only the upper-left quadrant is randomized; each quadrant cell is then
/// mirrored horizontally, vertically, and through the center. Mirrors that
/// coincide with the source cell (the center row/column of odd-sized
/// grids) are skipped so each cell is written once.
#[derive(Debug, Clone, Copy)]
pub struct PointSymmetric {
    fill_ratio: f64,
}

impl PointSymmetric {
    /// Creates a point-symmetric shape.
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

impl Shape for PointSymmetric {
    fn name(&self) -> &'static str {
        "symmetric"
    }

    fn clone_box(&self) -> BoxedShape {
        Box::new(*self)
    }

    fn generate(&self, width: usize, height: usize, rng: &mut dyn RngCore) -> Grid {
        let mut grid = blank_grid(width, height);
        for y in 0..height.div_ceil(2) {
            for x in 0..width.div_ceil(2) {
                let filled = rng.random_bool(self.fill_ratio);
                let mx = width - 1 - x;
                let my = height - 1 - y;
                grid.set(x, y, filled);
                if mx != x {
                    grid.set(mx, y, filled);
                }
                if my != y {
                    grid.set(x, my, filled);
                }
                if mx != x || my != y {
                    grid.set(mx, my, filled);
                }
            }
        }
        grid
    }
}
