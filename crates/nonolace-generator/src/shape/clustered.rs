use nonolace_core::Grid;
use rand::{Rng as _, RngCore};

use super::{BoxedShape, Shape, blank_grid};

/// Fills circular blobs around randomly chosen centers.
///
/// Starting from an all-empty grid, each cluster picks a uniform random
/// center cell and a radius in `1..=cluster_size`, then fills every
/// in-bounds cell within Euclidean distance of the center
/// (`dx² + dy² ≤ r²`). Clusters may overlap; refilling a cell is a no-op.
#[derive(Debug, Clone, Copy)]
pub struct Clustered {
    cluster_count: usize,
    cluster_size: usize,
}

impl Clustered {
    /// Creates a clustered shape.
    ///
    /// A `cluster_count` of zero produces an all-empty (degenerate) grid.
    ///
    /// # Panics
    ///
    /// Panics if `cluster_size` is zero.
    #[must_use]
    pub fn new(cluster_count: usize, cluster_size: usize) -> Self {
        assert!(cluster_size > 0, "cluster size must be positive");
        Self {
            cluster_count,
            cluster_size,
        }
    }
}

impl Shape for Clustered {
    fn name(&self) -> &'static str {
        "clustered"
    }

    fn clone_box(&self) -> BoxedShape {
        Box::new(*self)
    }

    fn generate(&self, width: usize, height: usize, rng: &mut dyn RngCore) -> Grid {
        let mut grid = blank_grid(width, height);
        for _ in 0..self.cluster_count {
            let cx = rng.random_range(0..width);
            let cy = rng.random_range(0..height);
            let radius = rng.random_range(1..=self.cluster_size);
            for y in cy.saturating_sub(radius)..=(cy + radius).min(height - 1) {
                for x in cx.saturating_sub(radius)..=(cx + radius).min(width - 1) {
                    let dx = x.abs_diff(cx);
                    let dy = y.abs_diff(cy);
                    if dx * dx + dy * dy <= radius * radius {
                        grid.set(x, y, true);
                    }
                }
            }
        }
        grid
    }
}
