//! Generation options and precondition validation.

use derive_more::{Display, Error};

use crate::shape::{BoxedShape, Clustered, PointSymmetric, Striped, UniformRandom};

/// Smallest supported grid dimension.
pub const MIN_DIMENSION: usize = 1;
/// Largest supported grid dimension.
pub const MAX_DIMENSION: usize = 50;

/// Errors from generator configuration and generation.
#[derive(Debug, Clone, Copy, PartialEq, Display, Error)]
pub enum GeneratorError {
    /// A width or height outside the supported range.
    #[display("dimension {value} out of supported range {MIN_DIMENSION}..={MAX_DIMENSION}")]
    InvalidDimension {
        /// The rejected dimension.
        value: usize,
    },
    /// A fill ratio outside `0.0..=1.0`.
    #[display("fill ratio {value} must be within 0.0..=1.0")]
    InvalidFillRatio {
        /// The rejected ratio.
        value: f64,
    },
    /// A cluster count of zero for the clustered shape.
    #[display("cluster count must be positive")]
    InvalidClusterCount,
    /// A cluster size of zero for the clustered shape.
    #[display("cluster size must be positive")]
    InvalidClusterSize,
    /// The shape produced only degenerate grids.
    #[display("shape produced no playable grid after {attempts} attempts")]
    DegenerateShape {
        /// Number of attempts made before giving up.
        attempts: usize,
    },
}

/// Selects one of the four shape policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Independent per-cell randomness.
    Uniform,
    /// 180°-rotation symmetric output.
    Symmetric,
    /// Alternating horizontal bands.
    Striped,
    /// Circular blobs around random centers.
    Clustered,
}

impl ShapeKind {
    /// All shape kinds, in declaration order.
    pub const ALL: [Self; 4] = [Self::Uniform, Self::Symmetric, Self::Striped, Self::Clustered];

    /// Builds the boxed shape this kind selects, using the relevant
    /// options.
    ///
    /// Call [`GeneratorOptions::validate`] first; this constructor assumes
    /// the parameters are in range.
    #[must_use]
    pub fn build(self, options: &GeneratorOptions) -> BoxedShape {
        match self {
            Self::Uniform => Box::new(UniformRandom::new(options.fill_ratio)),
            Self::Symmetric => Box::new(PointSymmetric::new(options.fill_ratio)),
            Self::Striped => Box::new(Striped::new()),
            Self::Clustered => Box::new(Clustered::new(options.cluster_count, options.cluster_size)),
        }
    }
}

/// The recognized generation options.
///
/// Each shape reads only the options relevant to it: the fill ratio feeds
/// the uniform and symmetric shapes, the cluster parameters feed the
/// clustered shape, and `preserve_clues` selects the
/// [`shuffle`](crate::shuffle) mode for regeneration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorOptions {
    /// Grid width, `1..=50`.
    pub width: usize,
    /// Grid height, `1..=50`.
    pub height: usize,
    /// Fill probability for the uniform and symmetric shapes, `0.0..=1.0`.
    pub fill_ratio: f64,
    /// Number of clusters for the clustered shape, positive.
    pub cluster_count: usize,
    /// Maximum cluster radius for the clustered shape, positive.
    pub cluster_size: usize,
    /// Shuffle-mode selector: keep per-row clues when regenerating.
    pub preserve_clues: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            fill_ratio: 0.5,
            cluster_count: 4,
            cluster_size: 3,
            preserve_clues: false,
        }
    }
}

impl GeneratorOptions {
    /// Validates the options for the given shape kind.
    ///
    /// Rejection happens here, before any generation work begins; shapes
    /// themselves never fail mid-generation.
    ///
    /// # Errors
    ///
    /// Returns the first violated precondition: dimensions outside
    /// `1..=50`, a fill ratio outside `0.0..=1.0` (for the shapes that use
    /// it), or non-positive cluster parameters (for the clustered shape).
    pub fn validate(&self, kind: ShapeKind) -> Result<(), GeneratorError> {
        for value in [self.width, self.height] {
            if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
                return Err(GeneratorError::InvalidDimension { value });
            }
        }
        if matches!(kind, ShapeKind::Uniform | ShapeKind::Symmetric)
            && !(0.0..=1.0).contains(&self.fill_ratio)
        {
            return Err(GeneratorError::InvalidFillRatio {
                value: self.fill_ratio,
            });
        }
        if kind == ShapeKind::Clustered {
            if self.cluster_count == 0 {
                return Err(GeneratorError::InvalidClusterCount);
            }
            if self.cluster_size == 0 {
                return Err(GeneratorError::InvalidClusterSize);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate_for_every_shape() {
        let options = GeneratorOptions::default();
        for kind in ShapeKind::ALL {
            assert_eq!(options.validate(kind), Ok(()), "{kind:?}");
        }
    }

    #[test]
    fn test_dimension_bounds() {
        let options = GeneratorOptions {
            width: 0,
            ..GeneratorOptions::default()
        };
        assert_eq!(
            options.validate(ShapeKind::Uniform),
            Err(GeneratorError::InvalidDimension { value: 0 })
        );
        let options = GeneratorOptions {
            width: 50,
            height: 51,
            ..GeneratorOptions::default()
        };
        assert_eq!(
            options.validate(ShapeKind::Uniform),
            Err(GeneratorError::InvalidDimension { value: 51 })
        );
        let options = GeneratorOptions {
            width: 50,
            height: 50,
            ..GeneratorOptions::default()
        };
        assert_eq!(options.validate(ShapeKind::Uniform), Ok(()));
    }

    #[test]
    fn test_fill_ratio_bounds_only_where_used() {
        let options = GeneratorOptions {
            fill_ratio: 1.5,
            ..GeneratorOptions::default()
        };
        assert_eq!(
            options.validate(ShapeKind::Uniform),
            Err(GeneratorError::InvalidFillRatio { value: 1.5 })
        );
        assert_eq!(
            options.validate(ShapeKind::Symmetric),
            Err(GeneratorError::InvalidFillRatio { value: 1.5 })
        );
        // Striped and clustered ignore the ratio.
        assert_eq!(options.validate(ShapeKind::Striped), Ok(()));
        assert_eq!(options.validate(ShapeKind::Clustered), Ok(()));
    }

    #[test]
    fn test_cluster_parameter_bounds() {
        let options = GeneratorOptions {
            cluster_count: 0,
            ..GeneratorOptions::default()
        };
        assert_eq!(
            options.validate(ShapeKind::Clustered),
            Err(GeneratorError::InvalidClusterCount)
        );
        let options = GeneratorOptions {
            cluster_size: 0,
            ..GeneratorOptions::default()
        };
        assert_eq!(
            options.validate(ShapeKind::Clustered),
            Err(GeneratorError::InvalidClusterSize)
        );
        // Only the clustered shape reads these.
        assert_eq!(options.validate(ShapeKind::Uniform), Ok(()));
    }
}
