//! Difficulty tiers.

use std::fmt::{self, Display};

use crate::ClueLine;

/// A puzzle difficulty tier in the range 1-5.
///
/// The tier is a coarse heuristic combining grid area and average clue
/// density; it does not measure true solving difficulty (no
/// constraint-propagation depth is involved).
///
/// # Examples
///
/// ```
/// use nonolace_core::Difficulty;
///
/// let tier = Difficulty::from_value(3);
/// assert_eq!(tier, Difficulty::Medium);
/// assert_eq!(tier.value(), 3);
///
/// for tier in Difficulty::ALL {
///     assert!((1..=5).contains(&tier.value()));
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Difficulty {
    /// Tier 1: small grids with sparse clues.
    Beginner = 1,
    /// Tier 2.
    Easy = 2,
    /// Tier 3.
    Medium = 3,
    /// Tier 4.
    Hard = 4,
    /// Tier 5: large grids or dense clues.
    Expert = 5,
}

impl Difficulty {
    /// Array containing all tiers from 1 to 5 in ascending order.
    pub const ALL: [Self; 5] = [
        Self::Beginner,
        Self::Easy,
        Self::Medium,
        Self::Hard,
        Self::Expert,
    ];

    /// Creates a tier from a u8 value in the range 1-5.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-5.
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match value {
            1 => Self::Beginner,
            2 => Self::Easy,
            3 => Self::Medium,
            4 => Self::Hard,
            5 => Self::Expert,
            _ => panic!("Invalid difficulty value: {value}"),
        }
    }

    /// Returns the numeric value of this tier (1-5).
    #[must_use]
    pub const fn value(&self) -> u8 {
        *self as u8
    }

    /// Scores a puzzle from its dimensions and clue lines.
    ///
    /// The size contribution is a sequence of unconditional assignments in
    /// ascending threshold order (area > 100, > 225, > 400, > 625), so the
    /// last threshold cleared decides the base tier. The complexity
    /// adjustment then averages the clue count per row and per column and,
    /// if the combined average exceeds 5, raises the tier by one, clamped
    /// to 5.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonolace_core::{Difficulty, Grid, clue};
    ///
    /// let grid: Grid = "#.#\n.#.\n#.#".parse()?;
    /// let tier = Difficulty::from_metrics(
    ///     grid.width(),
    ///     grid.height(),
    ///     &clue::row_clues(&grid),
    ///     &clue::column_clues(&grid),
    /// );
    /// assert_eq!(tier, Difficulty::Beginner);
    /// # Ok::<(), nonolace_core::GridError>(())
    /// ```
    #[must_use]
    pub fn from_metrics(
        width: usize,
        height: usize,
        row_clues: &[ClueLine],
        column_clues: &[ClueLine],
    ) -> Self {
        let area = width * height;
        let mut tier = 1;
        if area > 100 {
            tier = 2;
        }
        if area > 225 {
            tier = 3;
        }
        if area > 400 {
            tier = 4;
        }
        if area > 625 {
            tier = 5;
        }

        let row_average = average_clue_count(row_clues);
        let column_average = average_clue_count(column_clues);
        if (row_average + column_average) / 2.0 > 5.0 {
            tier = u8::min(tier + 1, 5);
        }

        Self::from_value(tier)
    }
}

#[expect(clippy::cast_precision_loss)]
fn average_clue_count(clues: &[ClueLine]) -> f64 {
    if clues.is_empty() {
        return 0.0;
    }
    let total: usize = clues.iter().map(ClueLine::len).sum();
    total as f64 / clues.len() as f64
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Beginner => "beginner",
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        };
        write!(f, "{name} ({})", self.value())
    }
}
