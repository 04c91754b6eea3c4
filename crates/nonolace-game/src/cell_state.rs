//! Play-state cell marking.

use derive_more::IsVariant;

/// The player's mark on one cell of an in-progress puzzle.
///
/// Distinct from the solution's boolean cells: a crossed-out cell records
/// the player's deduction that the cell is empty, and counts as empty for
/// solved detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, IsVariant)]
pub enum CellState {
    /// No mark.
    #[default]
    Empty,
    /// Marked filled.
    Filled,
    /// Crossed out (deduced empty).
    Crossed,
}

impl CellState {
    /// Returns the next state in the tap cycle:
    /// empty → filled → crossed → empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonolace_game::CellState;
    ///
    /// assert_eq!(CellState::Empty.cycled(), CellState::Filled);
    /// assert_eq!(CellState::Filled.cycled(), CellState::Crossed);
    /// assert_eq!(CellState::Crossed.cycled(), CellState::Empty);
    /// ```
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Self::Empty => Self::Filled,
            Self::Filled => Self::Crossed,
            Self::Crossed => Self::Empty,
        }
    }
}
