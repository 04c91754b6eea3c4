//! Grid validation.
//!
//! Guards generator output before it reaches the puzzle aggregate: a grid
//! must be rectangular and must be neither completely empty nor completely
//! filled to make a playable puzzle.

/// Checks whether raw rows form a valid, playable grid.
///
/// A grid is valid iff it has at least one row, the first row has at least
/// one column, every row has the same length, and the number of filled
/// cells is strictly between zero and the total cell count. Never fails.
///
/// # Examples
///
/// ```
/// use nonolace_core::validator::is_valid;
///
/// assert!(!is_valid(&vec![vec![false; 3]; 3]));
///
/// let mut rows = vec![vec![false; 3]; 3];
/// rows[1][1] = true;
/// assert!(is_valid(&rows));
/// ```
#[must_use]
pub fn is_valid(rows: &[Vec<bool>]) -> bool {
    let Some(first) = rows.first() else {
        return false;
    };
    let width = first.len();
    if width == 0 || rows.iter().any(|row| row.len() != width) {
        return false;
    }
    let filled = rows.iter().flatten().filter(|&&cell| cell).count();
    filled > 0 && filled < rows.len() * width
}
