//! Draw detection logic for tic-tac-toe.

use crate::{Cell, Grid};

/// Checks if every cell is occupied.
///
/// A full grid is a draw only when no line is complete; see
/// [`evaluate`](super::evaluate) for the precedence.
pub fn is_full(grid: &Grid) -> bool {
    grid.cells().iter().all(|cell| *cell != Cell::Empty)
}
