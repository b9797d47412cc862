//! Win detection logic for tic-tac-toe.

use crate::{Cell, Grid, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight winning triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// The three positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// True if `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "({a},{b},{c})")
    }
}

/// Winning lines in evaluation order: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    Line([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    Line([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    Line([Position::TopCenter, Position::Center, Position::BottomCenter]),
    Line([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    Line([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Finds the first completed line.
///
/// Returns the mark holding it and the line itself. Lines are scanned in
/// [`LINES`] order, so a grid with several completed lines always reports
/// the earliest one.
#[instrument(level = "trace")]
pub fn check_winner(grid: &Grid) -> Option<(Mark, Line)> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        let Cell::Occupied(mark) = grid.get(a) else {
            return None;
        };
        (grid.get(b) == Cell::Occupied(mark) && grid.get(c) == Cell::Occupied(mark))
            .then_some((mark, *line))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_grid() {
        assert_eq!(check_winner(&Grid::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let grid = Grid::new()
            .with(Position::TopLeft, Mark::X)
            .with(Position::TopCenter, Mark::X)
            .with(Position::TopRight, Mark::X);
        assert_eq!(check_winner(&grid), Some((Mark::X, LINES[0])));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let grid = Grid::new()
            .with(Position::TopRight, Mark::O)
            .with(Position::Center, Mark::O)
            .with(Position::BottomLeft, Mark::O);
        let (mark, line) = check_winner(&grid).expect("diagonal is complete");
        assert_eq!(mark, Mark::O);
        assert_eq!(line.indices(), [2, 4, 6]);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let grid = Grid::new()
            .with(Position::TopLeft, Mark::X)
            .with(Position::TopCenter, Mark::O)
            .with(Position::TopRight, Mark::X);
        assert_eq!(check_winner(&grid), None);
    }

    #[test]
    fn test_first_line_in_order_wins_tie() {
        // Unreachable in play: both the top row and the left column are X,
        // and the middle row is O.
        let mut grid = Grid::new();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::BottomLeft,
        ] {
            grid.set(pos, Mark::X.into());
        }
        for pos in [Position::MiddleLeft, Position::Center, Position::MiddleRight] {
            grid.set(pos, Mark::O.into());
        }
        assert_eq!(check_winner(&grid), Some((Mark::X, LINES[0])));
    }

    #[test]
    fn test_line_display() {
        assert_eq!(LINES[7].to_string(), "(2,4,6)");
    }
}
