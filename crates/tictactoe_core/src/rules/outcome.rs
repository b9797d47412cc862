//! Outcome classification of a grid.

use super::{Line, check_winner, is_full};
use crate::{Grid, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Classification of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No completed line and at least one empty cell.
    InProgress,
    /// `mark` completed `line`.
    Win(Mark, Line),
    /// Every cell is occupied and no line is complete.
    Draw,
}

impl Outcome {
    /// True unless the game is still in progress.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark, _) => Some(*mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns the completed line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            Outcome::Win(_, line) => Some(*line),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(mark, line) => write!(f, "{} wins on {}", mark, line),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Classifies a grid.
///
/// Total over every grid, reachable or not. A completed line takes
/// precedence over a full grid.
#[instrument(level = "trace")]
pub fn evaluate(grid: &Grid) -> Outcome {
    if let Some((mark, line)) = check_winner(grid) {
        Outcome::Win(mark, line)
    } else if is_full(grid) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
