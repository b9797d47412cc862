//! Rule-based move selection for the computer opponent.
//!
//! The policy is a fixed priority list evaluated one ply deep:
//!
//! 1. complete a line for ourselves,
//! 2. otherwise occupy the cell that would complete a line for the opponent,
//! 3. otherwise take the center,
//! 4. otherwise a random free corner,
//! 5. otherwise any random free cell.
//!
//! Steps 1 and 2 scan free cells in ascending index order and take the
//! first hit. Only steps 4 and 5 consult the [`TieBreaker`].

use crate::rng::{GameRng, TieBreaker};
use crate::rules::{Outcome, evaluate};
use crate::{Grid, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which rule produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Decision {
    /// Completes a line for the mover.
    #[display("win")]
    Win,
    /// Denies the opponent a completed line.
    #[display("block")]
    Block,
    /// Center was free.
    #[display("center")]
    Center,
    /// Random free corner.
    #[display("corner")]
    Corner,
    /// Random free cell.
    #[display("fallback")]
    Fallback,
}

/// Invalid input to the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SelectError {
    /// Both sides were given the same mark.
    #[display("Selector called with {} on both sides", _0)]
    SameMark(Mark),
}

impl std::error::Error for SelectError {}

/// Picks a move and reports the rule that chose it.
///
/// Returns `Ok(None)` when the grid has no free cell. The grid is not
/// modified.
///
/// # Errors
///
/// Returns [`SelectError::SameMark`] if `me == opponent`.
#[instrument(skip(grid, tie_breaker), fields(grid = %grid))]
pub fn select_decision<T: TieBreaker + ?Sized>(
    grid: &Grid,
    me: Mark,
    opponent: Mark,
    tie_breaker: &mut T,
) -> Result<Option<(Position, Decision)>, SelectError> {
    if me == opponent {
        return Err(SelectError::SameMark(me));
    }

    Ok(decide(grid, me, opponent, tie_breaker))
}

fn decide<T: TieBreaker + ?Sized>(
    grid: &Grid,
    me: Mark,
    opponent: Mark,
    tie_breaker: &mut T,
) -> Option<(Position, Decision)> {
    let free = grid.empty_positions();
    if free.is_empty() {
        debug!("No free cell");
        return None;
    }

    let completes_for = |mark: Mark| {
        free.iter().copied().find(|&pos| {
            matches!(evaluate(&grid.with(pos, mark)), Outcome::Win(winner, _) if winner == mark)
        })
    };

    let choice = if let Some(pos) = completes_for(me) {
        (pos, Decision::Win)
    } else if let Some(pos) = completes_for(opponent) {
        (pos, Decision::Block)
    } else if free.contains(&Position::Center) {
        (Position::Center, Decision::Center)
    } else {
        let corners: Vec<Position> = free.iter().copied().filter(|p| p.is_corner()).collect();
        if corners.is_empty() {
            (free[tie_breaker.pick(free.len())], Decision::Fallback)
        } else {
            (corners[tie_breaker.pick(corners.len())], Decision::Corner)
        }
    };

    debug!(position = %choice.0, decision = %choice.1, "Selected move");
    Some(choice)
}

/// Picks a move for `me`.
///
/// Same as [`select_decision`] without the rule attribution.
///
/// # Errors
///
/// Returns [`SelectError::SameMark`] if `me == opponent`.
pub fn select_move<T: TieBreaker + ?Sized>(
    grid: &Grid,
    me: Mark,
    opponent: Mark,
    tie_breaker: &mut T,
) -> Result<Option<Position>, SelectError> {
    Ok(select_decision(grid, me, opponent, tie_breaker)?.map(|(pos, _)| pos))
}

/// Computer opponent owning its own random source.
#[derive(Debug, Clone)]
pub struct HeuristicAgent {
    rng: GameRng,
}

impl HeuristicAgent {
    /// Creates an agent drawing tie-breaks from `rng`.
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Creates an agent with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Seed of the underlying generator.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Picks a move for `mark` against its opponent.
    pub fn choose(&mut self, grid: &Grid, mark: Mark) -> Option<(Position, Decision)> {
        decide(grid, mark, mark.opponent(), &mut self.rng)
    }
}
