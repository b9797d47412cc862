//! Headless games between two computer opponents.

use derive_more::Display;
use tictactoe_core::{GameRng, HeuristicAgent, Mark, MoveError, Outcome, Session};
use tracing::{debug, info, instrument};

/// Results of a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[display("X wins: {x_wins}, O wins: {o_wins}, draws: {draws}")]
pub struct Tally {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    fn record(&mut self, outcome: Outcome) {
        match outcome.winner() {
            Some(Mark::X) => self.x_wins += 1,
            Some(Mark::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
    }

    /// Total games recorded.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Plays `games` games, one agent per mark.
///
/// Each side gets its own fork of the root generator, so a seed
/// reproduces the whole batch.
#[instrument]
pub fn run(games: u32, seed: Option<u64>) -> Result<Tally, MoveError> {
    let mut root = GameRng::from_optional_seed(seed);
    info!(seed = root.seed(), "Starting self-play");

    let mut tally = Tally::default();
    for game in 0..games {
        let mut x = HeuristicAgent::new(root.fork());
        let mut o = HeuristicAgent::new(root.fork());
        let mut session = Session::default();

        while !session.outcome().is_terminal() {
            let agent = match session.to_move() {
                Mark::X => &mut x,
                Mark::O => &mut o,
            };
            if session.play_agent(agent)?.is_none() {
                break;
            }
        }

        debug!(game, outcome = %session.outcome(), "Game finished");
        tally.record(session.outcome());
    }

    info!(%tally, "Self-play finished");
    Ok(tally)
}
