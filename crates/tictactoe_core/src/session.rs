//! One running game: grid, turn state and who plays which seat.
//!
//! [`Session`] is the only place the grid is mutated. It enforces the
//! placement rules the evaluator and selector leave to their caller: the
//! game must still be in progress, the cell must be empty, and in
//! [`Mode::VsComputer`] a human cannot move for the computer.

use super::action::{Move, MoveError};
use super::rules::{Line, Outcome, evaluate};
use super::selector::{Decision, HeuristicAgent};
use super::settings::{Mode, SessionSettings};
use super::{Cell, Grid, Mark, Position};
use tracing::{debug, info, instrument};

/// Status line shown to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    /// Someone completed a line.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// Full grid, no line.
    #[display("Draw game")]
    Draw,
    /// Game continues.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
}

/// A single game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    grid: Grid,
    to_move: Mark,
    starting_mark: Mark,
    outcome: Outcome,
    history: Vec<Move>,
    mode: Mode,
    computer_mark: Mark,
}

impl Session {
    /// Creates a session with an empty grid.
    #[instrument(skip(settings), fields(mode = ?settings.mode(), starting = %settings.starting_mark()))]
    pub fn new(settings: &SessionSettings) -> Self {
        debug!("Creating session");
        Self {
            grid: Grid::new(),
            to_move: *settings.starting_mark(),
            starting_mark: *settings.starting_mark(),
            outcome: Outcome::InProgress,
            history: Vec::new(),
            mode: *settings.mode(),
            computer_mark: *settings.computer_mark(),
        }
    }

    /// The grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mark to move. Frozen at the last mover once the game is over.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Moves played since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Mark the computer plays in [`Mode::VsComputer`].
    pub fn computer_mark(&self) -> Mark {
        self.computer_mark
    }

    /// Completed line, for highlighting.
    pub fn winning_line(&self) -> Option<Line> {
        self.outcome.line()
    }

    /// Status line for display.
    pub fn status(&self) -> Status {
        match self.outcome {
            Outcome::Win(mark, _) => Status::Winner(mark),
            Outcome::Draw => Status::Draw,
            Outcome::InProgress => Status::NextPlayer(self.to_move),
        }
    }

    /// True when the computer should move next.
    pub fn is_computer_turn(&self) -> bool {
        self.mode == Mode::VsComputer
            && !self.outcome.is_terminal()
            && self.to_move == self.computer_mark
    }

    /// Places the mark to move at `position`.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the outcome is terminal,
    /// [`MoveError::SquareOccupied`] if the cell is taken.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn place(&mut self, position: Position) -> Result<Outcome, MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.grid.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        let mark = self.to_move;
        self.grid.set(position, Cell::Occupied(mark));
        self.history.push(Move::new(mark, position));
        self.outcome = evaluate(&self.grid);

        match self.outcome {
            Outcome::InProgress => self.to_move = mark.opponent(),
            Outcome::Win(winner, line) => info!(%winner, %line, "Game won"),
            Outcome::Draw => info!("Game drawn"),
        }

        Ok(self.outcome)
    }

    /// Places a move from a human seat.
    ///
    /// # Errors
    ///
    /// As [`Session::place`], plus [`MoveError::ComputersTurn`] when the
    /// computer is to play.
    pub fn place_human(&mut self, position: Position) -> Result<Outcome, MoveError> {
        if self.is_computer_turn() {
            return Err(MoveError::ComputersTurn);
        }
        self.place(position)
    }

    /// Applies a fully specified move.
    ///
    /// # Errors
    ///
    /// As [`Session::place`], plus [`MoveError::WrongMark`] when
    /// `action.mark` is not the mark to move.
    pub fn apply(&mut self, action: Move) -> Result<Outcome, MoveError> {
        if !self.outcome.is_terminal() && action.mark != self.to_move {
            return Err(MoveError::WrongMark(action.mark));
        }
        self.place(action.position)
    }

    /// Lets `agent` play for whichever mark is to move.
    ///
    /// Returns `Ok(None)` when the game is over.
    #[instrument(skip(self, agent), fields(mark = %self.to_move))]
    pub fn play_agent(
        &mut self,
        agent: &mut HeuristicAgent,
    ) -> Result<Option<(Move, Decision)>, MoveError> {
        if self.outcome.is_terminal() {
            return Ok(None);
        }
        let mark = self.to_move;
        let Some((position, decision)) = agent.choose(&self.grid, mark) else {
            return Ok(None);
        };
        self.place(position)?;
        Ok(Some((Move::new(mark, position), decision)))
    }

    /// Plays the computer's move if it is the computer's turn.
    ///
    /// Returns `Ok(None)` when it is not.
    pub fn play_computer(
        &mut self,
        agent: &mut HeuristicAgent,
    ) -> Result<Option<(Move, Decision)>, MoveError> {
        if !self.is_computer_turn() {
            return Ok(None);
        }
        self.play_agent(agent)
    }

    /// Switches mode. The grid is left as is.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Chooses the computer's mark. The grid is left as is.
    #[instrument(skip(self))]
    pub fn set_computer_mark(&mut self, mark: Mark) {
        self.computer_mark = mark;
    }

    /// Clears the grid and hands the turn back to the starting mark.
    ///
    /// Mode and computer mark are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "Resetting session");
        self.grid = Grid::new();
        self.to_move = self.starting_mark;
        self.outcome = Outcome::InProgress;
        self.history.clear();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&SessionSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(session: &mut Session, indices: &[usize]) {
        for &index in indices {
            let pos = Position::from_index(index).unwrap();
            session.place(pos).unwrap();
        }
    }

    #[test]
    fn test_turns_alternate() {
        let mut session = Session::default();
        assert_eq!(session.to_move(), Mark::X);
        session.place(Position::Center).unwrap();
        assert_eq!(session.to_move(), Mark::O);
        assert_eq!(session.status(), Status::NextPlayer(Mark::O));
    }

    #[test]
    fn test_occupied_rejected() {
        let mut session = Session::default();
        session.place(Position::Center).unwrap();
        assert_eq!(
            session.place(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(session.to_move(), Mark::O);
    }

    #[test]
    fn test_win_freezes_session() {
        let mut session = Session::default();
        play(&mut session, &[0, 3, 1, 4, 2]);
        assert_eq!(session.status(), Status::Winner(Mark::X));
        assert_eq!(session.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
        assert_eq!(session.place(Position::BottomLeft), Err(MoveError::GameOver));
        assert_eq!(session.to_move(), Mark::X);
    }

    #[test]
    fn test_draw_status_text() {
        let mut session = Session::default();
        play(&mut session, &[0, 4, 2, 1, 7, 3, 5, 8, 6]);
        assert_eq!(session.outcome(), Outcome::Draw);
        assert_eq!(session.status().to_string(), "Draw game");
    }

    #[test]
    fn test_wrong_mark_rejected() {
        let mut session = Session::default();
        let result = session.apply(Move::new(Mark::O, Position::Center));
        assert_eq!(result, Err(MoveError::WrongMark(Mark::O)));
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_human_blocked_on_computer_turn() {
        let settings = SessionSettings::default()
            .with_mode(Mode::VsComputer)
            .with_computer_mark(Mark::X);
        let mut session = Session::new(&settings);
        assert!(session.is_computer_turn());
        assert_eq!(session.place_human(Position::Center), Err(MoveError::ComputersTurn));

        let mut agent = HeuristicAgent::seeded(1);
        let (played, decision) = session.play_computer(&mut agent).unwrap().unwrap();
        assert_eq!(played, Move::new(Mark::X, Position::Center));
        assert_eq!(decision, Decision::Center);
        assert!(!session.is_computer_turn());
        assert_eq!(session.play_computer(&mut agent), Ok(None));
    }

    #[test]
    fn test_reset_keeps_mode() {
        let settings = SessionSettings::default().with_mode(Mode::VsComputer);
        let mut session = Session::new(&settings);
        play(&mut session, &[0, 1]);
        session.set_computer_mark(Mark::X);
        session.reset();
        assert_eq!(*session.grid(), Grid::new());
        assert_eq!(session.outcome(), Outcome::InProgress);
        assert_eq!(session.to_move(), Mark::X);
        assert_eq!(session.mode(), Mode::VsComputer);
        assert_eq!(session.computer_mark(), Mark::X);
        assert!(session.history().is_empty());
    }
}
