//! Application state and logic.

use crate::input::{Command, move_cursor};
use tictactoe_core::{
    GameRng, HeuristicAgent, Mode, Position, Session, SessionSettings, Status,
};
use tokio::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Main application state.
///
/// Rendering reads it, key presses and [`App::tick`] change it. The
/// computer's move is scheduled as a deadline rather than a sleep so any
/// key that changes the game before the deadline cancels it.
#[derive(Debug)]
pub struct App {
    session: Session,
    agent: HeuristicAgent,
    cursor: Position,
    thinking_delay: Duration,
    computer_due: Option<Instant>,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application from settings.
    #[instrument(skip(settings))]
    pub fn new(settings: &SessionSettings) -> Self {
        let agent = HeuristicAgent::new(GameRng::from_optional_seed(*settings.seed()));
        info!(seed = agent.seed(), "Computer opponent ready");
        Self {
            session: Session::new(settings),
            agent,
            cursor: Position::Center,
            thinking_delay: Duration::from_millis(*settings.thinking_delay_ms()),
            computer_due: None,
            message: None,
            should_quit: false,
        }
    }

    /// The running session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Last rejected action, cleared by the next successful one.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// True while a computer move is scheduled.
    pub fn is_thinking(&self) -> bool {
        self.computer_due.is_some()
    }

    /// Status line, including the thinking notice.
    pub fn status_line(&self) -> String {
        match self.session.status() {
            Status::NextPlayer(_) if self.is_thinking() => "Computer is thinking...".to_string(),
            status => status.to_string(),
        }
    }

    /// Applies a command from the keyboard.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Place(position) => self.place(position),
            Command::PlaceAtCursor => self.place(self.cursor),
            Command::MoveCursor(key) => self.cursor = move_cursor(self.cursor, key),
            Command::ToggleMode => {
                let mode = self.session.mode().toggle();
                info!(mode = mode.label(), "Mode changed");
                self.session.set_mode(mode);
                self.cancel_pending();
            }
            Command::ToggleComputerMark => {
                let mark = self.session.computer_mark().opponent();
                info!(%mark, "Computer mark changed");
                self.session.set_computer_mark(mark);
                self.cancel_pending();
            }
            Command::Reset => {
                self.session.reset();
                self.message = None;
                self.cancel_pending();
            }
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn place(&mut self, position: Position) {
        match self.session.place_human(position) {
            Ok(outcome) => {
                debug!(%position, %outcome, "Human move applied");
                self.message = None;
            }
            Err(e) => {
                debug!(error = %e, %position, "Move rejected");
                self.message = Some(e.to_string());
            }
        }
    }

    fn cancel_pending(&mut self) {
        if self.computer_due.take().is_some() {
            debug!("Pending computer move cancelled");
        }
    }

    /// Advances the computer seat.
    ///
    /// Schedules a move `thinking_delay` after the computer's turn begins,
    /// plays it once `now` reaches the deadline, and drops the schedule if
    /// the turn passed for any other reason. Returns true when a move was
    /// played.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.session.is_computer_turn() {
            self.cancel_pending();
            return false;
        }

        let due = *self.computer_due.get_or_insert(now + self.thinking_delay);
        if now < due {
            return false;
        }

        self.computer_due = None;
        match self.session.play_computer(&mut self.agent) {
            Ok(Some((played, decision))) => {
                info!(%played, %decision, "Computer moved");
                true
            }
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "Computer move rejected");
                self.message = Some(e.to_string());
                false
            }
        }
    }

    /// Mode label plus the computer's mark when it plays.
    pub fn mode_line(&self) -> String {
        match self.session.mode() {
            Mode::PlayerVsPlayer => Mode::PlayerVsPlayer.label().to_string(),
            Mode::VsComputer => format!(
                "{} (computer plays {})",
                Mode::VsComputer.label(),
                self.session.computer_mark()
            ),
        }
    }
}
