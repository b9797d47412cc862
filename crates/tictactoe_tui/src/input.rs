//! Keyboard handling: key codes to commands, and cursor movement.

use crossterm::event::KeyCode;
use tictactoe_core::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place at a specific cell (keys `1`-`9`).
    Place(Position),
    /// Place at the cursor.
    PlaceAtCursor,
    /// Move the cursor with an arrow key.
    MoveCursor(KeyCode),
    /// Switch between player-vs-player and play-vs-computer.
    ToggleMode,
    /// Switch which mark the computer plays.
    ToggleComputerMark,
    /// Start over.
    Reset,
    /// Leave the program.
    Quit,
}

/// Maps a key to a command; `None` for keys with no binding.
pub fn command_for(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Command::Place),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlaceAtCursor),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Command::MoveCursor(key))
        }
        KeyCode::Char('m') => Some(Command::ToggleMode),
        KeyCode::Char('c') => Some(Command::ToggleComputerMark),
        KeyCode::Char('r') => Some(Command::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Moves the cursor one cell; stops at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
