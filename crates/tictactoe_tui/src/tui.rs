//! Terminal setup and the interactive event loop.

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use tictactoe_core::SessionSettings;
use tokio::time::{Duration, Instant};
use tracing::{error, info, instrument};

use crate::app::App;
use crate::input::command_for;
use crate::ui;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Raw mode and the alternate screen, undone on drop (including unwinding).
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = restore(&mut io::stdout()) {
            error!(error = %err, "Failed to restore terminal");
        }
    }
}

/// Leaves the alternate screen, shows the cursor and turns raw mode off.
///
/// Every step is attempted; the first error is returned.
fn restore<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    execute!(out, LeaveAlternateScreen, Show)?;
    raw
}

/// Runs the game screen until the user quits.
#[instrument(skip(settings))]
pub async fn run(settings: SessionSettings) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let app = App::new(&settings);
    let res = run_app(&mut terminal, app).await;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

async fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(command) = command_for(key.code)
        {
            app.handle(command);
        }

        if app.should_quit() {
            return Ok(());
        }

        app.tick(Instant::now());
        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_leaves_alternate_screen_and_shows_cursor() {
        let mut out = Vec::new();
        restore(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?25h"));
    }
}
