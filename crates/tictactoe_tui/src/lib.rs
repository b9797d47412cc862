//! Terminal front-end for `tictactoe_core`.
//!
//! The engine never waits or renders; this crate owns both. It turns key
//! presses into session commands, schedules the computer's move after a
//! short pause, and draws the grid with ratatui.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod input;
pub mod selfplay;
pub mod tui;
pub mod ui;

pub use app::App;
pub use cli::{Cli, Command, PlayArgs};
pub use selfplay::Tally;
