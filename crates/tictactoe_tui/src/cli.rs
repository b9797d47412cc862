//! Command-line interface for the `tictactoe` binary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictactoe_core::{ConfigError, Mark, Mode, SessionSettings};
use tracing::instrument;

/// Tic-tac-toe in the terminal, against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively
    Play(PlayArgs),

    /// Let the computer play itself and print the results
    Selfplay {
        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for reproducible tie-breaks
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Options for interactive play. Flags override the settings file.
#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Path to a TOML settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start in this mode
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Mark the computer plays
    #[arg(long, value_enum)]
    pub computer: Option<MarkArg>,

    /// Seed for the computer's tie-breaks
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause before the computer moves, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

/// Mode as spelled on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Player vs player
    Pvp,
    /// Play vs computer
    Cpu,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Pvp => Mode::PlayerVsPlayer,
            ModeArg::Cpu => Mode::VsComputer,
        }
    }
}

/// Mark as spelled on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkArg {
    /// X
    X,
    /// O
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

impl PlayArgs {
    /// Settings from the config file (or defaults) with flags applied.
    #[instrument]
    pub fn settings(&self) -> Result<SessionSettings, ConfigError> {
        let mut settings = match &self.config {
            Some(path) => SessionSettings::from_file(path)?,
            None => SessionSettings::default(),
        };

        if let Some(mode) = self.mode {
            settings = settings.with_mode(mode.into());
        }
        if let Some(mark) = self.computer {
            settings = settings.with_computer_mark(mark.into());
        }
        if let Some(seed) = self.seed {
            settings = settings.with_seed(seed);
        }
        if let Some(delay) = self.delay_ms {
            settings = settings.with_thinking_delay_ms(delay);
        }
        Ok(settings)
    }
}
