//! Tic-tac-toe engine with a rule-based computer opponent.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] classifies any grid as in progress, won or drawn
//! - **Selector**: [`select_move`] picks a move by win, block, center,
//!   corner, then any free cell; ties go through an injected [`TieBreaker`]
//! - **Session**: [`Session`] owns a grid, enforces turn order and handles
//!   reset and the play-vs-computer seat
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameRng, Grid, Mark, Outcome, Position, evaluate, select_move};
//!
//! let grid = Grid::new()
//!     .with(Position::TopLeft, Mark::X)
//!     .with(Position::TopCenter, Mark::X);
//! let mut rng = GameRng::new(42);
//! let pick = select_move(&grid, Mark::X, Mark::O, &mut rng).unwrap();
//! assert_eq!(pick, Some(Position::TopRight));
//! assert!(matches!(
//!     evaluate(&grid.with(Position::TopRight, Mark::X)),
//!     Outcome::Win(Mark::X, _)
//! ));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod position;
mod rng;
pub mod rules;
mod selector;
mod session;
mod settings;
mod types;

pub use action::{Move, MoveError};
pub use position::Position;
pub use rng::{GameRng, TieBreaker};
pub use rules::{LINES, Line, Outcome, evaluate};
pub use selector::{Decision, HeuristicAgent, SelectError, select_decision, select_move};
pub use session::{Session, Status};
pub use settings::{ConfigError, Mode, SessionSettings};
pub use types::{Cell, Grid, Mark};
