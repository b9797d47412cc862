//! Tests for game sessions and settings.

use std::io::Write;
use tictactoe_core::{
    GameRng, HeuristicAgent, Mark, Mode, Move, MoveError, Outcome, Position, Session,
    SessionSettings, Status,
};

#[test]
fn test_reset_clears_grid() {
    let mut session = Session::default();
    session.place(Position::Center).unwrap();
    session.place(Position::TopLeft).unwrap();

    session.reset();

    assert!(Position::ALL.iter().all(|&p| session.grid().is_empty(p)));
    assert_eq!(session.outcome(), Outcome::InProgress);
    assert_eq!(session.status(), Status::NextPlayer(Mark::X));
}

#[test]
fn test_reset_after_win_accepts_moves_again() {
    let mut session = Session::default();
    for index in [0, 3, 1, 4, 2] {
        session.place(Position::from_index(index).unwrap()).unwrap();
    }
    assert_eq!(session.place(Position::BottomRight), Err(MoveError::GameOver));

    session.reset();
    assert!(session.place(Position::BottomRight).is_ok());
}

#[test]
fn test_self_play_keeps_counts_balanced() {
    let mut root = GameRng::new(2024);
    for _ in 0..200 {
        let mut session = Session::default();
        let mut agent = HeuristicAgent::new(root.fork());
        while session.play_agent(&mut agent).unwrap().is_some() {
            let grid = session.grid();
            let (x, o) = (grid.count(Mark::X), grid.count(Mark::O));
            assert!(x == o || x == o + 1, "X={x} O={o}");
        }
        assert!(session.outcome().is_terminal());
    }
}

#[test]
fn test_heuristic_never_loses_to_itself() {
    // Both sides block every open threat, so self-play can only draw.
    let mut root = GameRng::new(7);
    for _ in 0..100 {
        let mut session = Session::default();
        let mut agent = HeuristicAgent::new(root.fork());
        while session.play_agent(&mut agent).unwrap().is_some() {}
        assert_eq!(session.outcome(), Outcome::Draw);
    }
}

#[test]
fn test_computer_waits_for_its_turn() {
    let settings = SessionSettings::default().with_mode(Mode::VsComputer);
    let mut session = Session::new(&settings);
    let mut agent = HeuristicAgent::seeded(3);

    assert_eq!(session.play_computer(&mut agent), Ok(None));
    session.place_human(Position::TopLeft).unwrap();

    let (played, _) = session.play_computer(&mut agent).unwrap().unwrap();
    assert_eq!(played, Move::new(Mark::O, Position::Center));
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_switching_mode_keeps_grid() {
    let mut session = Session::default();
    session.place(Position::Center).unwrap();
    session.set_mode(Mode::VsComputer);
    assert!(!session.grid().is_empty(Position::Center));
    assert!(session.is_computer_turn());
}

#[test]
fn test_settings_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mode = \"cpu\"\ncomputer_mark = \"X\"\nthinking_delay_ms = 0").unwrap();

    let settings = SessionSettings::from_file(file.path()).unwrap();
    assert_eq!(*settings.mode(), Mode::VsComputer);
    assert_eq!(*settings.computer_mark(), Mark::X);
    assert_eq!(*settings.thinking_delay_ms(), 0);

    let session = Session::new(&settings);
    assert!(session.is_computer_turn());
}

#[test]
fn test_missing_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SessionSettings::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read settings file"));
}
