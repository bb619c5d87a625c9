//! Tests for the game session state machine.

use tictactoe_core::{
    Board, Difficulty, FirstMover, GameConfig, GameSession, Mark, Mode, Outcome, Phase, Position,
    SessionEvent, Status,
};

fn vs_computer(difficulty: Difficulty, first_mover: FirstMover) -> GameSession<Vec<SessionEvent>> {
    GameSession::with_seed(
        GameConfig::new(Mode::VsOpponent, difficulty, first_mover),
        Vec::new(),
        99,
    )
}

#[test]
fn test_occupied_index_never_changes_board() {
    let mut game = GameSession::with_seed(GameConfig::default(), (), 0);
    game.reset();
    game.player_move(Position::Center);
    game.player_move(Position::TopLeft);
    let board = *game.board();

    for pos in [Position::Center, Position::TopLeft] {
        assert_eq!(game.player_move(pos), None);
        assert_eq!(game.board(), &board);
        assert_eq!(game.turn(), Mark::X);
    }
}

#[test]
fn test_opponent_first_places_within_one_tick() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let mut game = vs_computer(difficulty, FirstMover::Opponent);
        let ticket = game.reset().expect("opponent opens");
        assert!(game.opponent_turn(ticket).is_some());
        assert_eq!(game.board().count(Mark::O), 1);
        assert_eq!(game.board().count(Mark::X), 0);
        assert_eq!(game.turn(), Mark::X);
        assert!(game.is_active());
    }
}

#[test]
fn test_opponent_move_notifies_board_then_status() {
    let mut game = vs_computer(Difficulty::Hard, FirstMover::Human);
    game.reset();
    let ticket = game.player_move(Position::TopLeft).unwrap();
    game.notifier_mut().clear();

    let pos = game.opponent_turn(ticket).unwrap();
    let mut expected = "X........".parse::<Board>().unwrap();
    expected.place(pos, Mark::O).unwrap();
    assert_eq!(
        game.notifier().as_slice(),
        &[
            SessionEvent::BoardChanged { board: expected },
            SessionEvent::StatusChanged { status: Status::Turn(Mark::X) },
        ]
    );
}

#[test]
fn test_full_game_against_hard_never_won_by_human() {
    // The human always plays the lowest free index.
    let mut game = vs_computer(Difficulty::Hard, FirstMover::Human);
    game.reset();
    while game.is_active() {
        let pos = game.board().empty_positions().next().unwrap();
        if let Some(ticket) = game.player_move(pos) {
            game.opponent_turn(ticket);
        }
    }
    assert_ne!(game.phase(), Phase::Terminal(Outcome::Winner(Mark::X)));
}

#[test]
fn test_reset_keeps_session_and_restarts_from_empty() {
    let mut game = vs_computer(Difficulty::Easy, FirstMover::Human);
    game.reset();
    let ticket = game.player_move(Position::Center).unwrap();
    game.opponent_turn(ticket);

    assert_eq!(game.reset(), None);
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.phase(), Phase::Active);
    assert_eq!(game.turn(), Mark::X);
}

#[test]
fn test_switching_to_pvp_mid_game_lets_both_sides_move() {
    let mut game = vs_computer(Difficulty::Easy, FirstMover::Human);
    game.reset();
    let _ = game.player_move(Position::Center);
    game.set_mode(Mode::Pvp);

    // Still O's turn, but no longer the computer's.
    assert_eq!(game.player_move(Position::TopLeft), None);
    assert_eq!(game.board().get(Position::TopLeft), tictactoe_core::Cell::Occupied(Mark::O));
}
