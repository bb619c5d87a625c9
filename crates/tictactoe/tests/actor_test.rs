//! Tests for the session actor and its deferred computer turn.

use std::time::Duration;
use tictactoe::{ChannelNotifier, SessionHandle, spawn_session};
use tictactoe_core::{
    Board, Difficulty, FirstMover, GameConfig, GameSession, Mark, Mode, OPPONENT_DELAY, Phase,
    Position, SessionEvent, Status,
};
use tokio::sync::mpsc::UnboundedReceiver;

fn start(config: GameConfig) -> (SessionHandle, UnboundedReceiver<SessionEvent>) {
    let (notifier, events) = ChannelNotifier::channel();
    let session = GameSession::with_seed(config, notifier, 3);
    let (handle, _task) = spawn_session(session, OPPONENT_DELAY);
    (handle, events)
}

fn vs_computer(first_mover: FirstMover) -> GameConfig {
    GameConfig::new(Mode::VsOpponent, Difficulty::Hard, first_mover)
}

/// Lets every timer due within `dur` fire.
async fn wait(dur: Duration) {
    tokio::time::sleep(dur).await;
}

#[tokio::test(start_paused = true)]
async fn test_opponent_opens_after_delay() {
    let (handle, mut events) = start(vs_computer(FirstMover::Opponent));
    handle.reset().unwrap();

    assert_eq!(
        events.recv().await,
        Some(SessionEvent::StatusChanged { status: Status::Turn(Mark::O) })
    );
    assert_eq!(
        events.recv().await,
        Some(SessionEvent::BoardChanged { board: Board::new() })
    );

    // Nothing happens before the delay elapses.
    wait(OPPONENT_DELAY / 2).await;
    assert!(events.try_recv().is_err());

    let Some(SessionEvent::BoardChanged { board }) = events.recv().await else {
        panic!("expected the opponent's board");
    };
    assert_eq!(board.count(Mark::O), 1);
    assert_eq!(
        events.recv().await,
        Some(SessionEvent::StatusChanged { status: Status::Turn(Mark::X) })
    );

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.turn, Mark::X);
    assert_eq!(snapshot.phase, Phase::Active);
}

#[tokio::test(start_paused = true)]
async fn test_human_move_is_answered() {
    let (handle, _events) = start(vs_computer(FirstMover::Human));
    handle.reset().unwrap();
    handle.player_move(0).unwrap();

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.board.count(Mark::O), 0);
    assert_eq!(snapshot.turn, Mark::O);

    wait(OPPONENT_DELAY * 2).await;
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.board.get(Position::Center), tictactoe_core::Cell::Occupied(Mark::O));
    assert_eq!(snapshot.turn, Mark::X);
}

#[tokio::test(start_paused = true)]
async fn test_reset_before_delay_cancels_reply() {
    let (handle, _events) = start(vs_computer(FirstMover::Human));
    handle.reset().unwrap();
    handle.player_move(4).unwrap();
    handle.reset().unwrap();

    wait(OPPONENT_DELAY * 3).await;
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.board, Board::new());
    assert_eq!(snapshot.turn, Mark::X);
}

#[tokio::test(start_paused = true)]
async fn test_repeated_resets_place_one_opening_mark() {
    let (handle, _events) = start(vs_computer(FirstMover::Opponent));
    handle.reset().unwrap();
    handle.reset().unwrap();
    handle.reset().unwrap();

    wait(OPPONENT_DELAY * 3).await;
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.board.count(Mark::O), 1);
    assert_eq!(snapshot.turn, Mark::X);
}

#[tokio::test(start_paused = true)]
async fn test_human_cannot_move_during_opponent_turn() {
    let (handle, _events) = start(vs_computer(FirstMover::Opponent));
    handle.reset().unwrap();
    handle.player_move(8).unwrap();

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.board, Board::new());
}

#[tokio::test]
async fn test_out_of_range_index_fails_loudly() {
    let (handle, _events) = start(GameConfig::default());
    handle.reset().unwrap();
    let err = handle.player_move(9).unwrap_err();
    assert!(err.message.contains("out of range"), "{}", err);

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.board, Board::new());
}

#[tokio::test]
async fn test_config_changes_wait_for_reset() {
    let (handle, _events) = start(GameConfig::default());
    handle.reset().unwrap();
    handle.player_move(4).unwrap();
    handle.set_difficulty(Difficulty::Medium).unwrap();
    handle.set_first_mover(FirstMover::Opponent).unwrap();

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.board.count(Mark::X), 1);
    assert_eq!(*snapshot.config.difficulty(), Difficulty::Medium);
    assert_eq!(*snapshot.config.mode(), Mode::Pvp);
}

#[tokio::test]
async fn test_actor_stops_when_handles_drop() {
    let (notifier, mut events) = ChannelNotifier::channel();
    let session = GameSession::with_seed(GameConfig::default(), notifier, 0);
    let (handle, task) = spawn_session(session, OPPONENT_DELAY);
    handle.reset().unwrap();
    drop(handle);

    task.await.unwrap();
    // The session (and its notifier) is gone once the actor stops.
    while events.recv().await.is_some() {}
}
